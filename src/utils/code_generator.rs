//! Short code and session identifier generation.
//!
//! Codes are drawn uniformly from `[A-Za-z0-9]`. Uniqueness is never assumed
//! from randomness alone; the link registry checks every generated code.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of a generated short code.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Length of a generated session identifier.
pub const SESSION_ID_LENGTH: usize = 32;

/// Source of candidate short codes.
///
/// # Implementations
///
/// - [`RandomCodeGenerator`] - thread-local RNG, used in production
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a candidate code. Callers must check it for collisions.
    fn generate(&self) -> String;
}

/// Generates [`SHORT_CODE_LENGTH`]-character alphanumeric codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        random_alphanumeric(SHORT_CODE_LENGTH)
    }
}

/// Generates an opaque identifier for a new session.
pub fn generate_session_id() -> String {
    random_alphanumeric(SESSION_ID_LENGTH)
}

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
