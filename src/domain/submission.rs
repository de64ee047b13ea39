//! Submission workflow: raw form input in, accepted record or rejection out.
//!
//! Checks run in a fixed order so the reported reason is always the first
//! rule broken:
//!
//! 1. empty input
//! 2. URL format
//! 3. registry capacity
//!
//! Only the accepted path touches the registry.

use crate::domain::entities::LinkRecord;
use crate::domain::registry::{LinkRegistry, MAX_LINKS, RegistryFull};
use crate::utils::url_validator::{UrlValidationError, ValidUrl, validate_absolute_url};

/// Reason a submission was rejected. The `Display` text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Please enter a URL")]
    EmptyInput,

    #[error("Please enter a valid URL")]
    InvalidFormat,

    #[error("Maximum {max} URLs can be shortened concurrently", max = MAX_LINKS)]
    CapacityExceeded,
}

impl SubmissionError {
    /// Stable machine-readable identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidFormat => "invalid_format",
            Self::CapacityExceeded => "capacity_exceeded",
        }
    }
}

impl From<UrlValidationError> for SubmissionError {
    fn from(err: UrlValidationError) -> Self {
        match err {
            UrlValidationError::Empty => Self::EmptyInput,
            _ => Self::InvalidFormat,
        }
    }
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(LinkRecord),
    Rejected(SubmissionError),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The accepted record, if any.
    pub fn record(&self) -> Option<&LinkRecord> {
        match self {
            Self::Accepted(record) => Some(record),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<&SubmissionError> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// Runs the local checks (steps 1 and 2) without touching any registry.
///
/// # Errors
///
/// Returns [`SubmissionError::EmptyInput`] or [`SubmissionError::InvalidFormat`].
pub fn validate_input(raw_input: &str) -> Result<ValidUrl, SubmissionError> {
    validate_absolute_url(raw_input).map_err(SubmissionError::from)
}

/// Adds an already validated URL (step 3).
pub fn admit(registry: &mut LinkRegistry, url: ValidUrl) -> Outcome {
    match registry.add(url) {
        Ok(record) => Outcome::Accepted(record),
        Err(RegistryFull { .. }) => Outcome::Rejected(SubmissionError::CapacityExceeded),
    }
}

/// Runs the whole workflow against `registry`.
pub fn submit(registry: &mut LinkRegistry, raw_input: &str) -> Outcome {
    match validate_input(raw_input) {
        Ok(url) => admit(registry, url),
        Err(reason) => Outcome::Rejected(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::code_generator::{MockCodeGenerator, RandomCodeGenerator};
    use std::sync::Arc;

    fn registry() -> LinkRegistry {
        LinkRegistry::new(Arc::new(RandomCodeGenerator))
    }

    fn fill(registry: &mut LinkRegistry) {
        for i in 0..MAX_LINKS {
            assert!(submit(registry, &format!("https://example.com/{i}")).is_accepted());
        }
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(SubmissionError::EmptyInput.to_string(), "Please enter a URL");
        assert_eq!(
            SubmissionError::InvalidFormat.to_string(),
            "Please enter a valid URL"
        );
        assert_eq!(
            SubmissionError::CapacityExceeded.to_string(),
            "Maximum 5 URLs can be shortened concurrently"
        );
    }

    #[test]
    fn test_submit_empty_and_whitespace() {
        let mut registry = registry();

        for input in ["", " ", "\t", "\n  \r\n"] {
            let outcome = submit(&mut registry, input);
            assert_eq!(outcome, Outcome::Rejected(SubmissionError::EmptyInput));
        }
        assert_eq!(registry.size(), 0);
    }

    #[test]
    fn test_submit_invalid_format() {
        let mut registry = registry();

        for input in ["not a url", "example.com", "ftp:/bad", "http//missing-colon.com"] {
            let outcome = submit(&mut registry, input);
            assert_eq!(
                outcome,
                Outcome::Rejected(SubmissionError::InvalidFormat),
                "input {input:?} should be rejected"
            );
        }
        assert_eq!(registry.size(), 0);
    }

    #[test]
    fn test_submit_accepts_valid_url() {
        let mut registry = registry();

        let outcome = submit(&mut registry, "https://example.com/page");

        let record = outcome.record().expect("accepted");
        assert_eq!(record.original_url, "https://example.com/page");
        assert_eq!(record.clicks, 0);
        assert_eq!(record.short_code.len(), 6);
        assert_eq!(registry.size(), 1);
    }

    #[test]
    fn test_submit_trims_input() {
        let mut registry = registry();

        let outcome = submit(&mut registry, "   https://example.com/page  ");

        assert_eq!(
            outcome.record().map(|r| r.original_url.as_str()),
            Some("https://example.com/page")
        );
    }

    #[test]
    fn test_sixth_submission_rejected() {
        let mut registry = registry();
        fill(&mut registry);

        let outcome = submit(&mut registry, "https://example.com/sixth");

        assert_eq!(outcome, Outcome::Rejected(SubmissionError::CapacityExceeded));
        assert_eq!(registry.size(), MAX_LINKS);
    }

    #[test]
    fn test_empty_reported_before_capacity() {
        let mut registry = registry();
        fill(&mut registry);

        assert_eq!(
            submit(&mut registry, "  ").rejection(),
            Some(&SubmissionError::EmptyInput)
        );
        assert_eq!(
            submit(&mut registry, "not a url").rejection(),
            Some(&SubmissionError::InvalidFormat)
        );
    }

    #[test]
    fn test_rejections_do_not_generate_codes() {
        let mut generator = MockCodeGenerator::new();
        generator.expect_generate().times(0);
        let mut registry = LinkRegistry::new(Arc::new(generator));

        submit(&mut registry, "");
        submit(&mut registry, "example.com");

        assert_eq!(registry.size(), 0);
    }

    #[test]
    fn test_consecutive_accepts_have_distinct_codes_with_colliding_generator() {
        let mut generator = MockCodeGenerator::new();
        let mut calls = 0;
        generator.expect_generate().returning(move || {
            calls += 1;
            let code = if calls <= 2 { "same00" } else { "other1" };
            code.to_string()
        });
        let mut registry = LinkRegistry::new(Arc::new(generator));

        let first = submit(&mut registry, "https://example.com/a");
        let second = submit(&mut registry, "https://example.com/b");

        let first_code = &first.record().unwrap().short_code;
        let second_code = &second.record().unwrap().short_code;
        assert_ne!(first_code, second_code);
    }

    #[test]
    fn test_admit_maps_full_registry_to_capacity_rejection() {
        let mut registry = registry();
        fill(&mut registry);

        let url = validate_input("https://example.com/overflow").unwrap();
        let outcome = admit(&mut registry, url);

        assert_eq!(outcome, Outcome::Rejected(SubmissionError::CapacityExceeded));
        assert_eq!(registry.size(), MAX_LINKS);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SubmissionError::EmptyInput.code(), "empty_input");
        assert_eq!(SubmissionError::InvalidFormat.code(), "invalid_format");
        assert_eq!(SubmissionError::CapacityExceeded.code(), "capacity_exceeded");
    }
}
