//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Short code and session id generation
//! - [`url_validator`] - Absolute URL validation for submitted links

pub mod code_generator;
pub mod url_validator;
