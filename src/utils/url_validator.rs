//! Absolute URL validation for user-submitted links.
//!
//! Accepts anything the WHATWG parser understands as an absolute URL with an
//! authority section (`scheme://host...`). The text itself is kept as the
//! user typed it, minus surrounding whitespace.

use std::fmt;
use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must contain '//' after the scheme")]
    MissingAuthority,

    #[error("URL has no host")]
    MissingHost,
}

/// A URL that passed [`validate_absolute_url`].
///
/// The only way to obtain one is through validation, so every value of this
/// type is a non-empty absolute URL with a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUrl {
    raw: String,
    parsed: Url,
}

impl ValidUrl {
    /// The trimmed text exactly as submitted.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Host component of the parsed URL.
    pub fn host(&self) -> &str {
        self.parsed.host_str().unwrap_or_default()
    }

    /// Scheme of the parsed URL, lowercased by the parser.
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl fmt::Display for ValidUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Validates that `input` is an absolute URL.
///
/// # Rules
///
/// 1. Surrounding whitespace is ignored; nothing left means [`UrlValidationError::Empty`]
/// 2. The text must parse as an absolute URL (no relative references like `example.com`)
/// 3. The scheme must be followed by `//`, so `ftp:/bad` and `mailto:` style URLs are refused
/// 4. A non-empty host is required
///
/// # Errors
///
/// Returns the first rule that fails.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_absolute_url("https://example.com/page").is_ok());
/// assert!(validate_absolute_url("example.com").is_err());
/// assert!(validate_absolute_url("ftp:/bad").is_err());
/// ```
pub fn validate_absolute_url(input: &str) -> Result<ValidUrl, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let parsed =
        Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    // The parser quietly repairs `scheme:/host` for special schemes; the raw text must not need it.
    let has_authority = trimmed
        .get(parsed.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));
    if !has_authority {
        return Err(UrlValidationError::MissingAuthority);
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlValidationError::MissingHost),
    }

    Ok(ValidUrl {
        raw: trimmed.to_string(),
        parsed,
    })
}
