//! Email value object.
//!
//! Wraps a validated email address. Constructed once, never mutated;
//! compared by wrapped value.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};

// Local part and domain must be non-empty, free of whitespace and '@',
// with at least one '.' segment after the '@'.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and wrap a raw email string.
    ///
    /// # Errors
    /// Returns `AppError::InvalidEmail` if the input does not match the
    /// expected `local@domain.tld` shape.
    pub fn new(value: &str) -> AppResult<Self> {
        if !EMAIL_REGEX.is_match(value) {
            return Err(AppError::InvalidEmail(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Reconstruct from a value that was validated before it was persisted.
    ///
    /// The stored row is trusted; no re-validation happens here.
    pub fn from_trusted(value: String) -> Self {
        Self(value)
    }

    /// Get the wrapped address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the wrapped address.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_round_trips() {
        let email = Email::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
        assert_eq!(email.to_string(), "user@example.com");
    }

    #[test]
    fn accepts_subdomains_and_plus_addressing() {
        for valid in ["a@b.co", "user+tag@mail.example.org", "first.last@sub.domain.io"] {
            assert!(Email::new(valid).is_ok(), "{valid} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for invalid in ["bad-email", "no@tld", "spaces in@mail.com", "@missing.local", "two@@at.com", ""] {
            let result = Email::new(invalid);
            assert!(
                matches!(result, Err(AppError::InvalidEmail(ref e)) if e == invalid),
                "{invalid} should be rejected"
            );
        }
    }

    #[test]
    fn invalid_email_error_carries_input() {
        let err = Email::new("bad-email").unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format: bad-email");
    }

    #[test]
    fn from_trusted_skips_validation() {
        // Persisted rows are assumed valid even if the pattern changed since.
        let email = Email::from_trusted("legacy@host".to_string());
        assert_eq!(email.as_str(), "legacy@host");
    }

    #[test]
    fn equality_by_value() {
        assert_eq!(Email::new("a@b.co").unwrap(), Email::from_trusted("a@b.co".to_string()));
    }
}
