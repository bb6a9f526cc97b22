//! Domain error types
//!
//! This module defines error types specific to domain operations,
//! mainly validation failures at value construction time.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A page URL was empty or whitespace-only
    #[error("Invalid page URL: {0}")]
    InvalidUrl(String),

    /// Login was attempted with an empty email or password field
    #[error("Missing credentials: email and password are both required")]
    MissingCredentials,

    /// Generic validation failure
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidUrl("<empty>".to_string());
        assert_eq!(err.to_string(), "Invalid page URL: <empty>");

        let err = DomainError::MissingCredentials;
        assert_eq!(
            err.to_string(),
            "Missing credentials: email and password are both required"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = DomainError::InvalidUrl("a".to_string());
        let err2 = DomainError::InvalidUrl("a".to_string());
        let err3 = DomainError::InvalidUrl("b".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
