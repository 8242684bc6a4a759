//! Unified error types for the domain layer
//!
//! Value objects validate at construction and report failures through
//! `DomainError`, so adapters never have to fall back to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects built from text)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for invariant violations.
    ///
    /// Use this when a value object is constructed from out-of-range or
    /// otherwise unacceptable input:
    /// - Identifiers below 1
    /// - Empty or overlong names
    /// - Unknown type tags
    /// - Stats outside 0..=255
    ///
    /// # Example
    /// ```ignore
    /// if value < 1 {
    ///     return Err(DomainError::validation("Pokemon ID must be a positive integer"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("Pokemon name cannot be empty");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation failed: Pokemon name cannot be empty"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("not a number: pikachu");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Parse error: not a number: pikachu");
    }
}
