//! Unified error types for the domain layer
//!
//! One error type shared by the record model, the role factory and the
//! subject dispatcher, so callers never have to match on strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., missing or mistyped required field)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Value outside the closed subject enumeration
    #[error("Invalid subject: {subject}")]
    InvalidSubject { subject: String },
}

impl DomainError {
    /// Creates a validation error for a failed record check.
    ///
    /// # Example
    /// ```ignore
    /// if !document.contains_key("location") {
    ///     return Err(DomainError::validation("location is required"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid subject error
    pub fn invalid_subject(subject: impl Into<String>) -> Self {
        Self::InvalidSubject {
            subject: subject.into(),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
