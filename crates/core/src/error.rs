//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// `InvalidCurrency` and `AlreadyMarried` are contract violations: the
/// non-`try_` constructors turn them into panics. Under-age job or spouse
/// assignments are never errors; those setters clear the field instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A currency code outside the supported set.
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    /// A founding spouse already has a spouse.
    #[error("already married: {0}")]
    AlreadyMarried(String),

    /// A value failed validation (e.g. malformed configuration).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrency(code.into())
    }

    pub fn already_married(name: impl Into<String>) -> Self {
        Self::AlreadyMarried(name.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Escalate a contract violation to a panic.
    ///
    /// Used by the infallible constructors, where a bad currency code or a
    /// remarriage is a bug in the caller rather than a recoverable outcome.
    #[track_caller]
    pub fn fatal(self) -> ! {
        panic!("{self}")
    }
}
