//! Shared primitives for all Atrium crates.

#![forbid(unsafe_code)]

/// Pagination value types shared by every listing operation.
pub mod page;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use page::{Page, PageRequest};

/// Result type used across Atrium crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl std::fmt::Display for NonEmptyString {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant. Surfaced directly, never retried.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Underlying store could not be reached or enumerated.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A specific append or write failed after the store was reached.
    #[error("persistence failure: {0}")]
    PersistenceFailure(String),
}

#[cfg(test)]
mod tests {
    use super::{AppError, NonEmptyString};

    #[test]
    fn non_empty_string_rejects_whitespace() {
        let result = NonEmptyString::new("   ");
        assert!(result.is_err());
    }

    #[test]
    fn non_empty_string_keeps_original_value() {
        let value = NonEmptyString::new("Projector A-104");
        assert!(value.is_ok());
        assert_eq!(
            value.unwrap_or_else(|_| unreachable!()).as_str(),
            "Projector A-104"
        );
    }

    #[test]
    fn error_messages_carry_category_prefix() {
        let error = AppError::StorageUnavailable("connection refused".to_owned());
        assert_eq!(
            error.to_string(),
            "storage unavailable: connection refused"
        );
    }
}
