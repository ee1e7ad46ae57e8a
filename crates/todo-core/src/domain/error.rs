//! Domain Layer - Errors

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Malformed value under key `{key}`: {reason}")]
    Malformed { key: String, reason: String },
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn malformed(key: &str, reason: impl Into<String>) -> Self {
        DomainError::Malformed {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::malformed("tasks", "expected array");
        assert_eq!(err.to_string(), "Malformed value under key `tasks`: expected array");
        assert_eq!(
            DomainError::InvalidInput("empty".into()).to_string(),
            "Invalid input: empty"
        );
    }
}
