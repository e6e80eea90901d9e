//! Domain error model.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Validation failures carry every reason that applied, and render as the
/// reasons joined by `;`. Storage failures are passed through as text so the
/// domain layer stays free of repository types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more validation checks failed.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The storage collaborator failed.
    #[error("repository failure: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn validation(errors: impl Into<ValidationErrors>) -> Self {
        Self::Validation(errors.into())
    }

    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }

    /// Ordered error messages.
    ///
    /// For validation failures this is one entry per reason; any other error
    /// yields its own message as the only entry.
    pub fn errors(&self) -> Vec<String> {
        match self {
            DomainError::Validation(errors) => errors.messages(),
            other => vec![other.to_string()],
        }
    }

    /// Validation reasons, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            DomainError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}
