use std::fmt;

use estate_storage::StorageError;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors reported by the property service.
///
/// A missing record is not an error: reads return `None` and writes return
/// [`crate::WriteOutcome::NotFound`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or contradictory caller input, detected before any storage access.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The storage collaborator failed; passed through unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Create a new InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Get error category for logging/monitoring
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Validation,
            Self::Storage(_) => ErrorCategory::Storage,
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::invalid_argument(errors.to_string())
    }
}

/// Error categories for logging and monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Validation,
    Storage,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Storage => write!(f, "storage"),
        }
    }
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;
