//! Error types for pgfrag

use thiserror::Error;

/// Result type alias for fragment operations
pub type FragResult<T> = Result<T, FragError>;

/// Error types for fragment building and result-list access
#[derive(Debug, Error)]
pub enum FragError {
    /// First row requested from an empty result list
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected identifier or alias name
    #[error("Validation error: {0}")]
    Validation(String),
}

impl FragError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
