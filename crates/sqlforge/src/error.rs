//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for sqlforge operations
pub type OrmResult<T> = Result<T, OrmError>;

/// Error types for statement building and relation loading
#[derive(Debug, Error)]
pub enum OrmError {
    /// Validation error (bad identifier, bad range bounds, unsupported clause combination)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Row not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Execution error reported by an execution context
    #[error("Execution error: {0}")]
    Execution(String),

    /// Unique constraint violation, keyed by the offending field
    #[error("Unique constraint violation on field '{field}': {message}")]
    UniqueViolation { field: String, message: String },
}

impl OrmError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// Create a unique violation error for a specific field
    pub fn unique_violation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UniqueViolation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a unique violation error
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }
}
