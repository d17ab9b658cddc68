//! Model error types (deterministic only)

use thiserror::Error;

/// Errors raised when the caller hands the model malformed input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Caller input does not fit the document, e.g. mismatched sizes
    #[error("Invalid argument: {0}")]
    Argument(String),
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
