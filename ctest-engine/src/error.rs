//! Layered error types for the engine

use ctest_core::ModelError;
use thiserror::Error;

/// Engine-level errors
///
/// The gapping and regapping algorithms never fail; errors only come from
/// preparing annotations, loading configuration or handing malformed input
/// to the model.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Annotation or language resources could not be prepared
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// Invalid generator or language configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed caller input rejected by the model
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
