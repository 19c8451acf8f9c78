//! Error types for digitsvm-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] digitsvm_core::Error),

    /// Invalid scale target
    #[error("invalid scale target: {width}x{height}")]
    InvalidScaleTarget { width: u32, height: u32 },

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
