//! Error types for digitsvm-binarize

use thiserror::Error;

/// Errors that can occur during thresholding and binarization
#[derive(Debug, Error)]
pub enum BinarizeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] digitsvm_core::Error),

    /// Histogram with no pixels
    #[error("empty image: no pixels to process")]
    EmptyImage,

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Binary image contains no ink pixels
    #[error("no content: binary image has no ink pixels")]
    NoContent,
}

/// Result type for binarize operations
pub type BinarizeResult<T> = Result<T, BinarizeError>;
