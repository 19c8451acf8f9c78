//! I/O error types
//!
//! Provides a unified error type for all image I/O operations.
//! Codec errors from the `image` crate are mapped into `IoError`
//! variants so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The source image could not be read or decoded
    #[error("failed to load image '{path}': {message}")]
    ImageLoad { path: String, message: String },

    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The codec returned an error while decoding
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The codec returned an error while encoding
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. zero-area image)
    #[error("core error: {0}")]
    Core(#[from] digitsvm_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
