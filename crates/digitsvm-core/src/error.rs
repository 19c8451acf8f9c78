//! Error types for digitsvm-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// digitsvm core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions (zero area)
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel or bit buffer does not match the declared dimensions
    #[error("data length mismatch: expected {expected}, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Value outside the allowed domain (e.g. a non-binary vector element)
    #[error("invalid value {value} at index {index}")]
    InvalidValue { index: usize, value: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for digitsvm core operations
pub type Result<T> = std::result::Result<T, Error>;
