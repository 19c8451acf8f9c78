//! Error types for digitsvm-svm

use thiserror::Error;

/// Errors that can occur while loading models or classifying
#[derive(Debug, Error)]
pub enum SvmError {
    /// A token in a model resource is not a finite number, or a resource
    /// has more content than its format allows
    #[error("malformed model resource {resource} at line {line}: unexpected token {token:?}")]
    ModelFormat {
        resource: String,
        line: usize,
        token: String,
    },

    /// A model resource contains no values
    #[error("model resource {resource} is empty")]
    EmptyResource { resource: String },

    /// Support vector rows and coefficients disagree in count or dimension
    #[error("model size error in {resource}: {message}")]
    ModelSize { resource: String, message: String },

    /// A model bank needs exactly one model per class
    #[error("expected {expected} class models, got {actual}")]
    ClassCount { expected: usize, actual: usize },

    /// Input vector length differs from the model dimensionality
    #[error("dimension mismatch: model expects {expected} features, input has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A model resource could not be read
    #[error("failed to read model resource {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for SVM operations
pub type SvmResult<T> = Result<T, SvmError>;
