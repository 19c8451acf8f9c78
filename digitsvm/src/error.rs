//! Error type for the digitsvm facade

use thiserror::Error;

/// Any failure of the preprocessing pipeline or the classifier
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid image or vector data
    #[error(transparent)]
    Core(#[from] digitsvm_core::Error),

    /// Image could not be read, decoded or written
    #[error(transparent)]
    Io(#[from] digitsvm_io::IoError),

    /// Rotation or resampling failed
    #[error(transparent)]
    Transform(#[from] digitsvm_transform::TransformError),

    /// Smoothing failed
    #[error(transparent)]
    Filter(#[from] digitsvm_filter::FilterError),

    /// Thresholding failed
    #[error(transparent)]
    Binarize(#[from] digitsvm_binarize::BinarizeError),

    /// Model loading or classification failed
    #[error(transparent)]
    Svm(#[from] digitsvm_svm::SvmError),
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, Error>;
