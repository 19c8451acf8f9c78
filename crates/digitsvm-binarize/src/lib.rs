//! digitsvm-binarize - Global thresholding
//!
//! - [`compute_otsu_threshold`]: Otsu's histogram method
//! - [`threshold_to_binary`] / [`threshold_otsu`]: produce a [`BinaryImage`]
//!   whose ink pixels are 1
//! - [`BinaryImage::flatten`]: row-major feature vector for the classifier
//! - [`BinaryImage::to_preview`] and [`BinaryImage::crop_to_content`]
//!
//! A threshold `t` splits intensities into a lower class `v < t` and an
//! upper class `v >= t`. [`Polarity`] decides which of the two is ink.

pub mod binary;
mod error;
pub mod otsu;

pub use binary::{BinaryImage, Polarity, threshold_otsu, threshold_to_binary};
pub use error::{BinarizeError, BinarizeResult};
pub use otsu::{compute_otsu_threshold, otsu_threshold_from_histogram};

// Re-export core types
pub use digitsvm_core;
