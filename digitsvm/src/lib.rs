//! digitsvm - Handwritten digit recognition
//!
//! A photograph of a single handwritten digit is reduced to a 28x28 binary
//! raster with Otsu's threshold, flattened to 784 features and scored by
//! ten one-vs-rest RBF-kernel SVMs; the highest score wins.
//!
//! # Threshold values
//!
//! The Otsu threshold reported by [`Preprocessed::threshold`] and
//! [`binarize::compute_otsu_threshold`] is one above the last bin of the
//! lower class. Tools that report the split bin itself print a value one
//! lower for the same binarization.
//!
//! # Overview
//!
//! - [`io`]: decode and encode images
//! - [`transform`]: orientation correction and resampling
//! - [`filter`]: Gaussian smoothing
//! - [`binarize`]: Otsu threshold, binarization, preview, cropping
//! - [`svm`]: model loading, scoring and the ten-class model bank
//! - [`pipeline`]: the preprocessing chain tying these together
//! - [`DigitRecognizer`]: preprocessing plus classification
//!
//! # Example
//!
//! ```no_run
//! use digitsvm::{DigitRecognizer, ModelLayout, SvmConfig};
//!
//! let recognizer = DigitRecognizer::load(&ModelLayout::new("models"), SvmConfig::default())?;
//! let recognition = recognizer.recognize_file("digit.png")?;
//! println!("digit {} (score {:.3})", recognition.digit(), recognition.prediction.best_score());
//! # Ok::<(), digitsvm::Error>(())
//! ```

mod error;
pub mod pipeline;
mod recognizer;

pub use error::{Error, Result};
pub use pipeline::{PreprocessOptions, Preprocessed, preprocess, preprocess_centered};
pub use recognizer::{DigitRecognizer, Recognition};

// Re-export core types (primary data structures used everywhere)
pub use digitsvm_core::{
    BinarizedVector, FEATURE_LEN, GrayscaleImage, GrayscaleImageMut, HISTOGRAM_BINS, Histogram,
    TARGET_HEIGHT, TARGET_WIDTH,
};

// Types needed to configure the pipeline and the classifier
pub use digitsvm_binarize::{BinaryImage, Polarity};
pub use digitsvm_filter::BorderHandling;
pub use digitsvm_io::GrayConversion;
pub use digitsvm_svm::{ModelBank, ModelLayout, NUM_CLASSES, Prediction, SvmConfig, SvmModel};
pub use digitsvm_transform::{Rotation, ScaleMethod};

// Re-export domain crates as modules to avoid name conflicts
pub use digitsvm_binarize as binarize;
pub use digitsvm_filter as filter;
pub use digitsvm_io as io;
pub use digitsvm_svm as svm;
pub use digitsvm_transform as transform;
