//! digitsvm-svm - One-vs-rest RBF SVM digit classifier
//!
//! Each digit class has its own binary decision function
//!
//! ```text
//! f(x) = sum_i(alpha_i * exp(-gamma * ||x - sv_i||^2)) + bias
//! ```
//!
//! and the predicted digit is the class with the largest `f(x)`.
//!
//! # Modules
//!
//! - [`model`]: [`SvmModel`] and the shared [`SvmConfig`]
//! - [`loader`]: parse the three text resources of a class model
//! - [`scorer`]: the RBF kernel and decision function
//! - [`layout`]: digit to file name mapping
//! - [`bank`]: the ten-class [`ModelBank`] and [`Prediction`]
//!
//! # Example
//!
//! ```no_run
//! use digitsvm_svm::{ModelBank, ModelLayout, SvmConfig};
//!
//! let bank = ModelBank::load(&ModelLayout::new("models"), SvmConfig::default()).unwrap();
//! let prediction = bank.predict_features(&vec![0.0; bank.dimension()]).unwrap();
//! println!("digit {}", prediction.digit);
//! ```

pub mod bank;
mod error;
pub mod layout;
pub mod loader;
pub mod model;
pub mod scorer;

pub use bank::{ModelBank, NUM_CLASSES, Prediction};
pub use error::{SvmError, SvmResult};
pub use layout::{ModelLayout, ModelPaths};
pub use loader::{
    Resource, load_model, load_model_files, parse_bias, parse_coefficients,
    parse_support_vectors,
};
pub use model::{DEFAULT_GAMMA, SvmConfig, SvmModel};
pub use scorer::{rbf_kernel, score};

// Re-export core types
pub use digitsvm_core;
