//! digitsvm Core - Basic data structures for digit classification
//!
//! This crate provides the fundamental data structures shared by every
//! stage of the digit recognition pipeline:
//!
//! - [`GrayscaleImage`] / [`GrayscaleImageMut`] - 8-bit image container (immutable / mutable)
//! - [`Histogram`] - 256-bin intensity histogram
//! - [`BinarizedVector`] - Fixed-length 0/1 feature vector fed to the classifier

pub mod error;
pub mod histogram;
pub mod image;
pub mod vector;

pub use error::{Error, Result};
pub use histogram::{HISTOGRAM_BINS, Histogram};
pub use image::{GrayscaleImage, GrayscaleImageMut};
pub use vector::BinarizedVector;

/// Width of the classifier input raster.
pub const TARGET_WIDTH: u32 = 28;

/// Height of the classifier input raster.
pub const TARGET_HEIGHT: u32 = 28;

/// Length of a classifier feature vector (`TARGET_WIDTH * TARGET_HEIGHT`).
pub const FEATURE_LEN: usize = (TARGET_WIDTH * TARGET_HEIGHT) as usize;
