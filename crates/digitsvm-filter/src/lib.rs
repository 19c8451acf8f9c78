//! digitsvm-filter - Image smoothing
//!
//! - [`Kernel`]: integer-weighted 2D convolution kernels
//! - [`convolve_gray`]: normalized convolution of a grayscale image
//! - [`gaussian_blur`]: the 5x5 discrete Gaussian used to denoise
//!   photographs before thresholding

pub mod convolve;
mod error;
pub mod kernel;

pub use convolve::{BorderHandling, convolve_gray, gaussian_blur};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
