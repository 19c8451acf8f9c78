//! digitsvm-transform - Geometric transformations
//!
//! - **Orthogonal rotation** ([`rotate`]): quarter-turn rotations and flips
//!   used to correct the orientation of captured photographs
//! - **Resampling** ([`scale`]): area-map (anti-aliased) and sampling
//!   resize to the classifier raster

mod error;
pub mod rotate;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use rotate::{Rotation, flip_lr, flip_tb, rotate_180, rotate_90, rotate_orth};
pub use scale::{ScaleMethod, scale_area_map, scale_by_sampling, scale_to_size};

// Re-export core for convenience
pub use digitsvm_core;
