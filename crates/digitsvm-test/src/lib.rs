//! digitsvm-test - Regression test framework for digitsvm
//!
//! This crate provides the harness shared by the integration tests of every
//! digitsvm crate:
//!
//! - [`RegParams`]: indexed value / vector / string comparisons with a
//!   failure log and a final [`RegParams::cleanup`] verdict
//! - Synthetic image fixtures ([`two_tone_image`], [`ring_glyph`], ...)
//! - Model bundle writers for loader tests ([`write_model_bundle`])
//!
//! # Usage
//!
//! ```ignore
//! use digitsvm_test::RegParams;
//!
//! let mut rp = RegParams::new("otsu");
//! rp.compare_values(11.0, threshold as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{
    ModelBundle, gradient_image, ring_glyph, scratch_dir, two_tone_image, write_model_bundle,
};
pub use params::{RegParams, RegTestMode};

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}
