//! RBF decision function
//!
//! `f(x) = sum_i(alpha_i * exp(-gamma * ||x - sv_i||^2)) + bias`

use crate::{SvmConfig, SvmError, SvmModel, SvmResult};

/// RBF kernel `exp(-gamma * ||a - b||^2)`.
///
/// Both slices must have the same length; extra elements of the longer
/// slice are ignored.
#[inline]
pub fn rbf_kernel(a: &[f64], b: &[f64], gamma: f64) -> f64 {
    let sq_dist: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum();
    (-gamma * sq_dist).exp()
}

/// Evaluate a model's decision function at `x`.
///
/// # Errors
///
/// [`SvmError::DimensionMismatch`] if `x.len()` differs from the model
/// dimension.
pub fn score(x: &[f64], model: &SvmModel, config: &SvmConfig) -> SvmResult<f64> {
    if x.len() != model.dimension() {
        return Err(SvmError::DimensionMismatch {
            expected: model.dimension(),
            actual: x.len(),
        });
    }
    let sum: f64 = model
        .terms()
        .map(|(sv, alpha)| alpha * rbf_kernel(x, sv, config.gamma))
        .sum();
    Ok(sum + model.bias())
}
