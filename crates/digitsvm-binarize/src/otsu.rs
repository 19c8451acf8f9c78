//! Otsu's threshold selection
//!
//! Scans the 256-bin histogram once, splitting it after each bin into a
//! background (lower) and foreground (upper) class and keeping the split
//! with the largest between-class variance `wB * wF * (mB - mF)^2`.
//!
//! Class means use truncating integer division. The first split reaching
//! the maximum wins, so ties resolve to the lower threshold.

use crate::{BinarizeError, BinarizeResult};
use digitsvm_core::{GrayscaleImage, Histogram};
use tracing::debug;

/// Compute Otsu's threshold for a grayscale image
///
/// The returned value is one above the index of the best split bin (the
/// last intensity of the lower class). A threshold reported as that bin
/// index is therefore one lower than this value for the same split. See
/// [`otsu_threshold_from_histogram`].
pub fn compute_otsu_threshold(img: &GrayscaleImage) -> BinarizeResult<u8> {
    otsu_threshold_from_histogram(&img.histogram())
}

/// Compute Otsu's threshold from an intensity histogram
///
/// Returns `t = i + 1` where `i` is the last bin of the lower class at the
/// best split, so every `v < t` is in the lower class and `t` is the lowest
/// intensity of the upper class. A histogram with a single occupied bin
/// has no split and yields 0.
///
/// # Errors
///
/// [`BinarizeError::EmptyImage`] if the histogram holds no pixels.
pub fn otsu_threshold_from_histogram(hist: &Histogram) -> BinarizeResult<u8> {
    let total = hist.total();
    if total == 0 {
        return Err(BinarizeError::EmptyImage);
    }
    if hist.occupied_bins() < 2 {
        debug!(total, "otsu threshold of a single-level histogram");
        return Ok(0);
    }
    let sum = hist.weighted_sum();

    let mut w_b: u64 = 0;
    let mut sum_b: u64 = 0;
    let mut max_var: u128 = 0;
    let mut best: Option<usize> = None;

    for (i, &count) in hist.counts().iter().enumerate() {
        w_b += count;
        if w_b == 0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f == 0 {
            break;
        }
        sum_b += i as u64 * count;

        let m_b = sum_b / w_b;
        let m_f = (sum - sum_b) / w_f;
        let diff = m_b.abs_diff(m_f) as u128;
        let var = w_b as u128 * w_f as u128 * diff * diff;

        if var > max_var {
            max_var = var;
            best = Some(i);
        }
    }

    // best <= 254: the last occupied bin always empties the foreground
    let threshold = best.map_or(0, |i| (i + 1) as u8);
    debug!(threshold, total, "otsu threshold");
    Ok(threshold)
}
