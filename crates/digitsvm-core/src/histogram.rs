//! Intensity histogram
//!
//! A fixed 256-bin count of 8-bit pixel values. The sum of all bins equals
//! the number of pixels the histogram was built from.

use crate::error::{Error, Result};

/// Number of bins in an 8-bit intensity histogram.
pub const HISTOGRAM_BINS: usize = 256;

/// 256-bin histogram of 8-bit intensities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; HISTOGRAM_BINS],
}

impl Histogram {
    /// Build a histogram from raw 8-bit pixels.
    pub fn from_pixels(pixels: &[u8]) -> Self {
        let mut counts = [0u64; HISTOGRAM_BINS];
        for &p in pixels {
            counts[p as usize] += 1;
        }
        Histogram { counts }
    }

    /// Build a histogram from explicit bin counts.
    ///
    /// An all-zero histogram is allowed here; consumers that need a
    /// non-empty population check [`Histogram::total`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `counts` does not have 256 entries.
    pub fn from_counts(counts: &[u64]) -> Result<Self> {
        let counts: [u64; HISTOGRAM_BINS] =
            counts.try_into().map_err(|_| Error::DataLength {
                expected: HISTOGRAM_BINS,
                actual: counts.len(),
            })?;
        Ok(Histogram { counts })
    }

    /// Count in bin `value`.
    #[inline]
    pub fn count(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// All 256 bin counts.
    #[inline]
    pub fn counts(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.counts
    }

    /// Total population (sum of all bins).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Intensity-weighted sum `Σ i * hist[i]`.
    pub fn weighted_sum(&self) -> u64 {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| i as u64 * c)
            .sum()
    }

    /// Number of non-empty bins.
    pub fn occupied_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}
