//! Binarized feature vector
//!
//! The flattened 0/1 raster handed to the classifier. Index `i` of the
//! vector corresponds to pixel `(i % width, i / width)` of the binarized
//! image it was flattened from.

use crate::error::{Error, Result};

/// Fixed-length sequence of 0/1 values in row-major order.
///
/// Immutable once built: consumers only read it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinarizedVector {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl BinarizedVector {
    /// Wrap a row-major 0/1 buffer of a `width x height` raster.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::DataLength`] if `bits.len() != width * height`
    /// - [`Error::InvalidValue`] if an element is neither 0 nor 1
    pub fn new(width: u32, height: u32, bits: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if bits.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: bits.len(),
            });
        }
        if let Some((index, &value)) = bits.iter().enumerate().find(|&(_, &b)| b > 1) {
            return Err(Error::InvalidValue {
                index,
                value: value as u32,
            });
        }
        Ok(BinarizedVector {
            width,
            height,
            bits,
        })
    }

    /// Width of the raster this vector was flattened from.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the raster this vector was flattened from.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Vector length (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false for a constructed vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The 0/1 values.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Number of elements set to 1.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Convert to real-valued features for kernel evaluation.
    pub fn to_features(&self) -> Vec<f64> {
        self.bits.iter().map(|&b| f64::from(b)).collect()
    }
}
