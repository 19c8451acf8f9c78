//! Convolution kernels
//!
//! Kernels carry integer weights. Convolution divides the weighted sum by
//! the kernel sum afterwards, so a kernel never needs to be normalized to
//! fractions.

use crate::{FilterError, FilterResult};

/// Weights of the 5x5 discrete Gaussian (sum 273).
const GAUSSIAN_5X5: [i32; 25] = [
    1, 4, 7, 4, 1, //
    4, 16, 26, 16, 4, //
    7, 26, 41, 26, 7, //
    4, 16, 26, 16, 4, //
    1, 4, 7, 4, 1,
];

/// A 2D convolution kernel with integer weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel weights (row-major order)
    data: Vec<i32>,
}

impl Kernel {
    /// Create a zero kernel with the given dimensions, centered.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidParameters(format!(
                "kernel size must be positive, got {width}x{height}"
            )));
        }
        Ok(Kernel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![0; (width * height) as usize],
        })
    }

    /// Create a centered kernel from row-major weights.
    pub fn from_slice(width: u32, height: u32, data: &[i32]) -> FilterResult<Self> {
        let mut kernel = Self::new(width, height)?;
        if data.len() != kernel.data.len() {
            return Err(FilterError::InvalidParameters(format!(
                "kernel data length {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        kernel.data.copy_from_slice(data);
        Ok(kernel)
    }

    /// Create a box (averaging) kernel of `size x size` ones.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        let mut kernel = Self::new(size, size)?;
        kernel.data.fill(1);
        Ok(kernel)
    }

    /// The 5x5 discrete Gaussian kernel with weights summing to 273.
    pub fn gaussian_5x5() -> Self {
        Kernel {
            width: 5,
            height: 5,
            cx: 2,
            cy: 2,
            data: GAUSSIAN_5X5.to_vec(),
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Set the center coordinates.
    pub fn set_center(&mut self, cx: u32, cy: u32) -> FilterResult<()> {
        if cx >= self.width || cy >= self.height {
            return Err(FilterError::InvalidParameters(format!(
                "center ({cx}, {cy}) outside {}x{} kernel",
                self.width, self.height
            )));
        }
        self.cx = cx;
        self.cy = cy;
        Ok(())
    }

    /// Get the kernel weights.
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Get the weight at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set the weight at (x, y). Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: i32) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = value;
        }
    }

    /// Sum of all weights (the normalization constant).
    pub fn sum(&self) -> i64 {
        self.data.iter().map(|&v| v as i64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_sum_and_symmetry() {
        let k = Kernel::gaussian_5x5();
        assert_eq!(k.sum(), 273);
        assert_eq!(k.get(2, 2), Some(41));
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(k.get(x, y), k.get(4 - x, y));
                assert_eq!(k.get(x, y), k.get(x, 4 - y));
            }
        }
    }

    #[test]
    fn test_from_slice_len_check() {
        assert!(Kernel::from_slice(3, 3, &[1; 8]).is_err());
        let k = Kernel::from_slice(3, 1, &[1, 2, 1]).unwrap();
        assert_eq!((k.center_x(), k.center_y()), (1, 0));
        assert_eq!(k.sum(), 4);
    }

    #[test]
    fn test_set_get() {
        let mut k = Kernel::new(3, 3).unwrap();
        k.set(0, 2, 5);
        k.set(3, 3, 9);
        assert_eq!(k.get(0, 2), Some(5));
        assert_eq!(k.get(3, 0), None);
        assert!(k.set_center(3, 0).is_err());
        k.set_center(0, 0).unwrap();
        assert_eq!(k.center_x(), 0);
    }

    #[test]
    fn test_box_kernel() {
        let k = Kernel::box_kernel(3).unwrap();
        assert_eq!(k.sum(), 9);
        assert!(Kernel::box_kernel(0).is_err());
    }
}
