//! GrayscaleImage - The 8-bit image container
//!
//! `GrayscaleImage` holds a `width x height` raster of 8-bit intensities in
//! row-major order. Every pixel index is `y * width + x`.
//!
//! # Ownership model
//!
//! `GrayscaleImage` uses `Arc` for cheap cloning (shared ownership) and is
//! never modified in place. To build or modify pixel data, work on a
//! [`GrayscaleImageMut`] (obtained from [`GrayscaleImage::new`] +
//! [`GrayscaleImage::try_into_mut`], or [`GrayscaleImage::to_mut`]) and
//! convert back with `Into<GrayscaleImage>`.

use crate::error::{Error, Result};
use crate::histogram::Histogram;
use std::sync::Arc;

/// Internal image storage shared between clones.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImageData {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Immutable 8-bit grayscale image.
///
/// # Examples
///
/// ```
/// use digitsvm_core::GrayscaleImage;
///
/// let img = GrayscaleImage::from_raw(2, 2, vec![0, 64, 128, 255]).unwrap();
/// assert_eq!(img.get_pixel(1, 1), Some(255));
/// assert_eq!(img.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleImage {
    inner: Arc<ImageData>,
}

impl GrayscaleImage {
    /// Create a new image with every pixel set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Create a new image with every pixel set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        let len = Self::checked_area(width, height)?;
        Ok(Self::wrap(width, height, vec![value; len]))
    }

    /// Create an image from a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::DataLength`] if `data.len() != width * height`
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::checked_area(width, height)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::wrap(width, height, data))
    }

    /// Create an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u8,
    {
        let len = Self::checked_area(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self::wrap(width, height, data))
    }

    fn checked_area(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    fn wrap(width: u32, height: u32, data: Vec<u8>) -> Self {
        GrayscaleImage {
            inner: Arc::new(ImageData {
                width,
                height,
                data,
            }),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Total number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.data.len()
    }

    /// Always false: zero-area images cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Get the pixel at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the pixel at `(x, y)` without the bounds check on coordinates.
    ///
    /// Out-of-range coordinates panic on slice indexing or alias another pixel.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.inner.data[y as usize * self.inner.width as usize + x as usize]
    }

    /// Compute the 256-bin intensity histogram of the image.
    pub fn histogram(&self) -> Histogram {
        Histogram::from_pixels(self.data())
    }

    /// Number of handles sharing this image's data.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<GrayscaleImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(GrayscaleImageMut { inner: data }),
            Err(arc) => Err(GrayscaleImage { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> GrayscaleImageMut {
        GrayscaleImageMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable grayscale image
///
/// Used by image-producing operations to fill an output raster before
/// freezing it into a [`GrayscaleImage`].
#[derive(Debug)]
pub struct GrayscaleImageMut {
    inner: ImageData,
}

impl GrayscaleImageMut {
    /// Create a zero-filled mutable image.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let img = GrayscaleImage::new(width, height)?;
        Ok(img.to_mut())
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Mutable row-major pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get the pixel at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[y as usize * self.inner.width as usize + x as usize])
    }

    /// Set the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are outside
    /// the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.inner.width as usize + x as usize,
                len: self.inner.data.len(),
            });
        }
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    /// Set the pixel at `(x, y)` without the bounds check on coordinates.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: u8) {
        let idx = y as usize * self.inner.width as usize + x as usize;
        self.inner.data[idx] = value;
    }
}

impl From<GrayscaleImageMut> for GrayscaleImage {
    fn from(img: GrayscaleImageMut) -> Self {
        GrayscaleImage {
            inner: Arc::new(img.inner),
        }
    }
}
