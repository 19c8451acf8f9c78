//! Binary images
//!
//! A [`BinaryImage`] stores one bit per pixel as a byte: 1 for ink,
//! 0 for background. It remembers the [`Polarity`] it was thresholded
//! with so the preview renders ink the way it looked in the source.

use crate::{BinarizeError, BinarizeResult, compute_otsu_threshold};
use digitsvm_core::{BinarizedVector, GrayscaleImage, GrayscaleImageMut};

/// Which side of the threshold is ink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Dark strokes on light paper: `v < t` is ink
    #[default]
    InkIsDark,
    /// Light strokes on dark background: `v >= t` is ink
    InkIsLight,
}

impl Polarity {
    /// Whether intensity `value` is ink at threshold `threshold`.
    #[inline]
    pub fn is_ink(self, value: u8, threshold: u8) -> bool {
        match self {
            Polarity::InkIsDark => value < threshold,
            Polarity::InkIsLight => value >= threshold,
        }
    }

    /// Gray levels used to render `(ink, background)`.
    pub fn render_levels(self) -> (u8, u8) {
        match self {
            Polarity::InkIsDark => (0, 255),
            Polarity::InkIsLight => (255, 0),
        }
    }
}

/// A thresholded image: one 0/1 byte per pixel, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    width: u32,
    height: u32,
    bits: Vec<u8>,
    polarity: Polarity,
}

impl BinaryImage {
    /// Create an all-background binary image.
    pub fn new(width: u32, height: u32, polarity: Polarity) -> BinarizeResult<Self> {
        if width == 0 || height == 0 {
            return Err(digitsvm_core::Error::InvalidDimension { width, height }.into());
        }
        Ok(BinaryImage {
            width,
            height,
            bits: vec![0; width as usize * height as usize],
            polarity,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Polarity the image was thresholded with.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// All bits in row-major order.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// One row of bits.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.bits[start..start + w]
    }

    /// Get the bit at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.bits[(y * self.width + x) as usize])
    }

    /// Mark (x, y) as ink or background.
    pub fn set(&mut self, x: u32, y: u32, ink: bool) -> BinarizeResult<()> {
        if x >= self.width || y >= self.height {
            return Err(digitsvm_core::Error::IndexOutOfBounds {
                index: (y as usize) * self.width as usize + x as usize,
                len: self.bits.len(),
            }
            .into());
        }
        self.bits[(y * self.width + x) as usize] = ink as u8;
        Ok(())
    }

    /// Number of ink pixels.
    pub fn count_ink(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Flatten to the classifier's feature vector, index `y * width + x`.
    pub fn flatten(&self) -> BinarizeResult<BinarizedVector> {
        Ok(BinarizedVector::new(
            self.width,
            self.height,
            self.bits.clone(),
        )?)
    }

    /// Render as grayscale: ink and background take the levels of
    /// [`Polarity::render_levels`].
    pub fn to_preview(&self) -> BinarizeResult<GrayscaleImage> {
        let (ink, paper) = self.polarity.render_levels();
        let mut out = GrayscaleImageMut::new(self.width, self.height)?;
        for (d, &b) in out.data_mut().iter_mut().zip(&self.bits) {
            *d = if b == 1 { ink } else { paper };
        }
        Ok(out.into())
    }

    /// Bounding box of the ink as `(x, y, width, height)`, or `None` when
    /// there is no ink.
    pub fn content_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let mut x0 = u32::MAX;
        let mut y0 = u32::MAX;
        let mut x1 = 0;
        let mut y1 = 0;
        for y in 0..self.height {
            for (x, &b) in self.row(y).iter().enumerate() {
                if b == 1 {
                    let x = x as u32;
                    x0 = x0.min(x);
                    x1 = x1.max(x);
                    y0 = y0.min(y);
                    y1 = y1.max(y);
                }
            }
        }
        (x0 != u32::MAX).then(|| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
    }

    /// Crop to the ink bounding box and surround it with `padding`
    /// background pixels on every side.
    ///
    /// # Errors
    ///
    /// [`BinarizeError::NoContent`] if the image has no ink.
    pub fn crop_to_content(&self, padding: u32) -> BinarizeResult<BinaryImage> {
        let (bx, by, bw, bh) = self.content_bounds().ok_or(BinarizeError::NoContent)?;
        let too_large =
            || BinarizeError::InvalidParameters(format!("padding {padding} too large"));
        let pad2 = padding.checked_mul(2).ok_or_else(too_large)?;
        let out_w = bw.checked_add(pad2).ok_or_else(too_large)?;
        let out_h = bh.checked_add(pad2).ok_or_else(too_large)?;

        let mut out = BinaryImage::new(out_w, out_h, self.polarity)?;
        for y in 0..bh {
            let src = &self.row(by + y)[bx as usize..(bx + bw) as usize];
            let start = ((y + padding) * out_w + padding) as usize;
            out.bits[start..start + bw as usize].copy_from_slice(src);
        }
        Ok(out)
    }
}

/// Threshold a grayscale image
///
/// A pixel is ink (1) when [`Polarity::is_ink`] holds for it.
pub fn threshold_to_binary(
    img: &GrayscaleImage,
    threshold: u8,
    polarity: Polarity,
) -> BinarizeResult<BinaryImage> {
    let bits = img
        .data()
        .iter()
        .map(|&v| polarity.is_ink(v, threshold) as u8)
        .collect();
    Ok(BinaryImage {
        width: img.width(),
        height: img.height(),
        bits,
        polarity,
    })
}

/// Threshold a grayscale image at its Otsu threshold
///
/// Returns the binary image and the threshold used.
pub fn threshold_otsu(
    img: &GrayscaleImage,
    polarity: Polarity,
) -> BinarizeResult<(BinaryImage, u8)> {
    let t = compute_otsu_threshold(img)?;
    Ok((threshold_to_binary(img, t, polarity)?, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_polarity() {
        let img = GrayscaleImage::from_raw(4, 1, vec![0, 10, 11, 255]).unwrap();
        let b = threshold_to_binary(&img, 11, Polarity::InkIsDark).unwrap();
        assert_eq!(b.bits(), &[1, 1, 0, 0]);
    }

    #[test]
    fn test_light_polarity() {
        let img = GrayscaleImage::from_raw(4, 1, vec![0, 10, 11, 255]).unwrap();
        let b = threshold_to_binary(&img, 11, Polarity::InkIsLight).unwrap();
        assert_eq!(b.bits(), &[0, 0, 1, 1]);
    }

    #[test]
    fn test_zero_threshold_dark_has_no_ink() {
        let img = GrayscaleImage::filled(3, 3, 0).unwrap();
        let (b, t) = threshold_otsu(&img, Polarity::InkIsDark).unwrap();
        assert_eq!(t, 0);
        assert_eq!(b.count_ink(), 0);
    }

    #[test]
    fn test_flatten_row_major() {
        let img = GrayscaleImage::from_raw(3, 2, vec![0, 255, 255, 255, 255, 0]).unwrap();
        let b = threshold_to_binary(&img, 128, Polarity::InkIsDark).unwrap();
        let v = b.flatten().unwrap();
        assert_eq!(v.as_slice(), &[1, 0, 0, 0, 0, 1]);
        assert_eq!(v.as_slice()[5], b.get(2, 1).unwrap());
    }

    #[test]
    fn test_preview_levels() {
        let img = GrayscaleImage::from_raw(2, 1, vec![5, 200]).unwrap();
        let dark = threshold_to_binary(&img, 100, Polarity::InkIsDark).unwrap();
        assert_eq!(dark.to_preview().unwrap().data(), &[0, 255]);
        let light = threshold_to_binary(&img, 100, Polarity::InkIsLight).unwrap();
        assert_eq!(light.to_preview().unwrap().data(), &[0, 255]);
    }

    #[test]
    fn test_crop_to_content() {
        let mut b = BinaryImage::new(6, 5, Polarity::InkIsDark).unwrap();
        b.set(2, 1, true).unwrap();
        b.set(3, 3, true).unwrap();
        assert_eq!(b.content_bounds(), Some((2, 1, 2, 3)));

        let c = b.crop_to_content(1).unwrap();
        assert_eq!((c.width(), c.height()), (4, 5));
        assert_eq!(c.get(1, 1), Some(1));
        assert_eq!(c.get(2, 3), Some(1));
        assert_eq!(c.count_ink(), 2);
        assert_eq!(c.row(0), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_crop_without_ink() {
        let b = BinaryImage::new(3, 3, Polarity::InkIsDark).unwrap();
        assert!(matches!(b.crop_to_content(2), Err(BinarizeError::NoContent)));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut b = BinaryImage::new(2, 2, Polarity::InkIsDark).unwrap();
        assert!(b.set(2, 0, true).is_err());
    }
}
