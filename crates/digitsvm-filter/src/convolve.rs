//! Convolution operations
//!
//! Normalized integer convolution of grayscale images. The weighted sum is
//! divided by the kernel sum and truncated toward zero, then clamped to
//! `[0, 255]`.

use crate::{FilterError, FilterResult, Kernel};
use digitsvm_core::{GrayscaleImage, GrayscaleImageMut};

/// What happens to pixels whose kernel footprint leaves the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderHandling {
    /// Copy border pixels through unfiltered; only interior pixels whose
    /// whole footprint lies inside the image are convolved
    #[default]
    Preserve,
    /// Treat out-of-bounds pixels as the nearest edge pixel
    Replicate,
}

/// Convolve an 8-bit grayscale image with a kernel
pub fn convolve_gray(
    img: &GrayscaleImage,
    kernel: &Kernel,
    border: BorderHandling,
) -> FilterResult<GrayscaleImage> {
    let norm = kernel.sum();
    if norm == 0 {
        return Err(FilterError::InvalidKernel(
            "kernel weights sum to zero".to_string(),
        ));
    }

    let w = img.width() as i64;
    let h = img.height() as i64;
    let kw = kernel.width() as i64;
    let kh = kernel.height() as i64;
    let kcx = kernel.center_x() as i64;
    let kcy = kernel.center_y() as i64;
    let weights = kernel.data();

    // Footprint of (x, y) is [x - kcx, x - kcx + kw) x [y - kcy, y - kcy + kh)
    let interior = |x: i64, y: i64| x >= kcx && y >= kcy && x - kcx + kw <= w && y - kcy + kh <= h;

    let mut out = GrayscaleImageMut::new(img.width(), img.height())?;
    for y in 0..h {
        for x in 0..w {
            let inside = interior(x, y);
            if !inside && border == BorderHandling::Preserve {
                out.set_pixel_unchecked(
                    x as u32,
                    y as u32,
                    img.get_pixel_unchecked(x as u32, y as u32),
                );
                continue;
            }

            let mut acc = 0i64;
            for ky in 0..kh {
                let sy = (y + ky - kcy).clamp(0, h - 1);
                let row = img.row(sy as u32);
                for kx in 0..kw {
                    let sx = (x + kx - kcx).clamp(0, w - 1);
                    acc += row[sx as usize] as i64 * weights[(ky * kw + kx) as usize] as i64;
                }
            }

            let val = (acc / norm).clamp(0, 255) as u8;
            out.set_pixel_unchecked(x as u32, y as u32, val);
        }
    }

    Ok(out.into())
}

/// Smooth an image with the 5x5 discrete Gaussian
pub fn gaussian_blur(img: &GrayscaleImage, border: BorderHandling) -> FilterResult<GrayscaleImage> {
    convolve_gray(img, &Kernel::gaussian_5x5(), border)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_image_unchanged() {
        let img = GrayscaleImage::filled(9, 7, 200).unwrap();
        for border in [BorderHandling::Preserve, BorderHandling::Replicate] {
            let out = gaussian_blur(&img, border).unwrap();
            assert!(out.data().iter().all(|&p| p == 200));
        }
    }

    #[test]
    fn test_impulse_response_truncates() {
        let mut m = GrayscaleImageMut::new(5, 5).unwrap();
        m.set_pixel(2, 2, 255).unwrap();
        let img: GrayscaleImage = m.into();
        let out = gaussian_blur(&img, BorderHandling::Preserve).unwrap();
        // only (2, 2) is interior in a 5x5 image: 255 * 41 / 273 = 38.29
        assert_eq!(out.get_pixel(2, 2), Some(38));
        assert_eq!(out.get_pixel(1, 2), Some(0));
    }

    #[test]
    fn test_preserve_copies_border() {
        let img = GrayscaleImage::from_fn(8, 8, |x, y| ((x * 31 + y * 17) % 256) as u8).unwrap();
        let out = gaussian_blur(&img, BorderHandling::Preserve).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                if !(2..6).contains(&x) || !(2..6).contains(&y) {
                    assert_eq!(out.get_pixel(x, y), img.get_pixel(x, y), "({x},{y})");
                }
            }
        }
    }

    #[test]
    fn test_small_image_passes_through() {
        let img = GrayscaleImage::from_fn(4, 3, |x, y| (x * 10 + y) as u8).unwrap();
        let out = gaussian_blur(&img, BorderHandling::Preserve).unwrap();
        assert_eq!(out.data(), img.data());
    }

    #[test]
    fn test_replicate_filters_border() {
        // dark left column next to bright field: replicate must pull the
        // corner toward the bright side
        let img = GrayscaleImage::from_fn(6, 6, |x, _| if x == 0 { 0 } else { 250 }).unwrap();
        let out = gaussian_blur(&img, BorderHandling::Replicate).unwrap();
        let corner = out.get_pixel(0, 0).unwrap();
        assert!(corner > 0 && corner < 250, "corner = {corner}");
    }

    #[test]
    fn test_zero_sum_kernel_rejected() {
        let k = Kernel::from_slice(3, 1, &[-1, 0, 1]).unwrap();
        let img = GrayscaleImage::filled(4, 4, 1).unwrap();
        assert!(matches!(
            convolve_gray(&img, &k, BorderHandling::Preserve),
            Err(FilterError::InvalidKernel(_))
        ));
    }

    #[test]
    fn test_negative_result_clamped() {
        // sharpen-like kernel with sum 1
        let k = Kernel::from_slice(3, 1, &[-1, 3, -1]).unwrap();
        let img = GrayscaleImage::from_raw(3, 1, vec![255, 0, 255]).unwrap();
        let out = convolve_gray(&img, &k, BorderHandling::Preserve).unwrap();
        assert_eq!(out.data(), &[255, 0, 255]);
        let img = GrayscaleImage::from_raw(3, 1, vec![0, 255, 0]).unwrap();
        let out = convolve_gray(&img, &k, BorderHandling::Preserve).unwrap();
        assert_eq!(out.data(), &[0, 255, 0]);
    }
}
