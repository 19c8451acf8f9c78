//! Image scaling operations
//!
//! Provides two resampling algorithms:
//! - Area mapping: each output pixel is the coverage-weighted mean of the
//!   source pixels under its footprint (anti-aliased, the default for
//!   shrinking a photograph to the 28x28 classifier raster)
//! - Sampling: nearest-neighbor lookup of the footprint centre

use crate::{TransformError, TransformResult};
use digitsvm_core::{GrayscaleImage, GrayscaleImageMut};

/// Scaling method to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (fastest, aliases when shrinking)
    Sampling,
    /// Area mapping (anti-aliased)
    #[default]
    AreaMap,
}

/// Scale an image to exactly `width x height`
///
/// Returns a clone sharing the pixel data when the size already matches.
pub fn scale_to_size(
    img: &GrayscaleImage,
    width: u32,
    height: u32,
    method: ScaleMethod,
) -> TransformResult<GrayscaleImage> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidScaleTarget { width, height });
    }
    if img.width() == width && img.height() == height {
        return Ok(img.clone());
    }
    match method {
        ScaleMethod::Sampling => scale_by_sampling(img, width, height),
        ScaleMethod::AreaMap => scale_area_map(img, width, height),
    }
}

/// Scale an image using nearest-neighbor sampling
pub fn scale_by_sampling(
    img: &GrayscaleImage,
    width: u32,
    height: u32,
) -> TransformResult<GrayscaleImage> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidScaleTarget { width, height });
    }
    let sx = img.width() as f64 / width as f64;
    let sy = img.height() as f64 / height as f64;
    let src_x: Vec<u32> = (0..width)
        .map(|x| (((x as f64 + 0.5) * sx) as u32).min(img.width() - 1))
        .collect();

    let mut out = GrayscaleImageMut::new(width, height)?;
    for y in 0..height {
        let syi = (((y as f64 + 0.5) * sy) as u32).min(img.height() - 1);
        for (x, &sxi) in src_x.iter().enumerate() {
            out.set_pixel_unchecked(x as u32, y, img.get_pixel_unchecked(sxi, syi));
        }
    }
    Ok(out.into())
}

/// Scale an image by area mapping
///
/// The footprint of output pixel `(x, y)` is the source rectangle
/// `[x*sx, (x+1)*sx) x [y*sy, (y+1)*sy)`. Partially covered source pixels
/// contribute in proportion to the covered area. Works for both shrinking
/// and enlarging; the result is rounded to the nearest integer.
pub fn scale_area_map(
    img: &GrayscaleImage,
    width: u32,
    height: u32,
) -> TransformResult<GrayscaleImage> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidScaleTarget { width, height });
    }
    let xspans = axis_spans(img.width(), width);
    let yspans = axis_spans(img.height(), height);

    let mut out = GrayscaleImageMut::new(width, height)?;
    for (y, yspan) in yspans.iter().enumerate() {
        for (x, xspan) in xspans.iter().enumerate() {
            let mut acc = 0.0f64;
            let mut area = 0.0f64;
            for &(sy, wy) in yspan {
                let row = img.row(sy);
                for &(sx, wx) in xspan {
                    let w = wx * wy;
                    acc += row[sx as usize] as f64 * w;
                    area += w;
                }
            }
            let val = if area > 0.0 { acc / area } else { 0.0 };
            out.set_pixel_unchecked(x as u32, y as u32, val.round().clamp(0.0, 255.0) as u8);
        }
    }
    Ok(out.into())
}

/// For each destination index along one axis, the source indices covered
/// by its footprint with their coverage lengths.
fn axis_spans(src: u32, dst: u32) -> Vec<Vec<(u32, f64)>> {
    let scale = src as f64 / dst as f64;
    (0..dst)
        .map(|o| {
            let start = o as f64 * scale;
            let end = ((o + 1) as f64 * scale).min(src as f64);
            let mut span = Vec::new();
            let mut i = start.floor() as u32;
            while i < src && (i as f64) < end {
                let lo = start.max(i as f64);
                let hi = end.min((i + 1) as f64);
                if hi > lo {
                    span.push((i, hi - lo));
                }
                i += 1;
            }
            if span.is_empty() {
                // footprint collapsed by rounding; fall back to the nearest pixel
                span.push(((start as u32).min(src - 1), 1.0));
            }
            span
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_map_halving_averages_blocks() {
        // 4x2 -> 2x1: each output is the mean of a 2x2 block
        let img = GrayscaleImage::from_raw(4, 2, vec![0, 100, 200, 200, 100, 200, 200, 200]).unwrap();
        let out = scale_area_map(&img, 2, 1).unwrap();
        assert_eq!(out.data(), &[100, 200]);
    }

    #[test]
    fn test_area_map_fractional_footprint() {
        // 3 -> 2: footprints [0,1.5) and [1.5,3)
        let img = GrayscaleImage::from_raw(3, 1, vec![0, 90, 180]).unwrap();
        let out = scale_area_map(&img, 2, 1).unwrap();
        // (0*1 + 90*0.5) / 1.5 = 30 ; (90*0.5 + 180*1) / 1.5 = 150
        assert_eq!(out.data(), &[30, 150]);
    }

    #[test]
    fn test_area_map_constant_image() {
        let img = GrayscaleImage::filled(97, 61, 77).unwrap();
        let out = scale_area_map(&img, 28, 28).unwrap();
        assert!(out.data().iter().all(|&p| p == 77));
    }

    #[test]
    fn test_upscale() {
        let img = GrayscaleImage::from_raw(2, 1, vec![10, 20]).unwrap();
        let out = scale_area_map(&img, 4, 2).unwrap();
        assert_eq!(out.row(0), &[10, 10, 20, 20]);
        assert_eq!(out.row(1), &[10, 10, 20, 20]);
    }

    #[test]
    fn test_sampling() {
        let img = GrayscaleImage::from_raw(4, 1, vec![1, 2, 3, 4]).unwrap();
        let out = scale_by_sampling(&img, 2, 1).unwrap();
        assert_eq!(out.data(), &[2, 4]);
    }

    #[test]
    fn test_same_size_shares_data() {
        let img = GrayscaleImage::filled(28, 28, 3).unwrap();
        let out = scale_to_size(&img, 28, 28, ScaleMethod::AreaMap).unwrap();
        assert_eq!(out.ref_count(), 2);
    }

    #[test]
    fn test_zero_target_rejected() {
        let img = GrayscaleImage::filled(4, 4, 0).unwrap();
        assert!(matches!(
            scale_to_size(&img, 0, 28, ScaleMethod::AreaMap),
            Err(TransformError::InvalidScaleTarget { .. })
        ));
    }
}
