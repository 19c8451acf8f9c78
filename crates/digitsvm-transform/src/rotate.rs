//! Orthogonal rotations and flips
//!
//! Photographs from a camera pipeline may arrive sideways or upside down.
//! These quarter-turn operations are exact pixel permutations.

use crate::TransformResult;
use digitsvm_core::{GrayscaleImage, GrayscaleImageMut};

/// Orientation correction to apply before resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Leave the image as is
    #[default]
    None,
    /// Rotate 90 degrees clockwise
    Cw90,
    /// Rotate 180 degrees
    Rot180,
    /// Rotate 90 degrees counter-clockwise
    Ccw90,
}

impl Rotation {
    /// Number of clockwise quarter turns.
    pub fn quads(self) -> u32 {
        match self {
            Rotation::None => 0,
            Rotation::Cw90 => 1,
            Rotation::Rot180 => 2,
            Rotation::Ccw90 => 3,
        }
    }

    /// Apply this rotation to an image.
    ///
    /// `Rotation::None` returns a cheap clone sharing the pixel data.
    pub fn apply(self, img: &GrayscaleImage) -> TransformResult<GrayscaleImage> {
        rotate_orth(img, self.quads())
    }
}

/// Rotate by `quads` clockwise quarter turns.
pub fn rotate_orth(img: &GrayscaleImage, quads: u32) -> TransformResult<GrayscaleImage> {
    match quads % 4 {
        0 => Ok(img.clone()),
        1 => rotate_90(img, true),
        2 => rotate_180(img),
        _ => rotate_90(img, false),
    }
}

/// Rotate an image 90 degrees
///
/// # Arguments
/// * `img` - Input image
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(img: &GrayscaleImage, clockwise: bool) -> TransformResult<GrayscaleImage> {
    let w = img.width();
    let h = img.height();

    // Output dimensions are swapped
    let mut out = GrayscaleImageMut::new(h, w)?;

    for y in 0..h {
        for x in 0..w {
            let val = img.get_pixel_unchecked(x, y);
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            out.set_pixel_unchecked(nx, ny, val);
        }
    }

    Ok(out.into())
}

/// Rotate an image 180 degrees
pub fn rotate_180(img: &GrayscaleImage) -> TransformResult<GrayscaleImage> {
    // 180 rotation = horizontal flip + vertical flip
    let flipped_h = flip_lr(img)?;
    flip_tb(&flipped_h)
}

/// Flip an image left-right (horizontal mirror)
pub fn flip_lr(img: &GrayscaleImage) -> TransformResult<GrayscaleImage> {
    let w = img.width();
    let mut out = img.to_mut();
    for (dst, src) in out
        .data_mut()
        .chunks_exact_mut(w as usize)
        .zip(img.data().chunks_exact(w as usize))
    {
        for (d, s) in dst.iter_mut().zip(src.iter().rev()) {
            *d = *s;
        }
    }
    Ok(out.into())
}

/// Flip an image top-bottom (vertical mirror)
pub fn flip_tb(img: &GrayscaleImage) -> TransformResult<GrayscaleImage> {
    let w = img.width() as usize;
    let mut out = img.to_mut();
    for (dst, src) in out
        .data_mut()
        .chunks_exact_mut(w)
        .zip(img.data().chunks_exact(w).rev())
    {
        dst.copy_from_slice(src);
    }
    Ok(out.into())
}
