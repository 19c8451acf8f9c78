//! Preprocessing pipeline
//!
//! Turns a grayscale photograph of a digit into the 0/1 feature vector the
//! classifier expects:
//!
//! 1. orientation correction
//! 2. resampling to the target raster (28x28 by default)
//! 3. optional 5x5 Gaussian smoothing
//! 4. Otsu threshold of the resampled image
//! 5. binarization and row-major flattening
//!
//! With [`PreprocessOptions::with_centering`] the digit is first cut out of
//! the full-resolution image and padded, so its position in the photograph
//! does not matter.

use crate::Result;
use digitsvm_binarize::{BinaryImage, Polarity, threshold_otsu};
use digitsvm_core::{BinarizedVector, GrayscaleImage, TARGET_HEIGHT, TARGET_WIDTH};
use digitsvm_filter::{BorderHandling, gaussian_blur};
use digitsvm_transform::{Rotation, ScaleMethod, scale_to_size};
use tracing::debug;

/// Options for [`preprocess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreprocessOptions {
    /// Target raster width
    pub width: u32,
    /// Target raster height
    pub height: u32,
    /// Orientation correction applied first
    pub rotation: Rotation,
    /// Resampling method
    pub scale_method: ScaleMethod,
    /// Smooth the resampled image before thresholding
    pub blur: bool,
    /// Border treatment of the smoothing filter
    pub border: BorderHandling,
    /// Which side of the threshold is ink
    pub polarity: Polarity,
    /// Crop to the digit and pad by this many pixels before resampling
    pub center_padding: Option<u32>,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            width: TARGET_WIDTH,
            height: TARGET_HEIGHT,
            rotation: Rotation::None,
            scale_method: ScaleMethod::AreaMap,
            blur: false,
            border: BorderHandling::Preserve,
            polarity: Polarity::InkIsDark,
            center_padding: None,
        }
    }
}

impl PreprocessOptions {
    /// Set the target raster size.
    pub fn with_target_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the orientation correction.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the resampling method.
    pub fn with_scale_method(mut self, method: ScaleMethod) -> Self {
        self.scale_method = method;
        self
    }

    /// Enable or disable smoothing.
    pub fn with_blur(mut self, blur: bool) -> Self {
        self.blur = blur;
        self
    }

    /// Set the smoothing border treatment.
    pub fn with_border(mut self, border: BorderHandling) -> Self {
        self.border = border;
        self
    }

    /// Set the ink polarity.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Center the digit with `padding` background pixels on each side.
    pub fn with_centering(mut self, padding: u32) -> Self {
        self.center_padding = Some(padding);
        self
    }
}

/// Output of the preprocessing pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessed {
    /// Flattened feature vector
    pub vector: BinarizedVector,
    /// Binary raster the vector was flattened from
    pub binary: BinaryImage,
    /// Otsu threshold used on the resampled image, one above the last bin
    /// of the lower class
    pub threshold: u8,
}

impl Preprocessed {
    /// Grayscale rendering of [`Preprocessed::binary`] for display.
    pub fn preview(&self) -> Result<GrayscaleImage> {
        Ok(self.binary.to_preview()?)
    }
}

/// Run the preprocessing pipeline on a grayscale image.
///
/// Delegates to [`preprocess_centered`] when centering is enabled.
pub fn preprocess(img: &GrayscaleImage, options: &PreprocessOptions) -> Result<Preprocessed> {
    if let Some(padding) = options.center_padding {
        return preprocess_centered(img, options, padding);
    }
    let oriented = options.rotation.apply(img)?;
    finish(&oriented, options)
}

/// Run the pipeline with the digit cut out of the full image first.
///
/// The oriented image is thresholded with Otsu at full resolution, cropped
/// to the ink bounding box, padded by `padding` pixels per side and
/// rendered back to grayscale before resampling and re-thresholding.
///
/// # Errors
///
/// [`digitsvm_binarize::BinarizeError::NoContent`] if the full image has
/// no ink.
pub fn preprocess_centered(
    img: &GrayscaleImage,
    options: &PreprocessOptions,
    padding: u32,
) -> Result<Preprocessed> {
    let oriented = options.rotation.apply(img)?;
    let (full, t) = threshold_otsu(&oriented, options.polarity)?;
    let cropped = full.crop_to_content(padding)?;
    debug!(
        threshold = t,
        width = cropped.width(),
        height = cropped.height(),
        "cropped to content"
    );
    finish(&cropped.to_preview()?, options)
}

/// Steps 2-5 on an oriented image.
fn finish(img: &GrayscaleImage, options: &PreprocessOptions) -> Result<Preprocessed> {
    let resized = scale_to_size(img, options.width, options.height, options.scale_method)?;
    let smoothed = if options.blur {
        gaussian_blur(&resized, options.border)?
    } else {
        resized
    };
    let (binary, threshold) = threshold_otsu(&smoothed, options.polarity)?;
    let vector = binary.flatten()?;
    debug!(
        src_width = img.width(),
        src_height = img.height(),
        threshold,
        ink = vector.count_ones(),
        "preprocessed"
    );
    Ok(Preprocessed {
        vector,
        binary,
        threshold,
    })
}
