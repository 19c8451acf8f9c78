//! End-to-end digit recognizer

use crate::pipeline::{PreprocessOptions, Preprocessed, preprocess};
use crate::{Error, Result};
use digitsvm_core::GrayscaleImage;
use digitsvm_io::{GrayConversion, read_image_with};
use digitsvm_svm::{ModelBank, ModelLayout, Prediction, SvmConfig, SvmError};
use std::path::Path;
use tracing::debug;

/// Result of recognizing one image
#[derive(Debug, Clone)]
pub struct Recognition {
    /// Classifier output
    pub prediction: Prediction,
    /// Pipeline output the prediction was made from
    pub preprocessed: Preprocessed,
}

impl Recognition {
    /// Predicted digit.
    #[inline]
    pub fn digit(&self) -> usize {
        self.prediction.digit
    }
}

/// A model bank plus the preprocessing that feeds it
#[derive(Debug, Clone)]
pub struct DigitRecognizer {
    bank: ModelBank,
    options: PreprocessOptions,
    conversion: GrayConversion,
}

impl DigitRecognizer {
    /// Wrap a loaded model bank with default preprocessing.
    pub fn new(bank: ModelBank) -> Self {
        Self {
            bank,
            options: PreprocessOptions::default(),
            conversion: GrayConversion::default(),
        }
    }

    /// Load the model bank from `layout`.
    pub fn load(layout: &ModelLayout, config: SvmConfig) -> Result<Self> {
        Ok(Self::new(ModelBank::load(layout, config)?))
    }

    /// Set the preprocessing options.
    pub fn with_options(mut self, options: PreprocessOptions) -> Self {
        self.options = options;
        self
    }

    /// Set how colour files are reduced to gray.
    pub fn with_gray_conversion(mut self, conversion: GrayConversion) -> Self {
        self.conversion = conversion;
        self
    }

    /// Preprocessing options in use.
    pub fn options(&self) -> &PreprocessOptions {
        &self.options
    }

    /// Underlying model bank.
    pub fn bank(&self) -> &ModelBank {
        &self.bank
    }

    /// Preprocess and classify a grayscale image.
    ///
    /// # Errors
    ///
    /// Fails with a dimension mismatch before any scoring when the target
    /// raster does not match the model dimension.
    pub fn recognize(&self, img: &GrayscaleImage) -> Result<Recognition> {
        let expected = self.bank.dimension();
        let actual = (self.options.width as usize) * (self.options.height as usize);
        if actual != expected {
            return Err(Error::Svm(SvmError::DimensionMismatch { expected, actual }));
        }

        let preprocessed = preprocess(img, &self.options)?;
        let prediction = self.bank.predict(&preprocessed.vector)?;
        Ok(Recognition {
            prediction,
            preprocessed,
        })
    }

    /// Decode an image file and classify it.
    pub fn recognize_file<P: AsRef<Path>>(&self, path: P) -> Result<Recognition> {
        let path = path.as_ref();
        let img = read_image_with(path, self.conversion)?;
        let recognition = self.recognize(&img)?;
        debug!(path = %path.display(), digit = recognition.digit(), "recognized file");
        Ok(recognition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitsvm_svm::{NUM_CLASSES, SvmModel};

    fn flat_bank(dim: usize) -> ModelBank {
        let models = (0..NUM_CLASSES)
            .map(|d| SvmModel::new(vec![vec![0.0; dim]], vec![0.0], d as f64).unwrap())
            .collect();
        ModelBank::new(models, SvmConfig::default()).unwrap()
    }

    #[test]
    fn test_recognize_uses_bank() {
        let r = DigitRecognizer::new(flat_bank(784));
        let img = GrayscaleImage::from_fn(40, 40, |x, _| if x < 20 { 0 } else { 255 }).unwrap();
        let rec = r.recognize(&img).unwrap();
        // bias grows with the digit, so the last class wins
        assert_eq!(rec.digit(), 9);
        assert_eq!(rec.preprocessed.vector.len(), 784);
    }

    #[test]
    fn test_target_size_must_match_models() {
        let r = DigitRecognizer::new(flat_bank(784))
            .with_options(PreprocessOptions::default().with_target_size(16, 16));
        let img = GrayscaleImage::filled(40, 40, 128).unwrap();
        assert!(matches!(
            r.recognize(&img),
            Err(Error::Svm(SvmError::DimensionMismatch {
                expected: 784,
                actual: 256
            }))
        ));
    }

    #[test]
    fn test_missing_file() {
        let r = DigitRecognizer::new(flat_bank(784));
        assert!(matches!(
            r.recognize_file("/no/such/digit.png"),
            Err(Error::Io(digitsvm_io::IoError::ImageLoad { .. }))
        ));
    }
}
