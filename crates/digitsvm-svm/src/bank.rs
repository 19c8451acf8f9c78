//! One-vs-rest model bank
//!
//! Holds one [`SvmModel`] per digit class. Prediction scores every class
//! and returns the arg-max; when several classes share the maximum the
//! lowest digit wins.

use crate::{
    ModelLayout, SvmConfig, SvmError, SvmModel, SvmResult, load_model_files, score,
};
use digitsvm_core::BinarizedVector;
use rayon::prelude::*;
use tracing::{debug, info};

/// Number of digit classes.
pub const NUM_CLASSES: usize = 10;

/// Classification result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Winning class
    pub digit: usize,
    /// Decision value of every class, indexed by digit
    pub scores: [f64; NUM_CLASSES],
}

impl Prediction {
    /// Decision value of the winning class.
    pub fn best_score(&self) -> f64 {
        self.scores[self.digit]
    }

    /// Pick the arg-max of `scores`; ties keep the lowest index.
    pub fn from_scores(scores: [f64; NUM_CLASSES]) -> Self {
        let mut digit = 0;
        for (i, &s) in scores.iter().enumerate().skip(1) {
            if s > scores[digit] {
                digit = i;
            }
        }
        Prediction { digit, scores }
    }
}

/// Ten class models sharing one kernel configuration
#[derive(Debug, Clone)]
pub struct ModelBank {
    models: [SvmModel; NUM_CLASSES],
    config: SvmConfig,
}

impl ModelBank {
    /// Build a bank from in-memory models, indexed by digit.
    ///
    /// # Errors
    ///
    /// - [`SvmError::ClassCount`] unless exactly [`NUM_CLASSES`] models
    /// - [`SvmError::ModelSize`] if the models differ in dimension
    /// - [`SvmError::InvalidParameters`] for an invalid config
    pub fn new(models: Vec<SvmModel>, config: SvmConfig) -> SvmResult<Self> {
        config.validate()?;
        let models: [SvmModel; NUM_CLASSES] =
            models
                .try_into()
                .map_err(|models: Vec<SvmModel>| SvmError::ClassCount {
                    expected: NUM_CLASSES,
                    actual: models.len(),
                })?;

        let dimension = models[0].dimension();
        if let Some((digit, m)) = models
            .iter()
            .enumerate()
            .find(|(_, m)| m.dimension() != dimension)
        {
            return Err(SvmError::ModelSize {
                resource: format!("class {digit}"),
                message: format!(
                    "dimension {} differs from class 0 dimension {}",
                    m.dimension(),
                    dimension
                ),
            });
        }

        info!(classes = NUM_CLASSES, dimension, "model bank ready");
        Ok(ModelBank { models, config })
    }

    /// Load all class models from `layout` in parallel.
    ///
    /// The bank is only returned when every class loads; the first error
    /// in class order is reported otherwise.
    pub fn load(layout: &ModelLayout, config: SvmConfig) -> SvmResult<Self> {
        debug!(dir = %layout.dir().display(), "loading model bank");
        let models = (0..NUM_CLASSES)
            .into_par_iter()
            .map(|digit| {
                let paths = layout.paths(digit);
                load_model_files(&paths.support_vectors, &paths.coefficients, &paths.bias)
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<SvmResult<Vec<_>>>()?;
        Self::new(models, config)
    }

    /// Feature dimension every input must have.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.models[0].dimension()
    }

    /// Kernel configuration.
    #[inline]
    pub fn config(&self) -> &SvmConfig {
        &self.config
    }

    /// Model of class `digit`.
    pub fn model(&self, digit: usize) -> Option<&SvmModel> {
        self.models.get(digit)
    }

    /// Score every class in parallel.
    pub fn scores(&self, features: &[f64]) -> SvmResult<[f64; NUM_CLASSES]> {
        if features.len() != self.dimension() {
            return Err(SvmError::DimensionMismatch {
                expected: self.dimension(),
                actual: features.len(),
            });
        }
        let scores = self
            .models
            .par_iter()
            .map(|m| score(features, m, &self.config))
            .collect::<SvmResult<Vec<f64>>>()?;

        let mut out = [0.0; NUM_CLASSES];
        out.copy_from_slice(&scores);
        Ok(out)
    }

    /// Classify a feature vector.
    pub fn predict_features(&self, features: &[f64]) -> SvmResult<Prediction> {
        let prediction = Prediction::from_scores(self.scores(features)?);
        debug!(
            digit = prediction.digit,
            score = prediction.best_score(),
            scores = ?prediction.scores,
            "prediction"
        );
        Ok(prediction)
    }

    /// Classify a binarized image vector.
    pub fn predict(&self, vector: &BinarizedVector) -> SvmResult<Prediction> {
        self.predict_features(&vector.to_features())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Model whose score is `value` for every input of length `dim`.
    fn constant_model(dim: usize, value: f64) -> SvmModel {
        SvmModel::new(vec![vec![0.0; dim]], vec![0.0], value).unwrap()
    }

    fn bank_of(values: [f64; NUM_CLASSES]) -> ModelBank {
        let models = values.iter().map(|&v| constant_model(4, v)).collect();
        ModelBank::new(models, SvmConfig::default()).unwrap()
    }

    #[test]
    fn test_predict_max_class() {
        let bank = bank_of([0.1, -1.0, 0.5, 3.0, 2.9, 0.0, -0.2, 1.0, 2.0, 0.3]);
        let p = bank.predict_features(&[0.0; 4]).unwrap();
        assert_eq!(p.digit, 3);
        assert_eq!(p.best_score(), 3.0);
    }

    #[test]
    fn test_tie_prefers_lower_digit() {
        let bank = bank_of([0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(bank.predict_features(&[1.0; 4]).unwrap().digit, 2);
        let flat = bank_of([0.5; NUM_CLASSES]);
        assert_eq!(flat.predict_features(&[1.0; 4]).unwrap().digit, 0);
    }

    #[test]
    fn test_from_scores_all_negative() {
        let mut scores = [-5.0; NUM_CLASSES];
        scores[9] = -4.0;
        assert_eq!(Prediction::from_scores(scores).digit, 9);
    }

    #[test]
    fn test_wrong_class_count() {
        let models = (0..9).map(|_| constant_model(4, 0.0)).collect();
        assert!(matches!(
            ModelBank::new(models, SvmConfig::default()),
            Err(SvmError::ClassCount {
                expected: 10,
                actual: 9
            })
        ));
    }

    #[test]
    fn test_mixed_dimensions() {
        let mut models: Vec<_> = (0..NUM_CLASSES).map(|_| constant_model(4, 0.0)).collect();
        models[6] = constant_model(5, 0.0);
        assert!(matches!(
            ModelBank::new(models, SvmConfig::default()),
            Err(SvmError::ModelSize { .. })
        ));
    }

    #[test]
    fn test_input_dimension_checked() {
        let bank = bank_of([0.0; NUM_CLASSES]);
        assert!(matches!(
            bank.predict_features(&[0.0; 3]),
            Err(SvmError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_predict_binarized_vector() {
        let v = BinarizedVector::new(2, 2, vec![1, 0, 0, 1]).unwrap();
        let mut models: Vec<_> = (0..NUM_CLASSES).map(|_| constant_model(4, 0.0)).collect();
        // class 4 has a support vector equal to the input
        models[4] = SvmModel::new(vec![vec![1.0, 0.0, 0.0, 1.0]], vec![1.0], 0.0).unwrap();
        let bank = ModelBank::new(models, SvmConfig::default()).unwrap();
        let p = bank.predict(&v).unwrap();
        assert_eq!(p.digit, 4);
        assert_eq!(p.scores[4], 1.0);
    }
}
