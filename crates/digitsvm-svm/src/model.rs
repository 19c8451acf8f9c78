//! SVM model and kernel configuration

use crate::{SvmError, SvmResult};

/// RBF kernel width shared by the exported digit models.
pub const DEFAULT_GAMMA: f64 = 0.001;

/// Kernel configuration passed to every scoring call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvmConfig {
    /// RBF kernel width in `exp(-gamma * ||a - b||^2)`
    pub gamma: f64,
}

impl Default for SvmConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl SvmConfig {
    /// Create a configuration with the given gamma.
    pub fn new(gamma: f64) -> SvmResult<Self> {
        let config = Self { gamma };
        config.validate()?;
        Ok(config)
    }

    /// Set gamma.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Check that gamma is finite and positive.
    pub fn validate(&self) -> SvmResult<()> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(SvmError::InvalidParameters(format!(
                "gamma must be finite and positive, got {}",
                self.gamma
            )));
        }
        Ok(())
    }
}

/// One binary RBF decision function
///
/// Support vectors are stored contiguously; row `i` pairs with
/// coefficient `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct SvmModel {
    support_vectors: Vec<f64>,
    dimension: usize,
    coefficients: Vec<f64>,
    bias: f64,
}

impl SvmModel {
    /// Build a model from support vector rows, dual coefficients and bias.
    ///
    /// # Errors
    ///
    /// [`SvmError::ModelSize`] if there are no rows, rows differ in length,
    /// or the coefficient count differs from the row count.
    pub fn new(rows: Vec<Vec<f64>>, coefficients: Vec<f64>, bias: f64) -> SvmResult<Self> {
        Self::from_rows("<memory>", rows, coefficients, bias)
    }

    /// Like [`SvmModel::new`], naming `resource` in errors.
    pub(crate) fn from_rows(
        resource: &str,
        rows: Vec<Vec<f64>>,
        coefficients: Vec<f64>,
        bias: f64,
    ) -> SvmResult<Self> {
        let size_error = |message: String| SvmError::ModelSize {
            resource: resource.to_string(),
            message,
        };

        let dimension = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(size_error("model has no support vectors".to_string())),
        };
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dimension) {
            return Err(size_error(format!(
                "support vector {} has {} values, expected {}",
                i,
                row.len(),
                dimension
            )));
        }
        if coefficients.len() != rows.len() {
            return Err(size_error(format!(
                "{} coefficients for {} support vectors",
                coefficients.len(),
                rows.len()
            )));
        }

        Ok(SvmModel {
            support_vectors: rows.concat(),
            dimension,
            coefficients,
            bias,
        })
    }

    /// Number of support vectors.
    #[inline]
    pub fn num_support_vectors(&self) -> usize {
        self.coefficients.len()
    }

    /// Length of every support vector (and of valid inputs).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Dual coefficients, one per support vector.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Decision function bias.
    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Support vector `i`.
    pub fn support_vector(&self, i: usize) -> Option<&[f64]> {
        let start = i.checked_mul(self.dimension)?;
        self.support_vectors.get(start..start + self.dimension)
    }

    /// Iterate over `(support_vector, coefficient)` pairs.
    pub fn terms(&self) -> impl Iterator<Item = (&[f64], f64)> {
        self.support_vectors
            .chunks_exact(self.dimension)
            .zip(self.coefficients.iter().copied())
    }
}
