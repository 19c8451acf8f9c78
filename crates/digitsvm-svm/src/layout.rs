//! Model file layout
//!
//! Maps a class digit to the three files holding its model. File names
//! are patterns in which `{digit}` is replaced by the class index.

use crate::{SvmError, SvmResult};
use std::path::{Path, PathBuf};

/// Placeholder substituted with the class digit.
pub const DIGIT_PLACEHOLDER: &str = "{digit}";

/// Default support vector file pattern.
pub const DEFAULT_SUPPORT_VECTOR_PATTERN: &str = "vecteur_support_{digit}.txt";

/// Default coefficient file pattern.
pub const DEFAULT_COEFFICIENT_PATTERN: &str = "coefficients_{digit}.txt";

/// Default bias file pattern.
pub const DEFAULT_BIAS_PATTERN: &str = "biais_{digit}.txt";

/// Paths of one class's model files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    /// Support vector matrix
    pub support_vectors: PathBuf,
    /// Coefficient line
    pub coefficients: PathBuf,
    /// Bias value
    pub bias: PathBuf,
}

/// Directory and file-name patterns for a model bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelLayout {
    dir: PathBuf,
    support_vectors: String,
    coefficients: String,
    bias: String,
}

impl ModelLayout {
    /// Layout with the default file names under `dir`.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            support_vectors: DEFAULT_SUPPORT_VECTOR_PATTERN.to_string(),
            coefficients: DEFAULT_COEFFICIENT_PATTERN.to_string(),
            bias: DEFAULT_BIAS_PATTERN.to_string(),
        }
    }

    /// Replace the three file-name patterns.
    ///
    /// # Errors
    ///
    /// [`SvmError::InvalidParameters`] if a pattern lacks `{digit}`, since
    /// every class would then resolve to the same file.
    pub fn with_patterns(
        mut self,
        support_vectors: &str,
        coefficients: &str,
        bias: &str,
    ) -> SvmResult<Self> {
        for pattern in [support_vectors, coefficients, bias] {
            if !pattern.contains(DIGIT_PLACEHOLDER) {
                return Err(SvmError::InvalidParameters(format!(
                    "model file pattern {pattern:?} has no {DIGIT_PLACEHOLDER} placeholder"
                )));
            }
        }
        self.support_vectors = support_vectors.to_string();
        self.coefficients = coefficients.to_string();
        self.bias = bias.to_string();
        Ok(self)
    }

    /// Model directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files of class `digit`.
    pub fn paths(&self, digit: usize) -> ModelPaths {
        let resolve = |pattern: &str| {
            self.dir
                .join(pattern.replace(DIGIT_PLACEHOLDER, &digit.to_string()))
        };
        ModelPaths {
            support_vectors: resolve(&self.support_vectors),
            coefficients: resolve(&self.coefficients),
            bias: resolve(&self.bias),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let p = ModelLayout::new("/models").paths(7);
        assert_eq!(p.support_vectors, PathBuf::from("/models/vecteur_support_7.txt"));
        assert_eq!(p.coefficients, PathBuf::from("/models/coefficients_7.txt"));
        assert_eq!(p.bias, PathBuf::from("/models/biais_7.txt"));
    }

    #[test]
    fn test_custom_patterns() {
        let layout = ModelLayout::new("m")
            .with_patterns("sv{digit}.csv", "alpha{digit}.csv", "class{digit}/b.txt")
            .unwrap();
        let p = layout.paths(0);
        assert_eq!(p.support_vectors, PathBuf::from("m/sv0.csv"));
        assert_eq!(p.bias, PathBuf::from("m/class0/b.txt"));
    }

    #[test]
    fn test_pattern_without_placeholder() {
        assert!(
            ModelLayout::new("m")
                .with_patterns("sv.txt", "c{digit}", "b{digit}")
                .is_err()
        );
    }
}
