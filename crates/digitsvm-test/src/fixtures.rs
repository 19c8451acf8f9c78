//! Synthetic fixtures: images and model bundles

use crate::error::{TestError, TestResult};
use digitsvm_core::GrayscaleImage;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a fresh scratch directory, removed when the handle is dropped.
pub fn scratch_dir() -> TestResult<TempDir> {
    Ok(tempfile::tempdir()?)
}

/// Image whose left half is `left` and right half is `right`.
///
/// For even widths exactly half of the pixels take each value.
pub fn two_tone_image(width: u32, height: u32, left: u8, right: u8) -> TestResult<GrayscaleImage> {
    Ok(GrayscaleImage::from_fn(width, height, |x, _| {
        if x < width / 2 { left } else { right }
    })?)
}

/// Horizontal ramp from 0 at the left edge to 255 at the right edge.
pub fn gradient_image(width: u32, height: u32) -> TestResult<GrayscaleImage> {
    let span = (width.max(2) - 1) as f32;
    Ok(GrayscaleImage::from_fn(width, height, |x, _| {
        (x as f32 * 255.0 / span).round() as u8
    })?)
}

/// A ring (a hand-drawn "0") of `ink` on a `paper` background.
///
/// The ring is centred in a `size x size` canvas; its outer radius is
/// 40% of the canvas and it is `thickness` pixels wide.
pub fn ring_glyph(size: u32, thickness: u32, ink: u8, paper: u8) -> TestResult<GrayscaleImage> {
    let c = (size as f32 - 1.0) / 2.0;
    let outer = size as f32 * 0.4;
    let inner = (outer - thickness as f32).max(0.0);
    Ok(GrayscaleImage::from_fn(size, size, |x, y| {
        let dx = x as f32 - c;
        let dy = y as f32 - c;
        let r = (dx * dx + dy * dy).sqrt();
        if r <= outer && r >= inner { ink } else { paper }
    })?)
}

/// Raw contents of one class's three model resources.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    /// One row per support vector
    pub support_vectors: Vec<Vec<f64>>,
    /// Dual coefficients, one per support vector
    pub coefficients: Vec<f64>,
    /// Decision function bias
    pub bias: f64,
    /// Separator used when writing the coefficient line
    pub coefficient_separator: &'static str,
}

impl ModelBundle {
    /// Bundle with space-separated coefficients.
    pub fn new(support_vectors: Vec<Vec<f64>>, coefficients: Vec<f64>, bias: f64) -> Self {
        Self {
            support_vectors,
            coefficients,
            bias,
            coefficient_separator: " ",
        }
    }

    /// Use a different separator (e.g. `","` or `";"`) for the coefficient line.
    pub fn with_separator(mut self, separator: &'static str) -> Self {
        self.coefficient_separator = separator;
        self
    }

    /// Support-vector resource text: one space-separated row per line.
    pub fn support_vector_text(&self) -> String {
        let mut text = String::new();
        for row in &self.support_vectors {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            text.push_str(&line.join(" "));
            text.push('\n');
        }
        text
    }

    /// Coefficient resource text: a single line.
    pub fn coefficient_text(&self) -> String {
        let line: Vec<String> = self.coefficients.iter().map(|v| v.to_string()).collect();
        format!("{}\n", line.join(self.coefficient_separator))
    }

    /// Bias resource text: a single value.
    pub fn bias_text(&self) -> String {
        format!("{}\n", self.bias)
    }
}

/// Write `bundle` for class `digit` into `dir` using the default file names
/// (`vecteur_support_{digit}.txt`, `coefficients_{digit}.txt`, `biais_{digit}.txt`).
pub fn write_model_bundle(dir: &Path, digit: usize, bundle: &ModelBundle) -> TestResult<()> {
    fs::create_dir_all(dir).map_err(|e| TestError::DirectoryCreate {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;
    fs::write(
        dir.join(format!("vecteur_support_{digit}.txt")),
        bundle.support_vector_text(),
    )?;
    fs::write(
        dir.join(format!("coefficients_{digit}.txt")),
        bundle.coefficient_text(),
    )?;
    fs::write(dir.join(format!("biais_{digit}.txt")), bundle.bias_text())?;
    Ok(())
}
