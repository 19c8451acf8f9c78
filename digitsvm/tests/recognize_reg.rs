//! End-to-end recognition regression test
//!
//! Builds template models from preprocessed synthetic glyphs, writes them
//! as model files, and recognizes the glyphs from image files on disk.

use digitsvm::io::{ImageFormat, write_image};
use digitsvm::{
    DigitRecognizer, GrayscaleImage, ModelBank, ModelLayout, NUM_CLASSES, Polarity,
    PreprocessOptions, SvmConfig, SvmModel, preprocess,
};
use digitsvm_test::{
    ModelBundle, RegParams, init_logging, ring_glyph, scratch_dir, write_model_bundle,
};

/// A "1": dark vertical bar on light paper.
fn bar_glyph(size: u32) -> GrayscaleImage {
    let (lo, hi) = (size * 2 / 5, size * 3 / 5);
    GrayscaleImage::from_fn(size, size, |x, y| {
        if (lo..hi).contains(&x) && (size / 10..size * 9 / 10).contains(&y) {
            0
        } else {
            255
        }
    })
    .unwrap()
}

/// Class 0 and 1 remember their template; other classes score 0.
fn template_bundles(zero: &[f64], one: &[f64]) -> Vec<ModelBundle> {
    (0..NUM_CLASSES)
        .map(|d| match d {
            0 => ModelBundle::new(vec![zero.to_vec()], vec![1.0], 0.0),
            1 => ModelBundle::new(vec![one.to_vec()], vec![1.0], 0.0),
            _ => ModelBundle::new(vec![vec![0.0; zero.len()]], vec![0.0], 0.0),
        })
        .collect()
}

#[test]
fn recognize_reg() {
    init_logging();
    let mut rp = RegParams::new("recognize");
    let opts = PreprocessOptions::default();

    let ring = ring_glyph(112, 14, 0, 255).expect("ring");
    let bar = bar_glyph(112);
    let zero = preprocess(&ring, &opts).expect("ring pre").vector.to_features();
    let one = preprocess(&bar, &opts).expect("bar pre").vector.to_features();

    // --- Test 1: bank loaded from files recognizes image files ---
    let models_dir = scratch_dir().expect("models");
    for (d, bundle) in template_bundles(&zero, &one).iter().enumerate() {
        write_model_bundle(models_dir.path(), d, bundle).expect("bundle");
    }
    let layout = ModelLayout::new(models_dir.path());
    let recognizer = DigitRecognizer::load(&layout, SvmConfig::default()).expect("recognizer");

    let images_dir = scratch_dir().expect("images");
    let ring_path = images_dir.path().join("zero.png");
    let bar_path = images_dir.path().join("one.bmp");
    write_image(&ring, &ring_path, ImageFormat::Png).expect("write ring");
    write_image(&bar, &bar_path, ImageFormat::Bmp).expect("write bar");

    let r0 = recognizer.recognize_file(&ring_path).expect("recognize ring");
    let r1 = recognizer.recognize_file(&bar_path).expect("recognize bar");
    rp.compare_values(0.0, r0.digit() as f64, 0.0);
    rp.compare_values(1.0, r1.digit() as f64, 0.0);
    // the template term is exp(0) for the matching class
    rp.compare_values(1.0, r0.prediction.scores[0], 1e-12);
    rp.compare_values(1.0, r1.prediction.scores[1], 1e-12);
    rp.compare_values(0.0, r0.prediction.scores[5], 0.0);

    // --- Test 2: preview round trip through a file ---
    let preview = r0.preprocessed.preview().expect("preview");
    let preview_path = images_dir.path().join("preview.pnm");
    write_image(&preview, &preview_path, ImageFormat::Pnm).expect("write preview");
    let back = digitsvm::io::read_image(&preview_path).expect("read preview");
    rp.compare_vectors(preview.data(), back.data());

    // --- Test 3: light-on-dark input with matching polarity ---
    let light_ring = ring_glyph(28, 4, 255, 0).expect("light ring");
    let dark_ring = ring_glyph(28, 4, 0, 255).expect("dark ring");
    let light = preprocess(&light_ring, &opts.with_polarity(Polarity::InkIsLight))
        .expect("light pre");
    let dark = preprocess(&dark_ring, &opts).expect("dark pre");
    rp.compare_vectors(dark.vector.as_slice(), light.vector.as_slice());

    // --- Test 4: centering moves an off-centre digit to the middle ---
    let small = ring_glyph(40, 6, 0, 255).expect("small ring");
    let canvas = GrayscaleImage::from_fn(160, 160, |x, y| {
        if x >= 8 && y >= 8 {
            small.get_pixel(x - 8, y - 8).unwrap_or(255)
        } else {
            255
        }
    })
    .expect("canvas");
    let plain = preprocess(&canvas, &opts).expect("plain");
    let centered = preprocess(&canvas, &opts.with_centering(20)).expect("centered");
    let (px, py, _, _) = plain.binary.content_bounds().expect("plain ink");
    let (cx, cy, cw, ch) = centered.binary.content_bounds().expect("centered ink");
    rp.compare_values(1.0, if px < cx && py < cy { 1.0 } else { 0.0 }, 0.0);
    let right_margin = 28 - (cx + cw);
    let bottom_margin = 28 - (cy + ch);
    rp.compare_values(cx as f64, right_margin as f64, 1.0);
    rp.compare_values(cy as f64, bottom_margin as f64, 1.0);

    // --- Test 5: in-memory bank gives the same answer as the file bank ---
    let models: Vec<SvmModel> = template_bundles(&zero, &one)
        .into_iter()
        .map(|b| SvmModel::new(b.support_vectors, b.coefficients, b.bias).expect("model"))
        .collect();
    let memory = DigitRecognizer::new(ModelBank::new(models, SvmConfig::default()).expect("bank"));
    let m0 = memory.recognize(&ring).expect("memory ring");
    rp.compare_values(r0.digit() as f64, m0.digit() as f64, 0.0);
    rp.compare_values(r0.prediction.scores[1], m0.prediction.scores[1], 1e-12);

    assert!(rp.cleanup(), "recognize regression test failed");
}
