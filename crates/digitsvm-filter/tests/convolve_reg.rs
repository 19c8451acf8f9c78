//! Gaussian smoothing regression test
//!
//! The 5x5 blur must leave flat regions alone, soften step edges
//! monotonically, and shrink isolated specks below the paper/ink midpoint.

use digitsvm_core::{GrayscaleImage, GrayscaleImageMut};
use digitsvm_filter::{BorderHandling, Kernel, convolve_gray, gaussian_blur};
use digitsvm_test::{RegParams, two_tone_image};

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    // --- Test 1: step edge between two flat regions ---
    let step = two_tone_image(16, 9, 10, 240).expect("step");
    let blurred = gaussian_blur(&step, BorderHandling::Preserve).expect("blur");
    // border rows untouched
    rp.compare_vectors(step.row(0), blurred.row(0));
    rp.compare_vectors(step.row(8), blurred.row(8));
    // far from the edge the field is flat
    rp.compare_values(10.0, blurred.get_pixel(3, 4).unwrap() as f64, 0.0);
    rp.compare_values(240.0, blurred.get_pixel(12, 4).unwrap() as f64, 0.0);
    // across the edge values never decrease
    let row = blurred.row(4);
    let monotone = row.windows(2).all(|w| w[0] <= w[1]);
    rp.compare_values(1.0, if monotone { 1.0 } else { 0.0 }, 0.0);

    // --- Test 2: isolated speck ---
    let mut m = GrayscaleImageMut::new(9, 9).expect("canvas");
    m.set_pixel(4, 4, 255).expect("speck");
    let speck: GrayscaleImage = m.into();
    let out = gaussian_blur(&speck, BorderHandling::Preserve).expect("blur speck");
    rp.compare_values(38.0, out.get_pixel(4, 4).unwrap() as f64, 0.0);
    // 255 * 26 / 273 = 24.28
    rp.compare_values(24.0, out.get_pixel(3, 4).unwrap() as f64, 0.0);

    // --- Test 3: border modes only differ on the border ---
    let img = GrayscaleImage::from_fn(12, 12, |x, y| ((x * 23 + y * 41) % 256) as u8).unwrap();
    let p = gaussian_blur(&img, BorderHandling::Preserve).expect("preserve");
    let r = gaussian_blur(&img, BorderHandling::Replicate).expect("replicate");
    for y in 2..10 {
        rp.compare_vectors(&p.row(y)[2..10], &r.row(y)[2..10]);
    }

    // --- Test 4: box kernel equals block mean (truncated) ---
    let k = Kernel::box_kernel(3).expect("box");
    let img = GrayscaleImage::from_raw(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 10]).unwrap();
    let out = convolve_gray(&img, &k, BorderHandling::Preserve).expect("box conv");
    // 46 / 9 = 5.11
    rp.compare_values(5.0, out.get_pixel(1, 1).unwrap() as f64, 0.0);

    assert!(rp.cleanup(), "convolve regression test failed");
}
