//! Synthetic grayscale test frame generation.
//!
//! Generates deterministic test patterns for controlled testing of the
//! codecs. All functions produce reproducible output suitable for
//! regression testing.

#![allow(dead_code)]

/// Generate a solid gray frame.
pub fn solid_gray(width: u16, height: u16, gray: u8) -> Vec<u8> {
    vec![gray; width as usize * height as usize]
}

/// Generate a horizontal gradient (dark left to bright right).
pub fn gradient_horizontal(width: u16, height: u16) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for _y in 0..height {
        for x in 0..width {
            pixels.push(((x as u32 * 255) / width.max(1) as u32) as u8);
        }
    }
    pixels
}

/// Generate a vertical gradient (dark top to bright bottom).
pub fn gradient_vertical(width: u16, height: u16) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        let v = ((y as u32 * 255) / height.max(1) as u32) as u8;
        for _x in 0..width {
            pixels.push(v);
        }
    }
    pixels
}

/// Generate a diagonal gradient (top-left to bottom-right).
pub fn gradient_diagonal(width: u16, height: u16) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    let max_dist = (width as u32 + height as u32).max(1);
    for y in 0..height {
        for x in 0..width {
            pixels.push((((x as u32 + y as u32) * 255) / max_dist) as u8);
        }
    }
    pixels
}

/// Generate a checkerboard pattern.
pub fn checkerboard(width: u16, height: u16, cell_size: u16) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    let cell_size = cell_size.max(1);
    for y in 0..height {
        for x in 0..width {
            let is_white = ((x / cell_size) + (y / cell_size)) % 2 == 0;
            pixels.push(if is_white { 255 } else { 0 });
        }
    }
    pixels
}

/// Generate the alternating 63/64 pattern that flips the residual sign on
/// every pixel.
pub fn alternating(width: u16, height: u16) -> Vec<u8> {
    (0..width as usize * height as usize)
        .map(|i| if i % 2 == 0 { 63 } else { 64 })
        .collect()
}

/// Generate a single-row 0..=255 ramp repeated over `height` rows.
pub fn ramp(width: u16, height: u16) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for _y in 0..height {
        for x in 0..width {
            pixels.push((x % 256) as u8);
        }
    }
    pixels
}

/// Generate the 128/0 alternation whose residuals all fold to 255,
/// forcing the tail escape on every pixel.
pub fn worst_case(width: u16, height: u16) -> Vec<u8> {
    (0..width as usize * height as usize)
        .map(|i| if i % 2 == 0 { 128 } else { 0 })
        .collect()
}

/// Generate pseudo-random noise using a simple LCG. The pattern is
/// deterministic based on the seed.
pub fn noise_gray(width: u16, height: u16, seed: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    let mut state = seed;
    for _ in 0..width as usize * height as usize {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        pixels.push((state >> 16) as u8);
    }
    pixels
}

/// Predefined frame dimensions for edge case testing.
pub const EDGE_CASE_DIMENSIONS: &[(u16, u16, &str)] = &[
    (1, 1, "minimum"),
    (2, 2, "tiny"),
    (7, 7, "not_power_of_2"),
    (15, 17, "odd_dimensions"),
    (1, 100, "tall_narrow"),
    (100, 1, "wide_short"),
    (64, 64, "word_multiple"),
    (63, 65, "around_word_multiple"),
    (256, 256, "standard_small"),
];

/// Generate a set of standard test frames for comprehensive testing.
/// Returns (name, width, height, pixels).
pub fn generate_test_suite() -> Vec<(String, u16, u16, Vec<u8>)> {
    let mut suite = Vec::new();

    suite.push(("solid_black".to_string(), 64, 64, solid_gray(64, 64, 0)));
    suite.push(("solid_white".to_string(), 64, 64, solid_gray(64, 64, 255)));
    suite.push(("solid_mid".to_string(), 64, 64, solid_gray(64, 64, 128)));

    suite.push((
        "gradient_h".to_string(),
        256,
        64,
        gradient_horizontal(256, 64),
    ));
    suite.push(("gradient_v".to_string(), 64, 256, gradient_vertical(64, 256)));
    suite.push((
        "gradient_d".to_string(),
        128,
        128,
        gradient_diagonal(128, 128),
    ));

    suite.push(("checker_8".to_string(), 128, 128, checkerboard(128, 128, 8)));
    suite.push(("checker_1".to_string(), 64, 64, checkerboard(64, 64, 1)));
    suite.push(("alternating".to_string(), 8, 4, alternating(8, 4)));
    suite.push(("ramp".to_string(), 256, 1, ramp(256, 1)));
    suite.push(("worst_case".to_string(), 64, 4, worst_case(64, 4)));

    suite.push(("noise_42".to_string(), 64, 64, noise_gray(64, 64, 42)));

    for &(w, h, name) in EDGE_CASE_DIMENSIONS {
        suite.push((format!("dim_{name}"), w, h, gradient_diagonal(w, h)));
    }

    suite
}
