// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::Rng;

const MAX_COLOR: u32 = 0x00FF_FFFF;

/// Relative luminance of an sRGB triple, in `0.0..=255.0`.
///
/// ```
/// let gray = tidbit_util::rgb_to_gray(50, 100, 150);
/// assert!((gray - 92.98).abs() < 1e-9);
/// ```
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)
}

/// A random `#rrggbb` color using the thread-local generator.
pub fn random_color() -> String {
    random_color_with(&mut rand::rng())
}

/// A random `#rrggbb` color drawn from `rng`. Always six lowercase hex digits.
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.random_range(0..=MAX_COLOR))
}
