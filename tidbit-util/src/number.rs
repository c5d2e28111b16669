// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Decimal rounding on the printed digits of a number.
//!
//! Binary rounding of `1.005` to two places gives `1.00`, because the stored
//! value is slightly below `1.005`. [`to_fixed`] rounds the shortest decimal
//! rendering instead, so `1.005` becomes `1.01`.

use tidbit_error::{Result, TidbitError};

pub const DEFAULT_FIXED_DIGITS: usize = 2;
pub const MAX_FIXED_DIGITS: usize = 100;

/// Renders `num` with exactly `fixed` fraction digits.
///
/// Digits past `fixed` are cut off; if the first cut digit is 5 or more, one
/// unit is added at the last kept digit and the carry ripples left, into the
/// integer part if needed. Negative numbers round away from zero.
///
/// # Errors
/// - [`TidbitError::InvalidNumber`] for NaN or infinite input
/// - [`TidbitError::InvalidPrecision`] when `fixed` exceeds [`MAX_FIXED_DIGITS`]
///
/// # Examples
///
/// ```
/// use tidbit_util::to_fixed;
///
/// assert_eq!(to_fixed(1.005, 2)?, "1.01");
/// assert_eq!(to_fixed(9.995, 2)?, "10.00");
/// assert_eq!(to_fixed(-2.5, 0)?, "-3");
/// assert_eq!(to_fixed(1.2, 3)?, "1.200");
/// # Ok::<(), tidbit_error::TidbitError>(())
/// ```
pub fn to_fixed(num: f64, fixed: usize) -> Result<String> {
    if !num.is_finite() {
        return Err(TidbitError::invalid_number(num));
    }
    if fixed > MAX_FIXED_DIGITS {
        return Err(TidbitError::invalid_precision(fixed, MAX_FIXED_DIGITS));
    }

    // -0.0 prints as "-0"
    let rendered = if num == 0.0 {
        "0".to_string()
    } else {
        num.to_string()
    };
    let (negative, magnitude) = match rendered.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rendered.as_str()),
    };
    let (integer, fraction) = magnitude.split_once('.').unwrap_or((magnitude, ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(core::iter::repeat(b'0')).take(fixed))
        .collect();

    let round_up = fraction
        .as_bytes()
        .get(fixed)
        .is_some_and(|digit| *digit >= b'5');
    if round_up {
        increment(&mut digits);
    }

    let split = digits.len() - fixed;
    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(digits[..split].iter().copied().map(char::from));
    if fixed > 0 {
        out.push('.');
        out.extend(digits[split..].iter().copied().map(char::from));
    }
    Ok(out)
}

/// Adds one to an ASCII digit string, growing it on overflow (`999` -> `1000`).
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
