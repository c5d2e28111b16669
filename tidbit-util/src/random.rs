// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::Rng;

const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of strings produced by [`random_string`].
pub const DEFAULT_RANDOM_STRING_LEN: usize = 11;

/// A random lowercase base-36 string of [`DEFAULT_RANDOM_STRING_LEN`] characters.
///
/// Not suitable for secrets.
pub fn random_string() -> String {
    random_string_with(&mut rand::rng(), DEFAULT_RANDOM_STRING_LEN)
}

/// A random string of `len` characters from `[0-9a-z]`, drawn from `rng`.
pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(CHARSET[rng.random_range(0..CHARSET.len())]))
        .collect()
}
