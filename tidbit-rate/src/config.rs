// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Plain-data settings for the rate limiters.
//!
//! With the `serde` feature both structs deserialize from e.g. JSON, and
//! missing fields fall back to the defaults.

use core::time::Duration;

pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 500;
pub const DEFAULT_THROTTLE_GAP_MS: u64 = 0;

/// Settings for [`Debounced`](crate::Debounced).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebounceConfig {
    /// Quiet period after the last call before the target runs
    pub delay_ms: u64,
}

impl DebounceConfig {
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_DELAY_MS)
    }
}

/// Settings for [`Throttled`](crate::Throttled).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThrottleConfig {
    /// Minimum time between two executions; zero disables throttling
    pub gap_ms: u64,
}

impl ThrottleConfig {
    #[must_use]
    pub const fn new(gap_ms: u64) -> Self {
        Self { gap_ms }
    }

    #[must_use]
    pub const fn gap(&self) -> Duration {
        Duration::from_millis(self.gap_ms)
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_GAP_MS)
    }
}
