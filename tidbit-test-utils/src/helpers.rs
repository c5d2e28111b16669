// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::advance;

const SETTLE_ROUNDS: usize = 8;

/// Yields repeatedly so spawned tasks whose timers already expired get to run.
pub async fn settle() {
    for _ in 0..SETTLE_ROUNDS {
        yield_now().await;
    }
}

/// Advances the paused tokio clock by `ms` and lets due tasks run.
///
/// # Panics
/// Panics if the clock is not paused.
pub async fn advance_ms(ms: u64) {
    settle().await;
    advance(Duration::from_millis(ms)).await;
    settle().await;
}
