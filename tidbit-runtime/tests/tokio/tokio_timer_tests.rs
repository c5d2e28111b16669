// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tidbit_runtime::impls::tokio::TokioTimer;
use tidbit_runtime::timer::Timer;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_now_follows_paused_clock() {
    let timer = TokioTimer;
    let start = timer.now();

    advance(Duration::from_millis(250)).await;

    assert_eq!(timer.now() - start, Duration::from_millis(250));
    assert_eq!(timer.elapsed_since(start), Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn test_elapsed_since_future_instant_is_zero() {
    let timer = TokioTimer;
    let later = timer.now() + Duration::from_secs(1);

    assert_eq!(timer.elapsed_since(later), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_elapsed_between_saturates() {
    let start = TokioTimer.now();
    let later = start + Duration::from_millis(40);

    assert_eq!(TokioTimer::elapsed_between(start, later), Duration::from_millis(40));
    assert_eq!(TokioTimer::elapsed_between(later, start), Duration::ZERO);
    assert_eq!(TokioTimer::elapsed_between(start, start), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_sleep_future_completes_after_duration() {
    let timer = TokioTimer;
    let start = timer.now();

    timer.sleep_future(Duration::from_millis(40)).await;

    assert!(timer.now() - start >= Duration::from_millis(40));
}
