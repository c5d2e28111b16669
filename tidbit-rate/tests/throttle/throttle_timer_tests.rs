// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tidbit_rate::{throttle_with_timer, TokioRuntime, TokioScheduler, TokioTimer};
use tidbit_runtime::runtime::Runtime;
use tidbit_runtime::timer::Timer;
use tidbit_test_utils::{advance_ms, CallRecorder};
use tokio::time::Instant;

/// Clock that moves forward by one millisecond on every reading.
#[derive(Clone, Debug)]
struct SteppingTimer {
    base: Instant,
    readings: Arc<AtomicU64>,
}

impl Default for SteppingTimer {
    fn default() -> Self {
        Self {
            base: Instant::now(),
            readings: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl Timer for SteppingTimer {
    type Sleep = tokio::time::Sleep;
    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        let step = self.readings.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::from_millis(step)
    }
}

struct SteppingRuntime;

impl Runtime for SteppingRuntime {
    type Mutex<T: ?Sized> = <TokioRuntime as Runtime>::Mutex<T>;
    type Timer = SteppingTimer;
    type Scheduler = TokioScheduler;
    type Instant = Instant;
}

#[tokio::test(start_paused = true)]
async fn test_free_constructor_with_tokio_timer() {
    // Arrange
    let recorder = CallRecorder::<u32>::new();
    let throttled = throttle_with_timer::<TokioRuntime, _>(recorder.callback(), Duration::from_millis(100), TokioTimer);

    // Act
    throttled.call(1);
    advance_ms(50).await;
    throttled.call(2);
    advance_ms(60).await;
    throttled.call(3);

    // Assert
    assert_eq!(recorder.args(), vec![1, 3]);
    assert_eq!(throttled.gap(), Duration::from_millis(100));
}

#[test]
fn test_window_decided_by_single_clock_reading() {
    // Arrange
    let timer = SteppingTimer::default();
    let base = timer.base;
    let throttled = throttle_with_timer::<SteppingRuntime, _>(|n: u32| n, Duration::from_millis(2), timer);

    // Act & Assert
    assert_eq!(throttled.call(1), Some(1)); // reading at +0
    assert_eq!(throttled.call(2), None); // +1
    assert_eq!(throttled.call(3), None); // +2, equal to the gap
    assert_eq!(throttled.call(4), Some(4)); // +3
    assert_eq!(
        throttled.last_invocation(),
        Some(base + Duration::from_millis(3))
    );
}
