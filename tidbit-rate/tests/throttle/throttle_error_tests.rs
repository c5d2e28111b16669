// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;
use tidbit_error::TidbitError;
use tidbit_rate::throttle;
use tidbit_test_utils::advance_ms;

#[tokio::test(start_paused = true)]
async fn test_target_error_reaches_caller() {
    let throttled = throttle(
        |n: i32| -> Result<i32, TidbitError> {
            if n < 0 {
                Err(TidbitError::invalid_number(f64::from(n)))
            } else {
                Ok(n)
            }
        },
        Duration::from_millis(100),
    );

    let result = throttled.call(-1);

    assert!(matches!(result, Some(Err(TidbitError::InvalidNumber { .. }))));
}

#[tokio::test(start_paused = true)]
async fn test_failed_call_still_closes_window() {
    let throttled = throttle(|_: ()| Err::<(), _>("rejected"), Duration::from_millis(100));

    assert_eq!(throttled.call(()), Some(Err("rejected")));
    assert_eq!(throttled.call(()), None);
}

#[tokio::test(start_paused = true)]
async fn test_panic_propagates_synchronously_and_state_survives() {
    // Arrange
    let throttled = throttle(
        |n: u32| {
            assert!(n != 0, "zero is not allowed");
            n
        },
        Duration::from_millis(100),
    );

    // Act
    let panicked = catch_unwind(AssertUnwindSafe(|| throttled.call(0)));

    // Assert
    assert!(panicked.is_err());
    assert_eq!(throttled.call(1), None);

    advance_ms(101).await;
    assert_eq!(throttled.call(2), Some(2));
}
