// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tidbit_error::TidbitError;
use tidbit_rate::debounce;
use tidbit_test_utils::{advance_ms, CallRecorder};

#[test]
fn test_call_outside_runtime_is_rejected() {
    let recorder = CallRecorder::<u32>::new();
    let debounced = debounce(recorder.callback(), Duration::from_millis(10));

    let result = debounced.call(1);

    assert!(matches!(
        result,
        Err(TidbitError::SchedulerUnavailable { .. })
    ));
    assert!(!debounced.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_panicking_target_does_not_reach_caller() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<u32>::new();
    let sink = recorder.clone();
    let debounced = debounce(
        move |n: u32| {
            if n == 0 {
                panic!("target rejected zero");
            }
            sink.record(n);
        },
        Duration::from_millis(10),
    );

    // Act
    debounced.call(0)?;
    advance_ms(10).await;
    debounced.call(5)?;
    advance_ms(10).await;

    // Assert
    assert_eq!(recorder.args(), vec![5]);
    assert!(!debounced.is_pending());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_target_error_is_not_propagated() -> anyhow::Result<()> {
    let recorder = CallRecorder::<u32>::new();
    let sink = recorder.clone();
    let debounced = debounce(
        move |n: u32| -> Result<(), TidbitError> {
            sink.record(n);
            Err(TidbitError::invalid_number(f64::NAN))
        },
        Duration::from_millis(10),
    );

    debounced.call(3)?;
    advance_ms(10).await;

    assert_eq!(recorder.args(), vec![3]);
    Ok(())
}
