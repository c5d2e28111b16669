// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;
use std::time::Duration;
use tidbit_rate::debounce;
use tidbit_test_utils::CallRecorder;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_fire_once() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<u32>::new();
    let debounced = Arc::new(debounce(recorder.callback(), Duration::from_millis(1000)));
    let mut handles = Vec::new();

    // Act
    for i in 0..8 {
        let debounced = Arc::clone(&debounced);
        handles.push(tokio::spawn(async move { debounced.call(i) }));
    }
    for handle in handles {
        handle.await??;
    }
    tokio::time::sleep(Duration::from_millis(1500)).await;

    // Assert
    assert_eq!(recorder.count(), 1);
    assert!(!debounced.is_pending());
    Ok(())
}
