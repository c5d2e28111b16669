// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tidbit_core::ScheduledTask;
use tidbit_error::TidbitError;

#[test]
fn test_spawn_outside_runtime_is_rejected() {
    let result = ScheduledTask::spawn(|_cancel| async {});

    assert!(matches!(
        result,
        Err(TidbitError::SchedulerUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_drop_cancels_task() -> anyhow::Result<()> {
    // Arrange
    let stopped = Arc::new(AtomicBool::new(false));
    let flag = stopped.clone();
    let task = ScheduledTask::spawn(move |cancel| async move {
        cancel.cancelled().await;
        flag.store(true, Ordering::SeqCst);
    })?;

    // Act
    drop(task);
    tokio::time::sleep(Duration::from_millis(10)).await;

    // Assert
    assert!(stopped.load(Ordering::SeqCst));
    Ok(())
}

#[tokio::test]
async fn test_manual_cancel() -> anyhow::Result<()> {
    let task = ScheduledTask::spawn(|cancel| async move {
        cancel.cancelled().await;
    })?;

    assert!(!task.is_cancelled());
    task.cancel();
    assert!(task.is_cancelled());
    Ok(())
}
