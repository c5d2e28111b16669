// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tidbit_core::CancellationToken;

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_is_idempotent() {
    let token = CancellationToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn test_clone_shares_state() {
    let token = CancellationToken::new();
    let clone = token.clone();

    clone.cancel();

    assert!(token.is_cancelled());
}

#[tokio::test]
async fn test_cancelled_resolves_immediately_if_already_cancelled() {
    let token = CancellationToken::new();
    token.cancel();

    token.cancelled().await;
}

#[tokio::test]
async fn test_cancel_wakes_every_waiter() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let woken = Arc::new(AtomicUsize::new(0));
    let mut handles = Vec::new();

    for _ in 0..3 {
        let waiter = token.clone();
        let woken = woken.clone();
        handles.push(tokio::spawn(async move {
            waiter.cancelled().await;
            woken.fetch_add(1, Ordering::SeqCst);
        }));
    }
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(woken.load(Ordering::SeqCst), 0);

    // Act
    token.cancel();
    for handle in handles {
        tokio::time::timeout(Duration::from_secs(1), handle).await??;
    }

    // Assert
    assert_eq!(woken.load(Ordering::SeqCst), 3);
    Ok(())
}
