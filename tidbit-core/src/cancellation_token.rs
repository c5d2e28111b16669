// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic cancellation token.
//!
//! Each pending debounced invocation owns one token; superseding the
//! invocation cancels it, which wakes the sleeping task so it exits early.

use event_listener::Event;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable cancellation flag with async notification.
///
/// All clones share one state. Once cancelled, a token stays cancelled.
///
/// # Example
///
/// ```
/// use tidbit_core::CancellationToken;
///
/// # async fn example() {
/// let token = CancellationToken::new();
/// let waiter = token.clone();
///
/// tokio::spawn(async move {
///     waiter.cancelled().await;
/// });
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    event: Event,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the token, waking every task awaiting [`cancelled`](Self::cancelled).
    ///
    /// Idempotent.
    pub fn cancel(&self) {
        // Publish the flag before notifying so woken listeners observe it
        self.inner.cancelled.store(true, Ordering::Release);
        self.inner.event.notify(usize::MAX);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Wait until the token is cancelled. Returns immediately if it already is.
    pub async fn cancelled(&self) {
        loop {
            if self.is_cancelled() {
                return;
            }

            let listener = self.inner.event.listen();

            // A cancel between the check above and listen() would otherwise be missed
            if self.is_cancelled() {
                return;
            }

            listener.await;
        }
    }
}
