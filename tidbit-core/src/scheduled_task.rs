// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Handle to a spawned background task with cooperative cancellation.

use crate::CancellationToken;
#[cfg(feature = "runtime-tokio")]
use core::future::Future;
#[cfg(feature = "runtime-tokio")]
use tidbit_error::{Result, TidbitError};

/// Handle to a spawned task. Cancels the task's token when dropped.
///
/// The spawned future receives a clone of the token and is expected to stop
/// at its next cancellation checkpoint once the token fires.
///
/// # Example
///
/// ```rust
/// use tidbit_core::ScheduledTask;
///
/// # #[tokio::main]
/// # async fn main() -> tidbit_error::Result<()> {
/// let task = ScheduledTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// })?;
///
/// assert!(!task.is_cancelled());
/// drop(task); // wakes the task, which returns
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ScheduledTask {
    cancel: CancellationToken,
}

impl ScheduledTask {
    /// Spawn `f(token)` on the ambient tokio runtime.
    ///
    /// # Errors
    /// Returns [`TidbitError::SchedulerUnavailable`] when called outside a
    /// tokio runtime.
    #[cfg(feature = "runtime-tokio")]
    pub fn spawn<F, Fut>(f: F) -> Result<Self>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| TidbitError::scheduler_unavailable(e.to_string()))?;

        let cancel = CancellationToken::new();
        handle.spawn(f(cancel.clone()));

        Ok(Self { cancel })
    }

    /// Signal the task to stop. Does not wait for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
