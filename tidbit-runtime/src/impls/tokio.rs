// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::{panic::AssertUnwindSafe, sync::Arc, time::Duration};

#[cfg(feature = "runtime-tokio")]
use crate::{runtime::Runtime, scheduler::Scheduler, timer::Timer};
#[cfg(feature = "runtime-tokio")]
use tidbit_core::{panic::into_callback_panic, ScheduledTask};
#[cfg(feature = "runtime-tokio")]
use tidbit_error::Result;

#[cfg(feature = "runtime-tokio")]
pub struct TokioRuntime;

#[cfg(feature = "runtime-tokio")]
impl Runtime for TokioRuntime {
    type Mutex<T: ?Sized> = Arc<parking_lot::Mutex<T>>;
    type Timer = TokioTimer;
    type Scheduler = TokioScheduler;
    type Instant = tokio::time::Instant;
}

/// Tokio clock. Follows `tokio::time::pause`/`advance`, so tests can drive it.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

/// Schedules callbacks as tasks on the ambient tokio runtime.
///
/// Each callback gets its own task that sleeps until `now + delay`, then runs
/// the callback unless its handle was cancelled in the meantime.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

#[cfg(feature = "runtime-tokio")]
impl Scheduler for TokioScheduler {
    type Handle = ScheduledTask;

    fn schedule<F>(&self, delay: Duration, callback: F) -> Result<Self::Handle>
    where
        F: FnOnce() + Send + 'static,
    {
        // Deadline is fixed now, not when the task is first polled
        let deadline = TokioTimer.now() + delay;

        ScheduledTask::spawn(move |cancel| async move {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {}
                () = tokio::time::sleep_until(deadline) => {
                    if cancel.is_cancelled() {
                        return;
                    }
                    if let Err(payload) = std::panic::catch_unwind(AssertUnwindSafe(callback)) {
                        let error = into_callback_panic(payload);
                        tidbit_core::error!("scheduled callback aborted: {}", error);
                    }
                }
            }
        })
    }
}
