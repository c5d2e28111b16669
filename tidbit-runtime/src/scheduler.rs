// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deferred execution: run a callback after a delay, unless cancelled first.

use core::fmt::Debug;
use core::time::Duration;
use tidbit_core::ScheduledTask;
use tidbit_error::Result;

/// Handle to one pending scheduled callback.
///
/// Dropping a handle must not be relied upon to keep the callback alive:
/// implementations may cancel on drop.
pub trait ScheduleHandle: Send + Sync + Debug + 'static {
    /// Prevent the callback from running if it has not started yet.
    fn cancel(&self);

    fn is_cancelled(&self) -> bool;
}

/// Runs callbacks on a later turn of the runtime.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    type Handle: ScheduleHandle;

    /// Schedule `callback` to run once `delay` has elapsed.
    ///
    /// A zero delay still defers the callback; it never runs inside this call.
    /// A panic inside `callback` is contained by the scheduler.
    ///
    /// # Errors
    /// Returns [`TidbitError::SchedulerUnavailable`](tidbit_error::TidbitError::SchedulerUnavailable)
    /// when no runtime can accept the work.
    fn schedule<F>(&self, delay: Duration, callback: F) -> Result<Self::Handle>
    where
        F: FnOnce() + Send + 'static;
}

impl ScheduleHandle for ScheduledTask {
    fn cancel(&self) {
        ScheduledTask::cancel(self);
    }

    fn is_cancelled(&self) -> bool {
        ScheduledTask::is_cancelled(self)
    }
}
