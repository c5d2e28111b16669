// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::DebounceConfig;
use core::fmt;
use core::time::Duration;
use std::sync::Arc;
use tidbit_core::debug;
use tidbit_error::Result;
use tidbit_runtime::mutex::MutexLike;
use tidbit_runtime::runtime::Runtime;
use tidbit_runtime::scheduler::{ScheduleHandle, Scheduler};

/// Handle type returned by the scheduler of runtime `R`.
pub type Handle<R> = <<R as Runtime>::Scheduler as Scheduler>::Handle;

/// Pending invocation of one debounced wrapper.
///
/// `generation` identifies the most recent call; a timer that fires for an
/// older generation does nothing.
#[derive(Debug)]
pub struct DebounceState<H> {
    pending: Option<H>,
    generation: u64,
}

impl<H> Default for DebounceState<H> {
    fn default() -> Self {
        Self {
            pending: None,
            generation: 0,
        }
    }
}

/// Trailing-edge debounce wrapper around a target function.
///
/// Every [`call`](Self::call) cancels the pending invocation (if any) and
/// schedules a new one `delay` from now with the latest arguments. The target
/// therefore runs once per burst, with the arguments of the burst's last call.
///
/// - A zero delay still defers the target to a later scheduler turn.
/// - Dropping the wrapper does not cancel an invocation that is already pending.
/// - A panic in the target happens on the scheduler task and is logged there;
///   it never reaches the caller.
///
/// Clones share the same pending state.
///
/// # Example
///
/// ```rust
/// use tidbit_rate::debounce;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() -> tidbit_error::Result<()> {
/// let last = Arc::new(AtomicU32::new(0));
/// let sink = last.clone();
/// let debounced = debounce(move |n: u32| sink.store(n, Ordering::SeqCst), Duration::from_millis(100));
///
/// debounced.call(1)?;
/// debounced.call(2)?;
/// debounced.call(3)?;
///
/// tokio::time::sleep(Duration::from_millis(150)).await;
/// assert_eq!(last.load(Ordering::SeqCst), 3);
/// # Ok(())
/// # }
/// ```
pub struct Debounced<A, R: Runtime> {
    target: Arc<dyn Fn(A) + Send + Sync>,
    delay: Duration,
    scheduler: R::Scheduler,
    state: R::Mutex<DebounceState<Handle<R>>>,
}

impl<A, R> Debounced<A, R>
where
    A: Send + 'static,
    R: Runtime,
    R::Mutex<DebounceState<Handle<R>>>: Send + Sync + 'static,
{
    /// Wraps `target` using the runtime's default scheduler.
    pub fn new<F, O>(target: F, delay: Duration) -> Self
    where
        F: Fn(A) -> O + Send + Sync + 'static,
    {
        Self::with_scheduler(target, delay, R::Scheduler::default())
    }

    /// Wraps `target` with settings taken from `config`.
    pub fn from_config<F, O>(target: F, config: &DebounceConfig) -> Self
    where
        F: Fn(A) -> O + Send + Sync + 'static,
    {
        Self::new(target, config.delay())
    }

    /// Wraps `target`, scheduling deferred invocations on `scheduler`.
    pub fn with_scheduler<F, O>(target: F, delay: Duration, scheduler: R::Scheduler) -> Self
    where
        F: Fn(A) -> O + Send + Sync + 'static,
    {
        Self {
            target: Arc::new(move |args| {
                // Results of the target are not propagated to callers
                let _ = target(args);
            }),
            delay,
            scheduler,
            state: <R::Mutex<DebounceState<Handle<R>>> as MutexLike<DebounceState<Handle<R>>>>::new(
                DebounceState::default(),
            ),
        }
    }

    /// Restart the quiet period, remembering `args` for the eventual invocation.
    ///
    /// Returns as soon as the invocation is scheduled; nothing from the target
    /// flows back through here.
    ///
    /// # Errors
    /// Returns [`TidbitError::SchedulerUnavailable`](tidbit_error::TidbitError::SchedulerUnavailable)
    /// when the scheduler cannot accept work. The previously pending
    /// invocation is cancelled either way.
    pub fn call(&self, args: A) -> Result<()> {
        let mut state = self.state.lock();

        if let Some(previous) = state.pending.take() {
            previous.cancel();
            debug!("debounce: superseded pending invocation");
        }

        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;
        let target = Arc::clone(&self.target);
        let shared = self.state.clone();

        let handle = self.scheduler.schedule(self.delay, move || {
            {
                let mut state = shared.lock();
                if state.generation != generation {
                    debug!("debounce: stale timer for generation {}", generation);
                    return;
                }
                state.pending = None;
            }
            target(args);
        })?;

        state.pending = Some(handle);
        debug!("debounce: invocation {} scheduled in {:?}", generation, self.delay);
        Ok(())
    }
}

impl<A, R: Runtime> Debounced<A, R> {
    /// `true` while an invocation is scheduled and has not started yet.
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A, R: Runtime> Clone for Debounced<A, R> {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
            delay: self.delay,
            scheduler: self.scheduler.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A, R: Runtime> fmt::Debug for Debounced<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.delay)
            .field("scheduler", &self.scheduler)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

/// Wraps `target` in a [`Debounced`] on the default runtime.
///
/// The target runs `delay` after the last of a burst of calls.
#[cfg(feature = "runtime-tokio")]
pub fn debounce<A, F, O>(target: F, delay: Duration) -> Debounced<A, crate::DefaultRuntime>
where
    A: Send + 'static,
    F: Fn(A) -> O + Send + Sync + 'static,
{
    Debounced::new(target, delay)
}

/// Wraps `target` in a [`Debounced`] on runtime `R`, scheduling through `scheduler`.
///
/// `R` cannot be inferred from the scheduler; name it with a turbofish:
/// `debounce_with_scheduler::<TokioRuntime, _, _, _>(f, delay, TokioScheduler)`.
pub fn debounce_with_scheduler<R, A, F, O>(target: F, delay: Duration, scheduler: R::Scheduler) -> Debounced<A, R>
where
    A: Send + 'static,
    F: Fn(A) -> O + Send + Sync + 'static,
    R: Runtime,
    R::Mutex<DebounceState<Handle<R>>>: Send + Sync + 'static,
{
    Debounced::with_scheduler(target, delay, scheduler)
}

/// Extension trait providing `.debounced(delay)` on functions.
pub trait DebounceFnExt<A>: Sized {
    /// Debounces `self` on the default runtime.
    #[cfg(feature = "runtime-tokio")]
    fn debounced(self, delay: Duration) -> Debounced<A, crate::DefaultRuntime>;

    /// Debounces `self` on runtime `R`, scheduling through `scheduler`.
    fn debounced_with_scheduler<R>(self, delay: Duration, scheduler: R::Scheduler) -> Debounced<A, R>
    where
        R: Runtime,
        R::Mutex<DebounceState<Handle<R>>>: Send + Sync + 'static;
}

impl<F, A, O> DebounceFnExt<A> for F
where
    F: Fn(A) -> O + Send + Sync + 'static,
    A: Send + 'static,
{
    #[cfg(feature = "runtime-tokio")]
    fn debounced(self, delay: Duration) -> Debounced<A, crate::DefaultRuntime> {
        Debounced::new(self, delay)
    }

    fn debounced_with_scheduler<R>(self, delay: Duration, scheduler: R::Scheduler) -> Debounced<A, R>
    where
        R: Runtime,
        R::Mutex<DebounceState<Handle<R>>>: Send + Sync + 'static,
    {
        Debounced::with_scheduler(self, delay, scheduler)
    }
}
