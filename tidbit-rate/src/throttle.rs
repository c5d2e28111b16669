// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ThrottleConfig;
use core::fmt;
use core::time::Duration;
use tidbit_core::debug;
use tidbit_runtime::mutex::MutexLike;
use tidbit_runtime::runtime::Runtime;
use tidbit_runtime::timer::Timer;

/// Instant type of the clock of runtime `R`.
pub type InstantOf<R> = <<R as Runtime>::Timer as Timer>::Instant;

/// Leading-edge throttle wrapper around a target function.
///
/// A call runs the target immediately when no earlier call ran, or when the
/// time since the last *executed* call strictly exceeds `gap`. Any other call
/// is dropped: the target does not run, nothing is queued, and the recorded
/// timestamp stays where it was. A zero gap disables throttling.
///
/// The target runs on the caller's thread, so its return value (including
/// any `Result`) and any panic reach the caller directly.
///
/// # Example
///
/// ```rust
/// use tidbit_rate::throttle;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let throttled = throttle(|n: u32| n + 1, Duration::from_millis(1000));
///
/// assert_eq!(throttled.call(1), Some(2));
/// tokio::time::advance(Duration::from_millis(500)).await;
/// assert_eq!(throttled.call(2), None);
/// tokio::time::advance(Duration::from_millis(700)).await;
/// assert_eq!(throttled.call(3), Some(4));
/// # }
/// ```
pub struct Throttled<F, R: Runtime> {
    target: F,
    gap: Duration,
    timer: R::Timer,
    last_invocation: R::Mutex<Option<InstantOf<R>>>,
}

impl<F, R: Runtime> Throttled<F, R> {
    /// Wraps `target` using the runtime's default clock.
    pub fn new(target: F, gap: Duration) -> Self {
        Self::with_timer(target, gap, R::Timer::default())
    }

    /// Wraps `target` with settings taken from `config`.
    pub fn from_config(target: F, config: &ThrottleConfig) -> Self {
        Self::new(target, config.gap())
    }

    /// Wraps `target`, reading the current time from `timer`.
    pub fn with_timer(target: F, gap: Duration, timer: R::Timer) -> Self {
        Self {
            target,
            gap,
            timer,
            last_invocation: <R::Mutex<Option<InstantOf<R>>> as MutexLike<Option<InstantOf<R>>>>::new(
                None,
            ),
        }
    }

    /// Run the target now if the window is open.
    ///
    /// Returns `Some(output)` when the target ran and `None` when the call was
    /// dropped.
    pub fn call<A, O>(&self, args: A) -> Option<O>
    where
        F: Fn(A) -> O,
    {
        if !self.try_acquire() {
            debug!("throttle: call dropped inside {:?} window", self.gap);
            return None;
        }
        Some((self.target)(args))
    }

    /// Instant of the last executed call, if any.
    pub fn last_invocation(&self) -> Option<InstantOf<R>> {
        *self.last_invocation.lock()
    }

    pub fn gap(&self) -> Duration {
        self.gap
    }

    // One clock reading decides the window and becomes the new timestamp.
    // It is recorded before the target runs; a re-entrant call sees a closed
    // window.
    fn try_acquire(&self) -> bool {
        let now = self.timer.now();
        let mut last = self.last_invocation.lock();

        let open = match *last {
            None => true,
            Some(_) if self.gap.is_zero() => true,
            Some(previous) => R::Timer::elapsed_between(previous, now) > self.gap,
        };

        if open {
            *last = Some(now);
        }
        open
    }
}

impl<F, R: Runtime> fmt::Debug for Throttled<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("gap", &self.gap)
            .field("timer", &self.timer)
            .field("last_invocation", &self.last_invocation())
            .finish_non_exhaustive()
    }
}

/// Wraps `target` in a [`Throttled`] on the default runtime.
///
/// The first call runs immediately; later calls run only once more than
/// `gap` has passed since the last one that ran.
#[cfg(feature = "runtime-tokio")]
pub fn throttle<F>(target: F, gap: Duration) -> Throttled<F, crate::DefaultRuntime> {
    Throttled::new(target, gap)
}

/// Wraps `target` in a [`Throttled`] on runtime `R`, reading time from `timer`.
///
/// Name `R` explicitly: `throttle_with_timer::<TokioRuntime, _>(f, gap, TokioTimer)`.
pub fn throttle_with_timer<R: Runtime, F>(target: F, gap: Duration, timer: R::Timer) -> Throttled<F, R> {
    Throttled::with_timer(target, gap, timer)
}

/// Extension trait providing `.throttled(gap)` on functions.
pub trait ThrottleFnExt<A>: Sized {
    /// Throttles `self` on the default runtime.
    #[cfg(feature = "runtime-tokio")]
    fn throttled(self, gap: Duration) -> Throttled<Self, crate::DefaultRuntime>;

    /// Throttles `self` on runtime `R`, reading time from `timer`.
    fn throttled_with_timer<R: Runtime>(self, gap: Duration, timer: R::Timer) -> Throttled<Self, R>;
}

impl<F, A, O> ThrottleFnExt<A> for F
where
    F: Fn(A) -> O,
{
    #[cfg(feature = "runtime-tokio")]
    fn throttled(self, gap: Duration) -> Throttled<Self, crate::DefaultRuntime> {
        Throttled::new(self, gap)
    }

    fn throttled_with_timer<R: Runtime>(self, gap: Duration, timer: R::Timer) -> Throttled<Self, R> {
        Throttled::with_timer(self, gap, timer)
    }
}
