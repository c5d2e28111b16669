// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::ops::{Add, Sub};
use core::time::Duration;

/// Monotonic clock plus sleep primitive of an async runtime.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()>;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    fn now(&self) -> Self::Instant;

    /// Time elapsed since `earlier`, zero if `earlier` lies in the future.
    fn elapsed_since(&self, earlier: Self::Instant) -> Duration {
        Self::elapsed_between(earlier, self.now())
    }

    /// `later - earlier`, saturating at zero.
    fn elapsed_between(earlier: Self::Instant, later: Self::Instant) -> Duration {
        if later > earlier {
            later - earlier
        } else {
            Duration::ZERO
        }
    }
}
