// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Tidbit
//!
//! Rate limiting for plain functions and a few small helpers that tend to get
//! copied from project to project.
//!
//! ## Overview
//!
//! - [`debounce`] - run a function once calls have stopped for a while
//! - [`throttle`] - run a function at most once per gap, dropping the rest
//! - [`to_fixed`], [`parse_query`], [`deep_equals`] and friends - see [`util`]
//!
//! Both wrappers are generic over a [`Runtime`](runtime::Runtime) that supplies
//! the clock, the scheduler and the mutex. Tokio is the default.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tidbit::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> tidbit::Result<()> {
//!     let search = debounce(|term: String| println!("searching {term}"), Duration::from_millis(250));
//!     search.call("ti".into())?;
//!     search.call("tidbit".into())?;
//!
//!     let scroll = throttle(|y: u32| println!("scrolled to {y}"), Duration::from_millis(100));
//!     scroll.call(10);
//!     scroll.call(20); // dropped
//!
//!     tokio::time::sleep(Duration::from_millis(300)).await;
//!     Ok(())
//! }
//! ```

pub use tidbit_error::{IntoTidbitError, Result, ResultExt, TidbitError};

pub use tidbit_rate::{
    debounce_with_scheduler, throttle_with_timer, DebounceConfig, DebounceFnExt, Debounced, ThrottleConfig,
    ThrottleFnExt, Throttled,
};

#[cfg(feature = "runtime-tokio")]
pub use tidbit_rate::{debounce, throttle, DefaultRuntime, TokioDebounced, TokioThrottled};

pub use tidbit_util::{
    day_of_year, deep_equals, equals, format_options, parse_query, pick, pick_from, random_color,
    random_string, remove_tags, rgb_to_gray, to_fixed, Query,
};

pub use tidbit_core::CancellationToken;

/// Clock, scheduler and mutex abstractions.
pub mod runtime {
    pub use tidbit_runtime::mutex::MutexLike;
    pub use tidbit_runtime::runtime::Runtime;
    pub use tidbit_runtime::scheduler::{ScheduleHandle, Scheduler};
    pub use tidbit_runtime::timer::Timer;

    #[cfg(feature = "runtime-tokio")]
    pub use tidbit_runtime::impls::tokio::{TokioRuntime, TokioScheduler, TokioTimer};
}

/// All stateless helpers.
pub mod util {
    pub use tidbit_util::*;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        debounce_with_scheduler, throttle_with_timer, DebounceFnExt, Debounced, ThrottleFnExt, Throttled,
    };
    pub use tidbit_error::{IntoTidbitError, Result, ResultExt};

    #[cfg(feature = "runtime-tokio")]
    pub use crate::{debounce, throttle};
}
