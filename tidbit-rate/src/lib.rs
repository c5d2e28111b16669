// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Rate limiters for plain functions, with a runtime-agnostic clock and scheduler.
//!
//! # Overview
//!
//! - **[`Debounced`]** - trailing edge: runs the target once a quiet period has
//!   passed, with the arguments of the last call
//! - **[`Throttled`]** - leading edge: runs the target immediately, then drops
//!   calls until the gap has elapsed
//! - **`DebounceFnExt` / `ThrottleFnExt`** - `.debounced(delay)` and
//!   `.throttled(gap)` on any closure
//! - **[`DebounceConfig`] / [`ThrottleConfig`]** - defaults of 500 ms and 0 ms
//!
//! Targets take a single argument; pass a tuple for several. Calling context
//! is whatever the closure captures.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - `TokioRuntime` with tokio's pausable clock
//!
//! # Example
//!
//! ```rust,no_run
//! use tidbit_rate::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> tidbit_error::Result<()> {
//! let save = debounce(|text: String| println!("saving {text}"), Duration::from_millis(300));
//! save.call("h".to_string())?;
//! save.call("he".to_string())?; // only "he" is saved, 300 ms from now
//!
//! let click = throttle(|n: u32| n * 2, Duration::from_secs(1));
//! assert_eq!(click.call(1), Some(2));
//! assert_eq!(click.call(2), None); // inside the window
//! # Ok(())
//! # }
//! ```

pub mod config;
mod debounce;
pub mod prelude;
mod throttle;

pub use config::{DebounceConfig, ThrottleConfig};
pub use debounce::{debounce_with_scheduler, DebounceFnExt, DebounceState, Debounced};
pub use throttle::{throttle_with_timer, ThrottleFnExt, Throttled};

#[cfg(feature = "runtime-tokio")]
pub use debounce::debounce;
#[cfg(feature = "runtime-tokio")]
pub use throttle::throttle;

#[cfg(feature = "runtime-tokio")]
pub use tidbit_runtime::impls::tokio::{TokioRuntime, TokioScheduler, TokioTimer};

#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = TokioRuntime;

#[cfg(feature = "runtime-tokio")]
pub type TokioDebounced<A> = Debounced<A, TokioRuntime>;

#[cfg(feature = "runtime-tokio")]
pub type TokioThrottled<F> = Throttled<F, TokioRuntime>;
