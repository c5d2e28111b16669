// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Building blocks shared by the tidbit crates.
//!
//! - [`CancellationToken`] - cloneable, runtime-agnostic cancellation flag
//! - [`ScheduledTask`] - handle to a spawned task that cancels itself on drop
//! - logging macros (`error!`, `warn!`, `debug!`) that route to `tracing`
//!   when the `tracing` feature is enabled

pub mod cancellation_token;
mod logging;
pub mod panic;
pub mod scheduled_task;

pub use cancellation_token::CancellationToken;
pub use scheduled_task::ScheduledTask;

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
