// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the tidbit workspace.
//!
//! Rate-limiter tests run on tokio's paused clock: `advance_ms` moves time
//! forward and lets spawned timer tasks run, and a [`CallRecorder`] stands in
//! for the wrapped target, remembering every invocation with its arguments
//! and the (virtual) instant it happened.
//!
//! ```rust
//! use tidbit_test_utils::{advance_ms, CallRecorder};
//! use tokio::time::Instant;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let origin = Instant::now();
//! let recorder = CallRecorder::new();
//! let target = recorder.callback();
//!
//! advance_ms(30).await;
//! target("ping");
//!
//! assert_eq!(recorder.args(), vec!["ping"]);
//! assert_eq!(recorder.offsets_ms(origin), vec![30]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod call_recorder;
pub mod helpers;

pub use call_recorder::{CallRecorder, RecordedCall};
pub use helpers::{advance_ms, settle};
