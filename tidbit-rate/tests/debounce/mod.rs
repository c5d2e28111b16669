// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod debounce_error_tests;
#[cfg(feature = "tracing")]
pub mod debounce_logging_tests;
pub mod debounce_multi_threaded_tests;
