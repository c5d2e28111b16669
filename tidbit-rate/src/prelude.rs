// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use crate::{
    debounce_with_scheduler, throttle_with_timer, DebounceConfig, DebounceFnExt, Debounced, ThrottleConfig,
    ThrottleFnExt, Throttled,
};

#[cfg(feature = "runtime-tokio")]
pub use crate::{debounce, throttle};
