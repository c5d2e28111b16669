// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::time::Instant;

/// One observed invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall<A> {
    pub args: A,
    pub at: Instant,
}

/// Shared log of invocations. Clones observe the same log.
#[derive(Debug)]
pub struct CallRecorder<A> {
    calls: Arc<Mutex<Vec<RecordedCall<A>>>>,
}

impl<A> Clone for CallRecorder<A> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<A> Default for CallRecorder<A> {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<A> CallRecorder<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `args` at the current tokio instant.
    pub fn record(&self, args: A) {
        self.calls.lock().push(RecordedCall {
            args,
            at: Instant::now(),
        });
    }

    /// A target function that records every call.
    pub fn callback(&self) -> impl Fn(A) + Send + Sync + 'static
    where
        A: Send + 'static,
    {
        let recorder = self.clone();
        move |args| recorder.record(args)
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Milliseconds between `origin` and each recorded call, in call order.
    pub fn offsets_ms(&self, origin: Instant) -> Vec<u64> {
        self.calls
            .lock()
            .iter()
            .map(|call| {
                let offset = call.at.saturating_duration_since(origin).as_millis();
                u64::try_from(offset).unwrap_or(u64::MAX)
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<A: Clone> CallRecorder<A> {
    /// Arguments of every recorded call, in call order.
    pub fn args(&self) -> Vec<A> {
        self.calls.lock().iter().map(|call| call.args.clone()).collect()
    }

    pub fn calls(&self) -> Vec<RecordedCall<A>> {
        self.calls.lock().clone()
    }
}
