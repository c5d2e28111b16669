// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tidbit_rate::debounce;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Subscriber that keeps the message of every event.
#[derive(Clone, Default)]
struct MessageLog {
    messages: Arc<Mutex<Vec<String>>>,
}

struct MessageVisitor<'a>(&'a mut Vec<String>);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0.push(format!("{value:?}"));
        }
    }
}

impl Subscriber for MessageLog {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        event.record(&mut MessageVisitor(&mut self.messages.lock()));
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[test]
fn test_reschedule_and_supersede_are_logged() -> anyhow::Result<()> {
    // Arrange
    let log = MessageLog::default();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()?;

    // Act
    tracing::subscriber::with_default(log.clone(), || {
        runtime.block_on(async {
            let debounced = debounce(|_: u32| (), Duration::from_millis(10));
            debounced.call(1)?;
            debounced.call(2)?;
            Ok::<_, tidbit_error::TidbitError>(())
        })
    })?;

    // Assert
    let messages = log.messages.lock().clone();
    let scheduled = messages.iter().filter(|m| m.contains("scheduled")).count();
    let superseded = messages.iter().filter(|m| m.contains("superseded")).count();
    assert_eq!(scheduled, 2);
    assert_eq!(superseded, 1);
    Ok(())
}
