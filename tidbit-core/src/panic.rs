// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversion of caught panics into [`TidbitError::CallbackPanic`].

use std::any::Any;
use tidbit_error::TidbitError;

/// Extracts the message of a panic payload, if it carried one.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Wraps a caught panic payload into a `CallbackPanic` error.
pub fn into_callback_panic(payload: Box<dyn Any + Send>) -> TidbitError {
    TidbitError::callback_panic(panic_message(payload.as_ref()))
}
