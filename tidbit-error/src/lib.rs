// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the tidbit helper collection
//!
//! Every fallible tidbit operation returns [`Result`], whose error side is the
//! root [`TidbitError`]. The rate limiters only fail when the scheduler cannot
//! accept work; the helpers fail on inputs they cannot represent.
//!
//! # Examples
//!
//! ```
//! use tidbit_error::{TidbitError, Result};
//!
//! fn round(value: f64) -> Result<f64> {
//!     if !value.is_finite() {
//!         return Err(TidbitError::invalid_number(value));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(round(f64::NAN).is_err());
//! ```

/// Root error type for all tidbit operations
#[derive(Debug, thiserror::Error)]
pub enum TidbitError {
    /// No scheduler is available to accept a deferred invocation
    ///
    /// Raised by a debounced wrapper called outside of a running async runtime.
    #[error("Scheduler unavailable: {context}")]
    SchedulerUnavailable {
        /// Why the scheduler rejected the work
        context: String,
    },

    /// User-provided callback panicked
    ///
    /// A debounced target runs on a scheduler task; its panic is caught there
    /// and reported as this variant.
    #[error("User callback panicked: {context}")]
    CallbackPanic {
        /// Panic payload, when it was a string
        context: String,
    },

    /// Number cannot be rendered as a decimal string
    #[error("Invalid number: {value}")]
    InvalidNumber {
        /// The offending value
        value: f64,
    },

    /// Requested fraction digits are out of range
    #[error("Invalid precision {requested}: must be at most {max}")]
    InvalidPrecision {
        /// Number of fraction digits asked for
        requested: usize,
        /// Largest accepted value
        max: usize,
    },

    /// Value is not a key/value object
    #[error("Expected an object, found {found}")]
    NotAnObject {
        /// Kind of value actually found
        found: String,
    },

    /// Serializing a value into its generic representation failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error from user code
    ///
    /// Produced by [`IntoTidbitError`] and [`ResultExt`] when a caller folds
    /// the output of a wrapped target into a tidbit `Result`.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TidbitError {
    /// Create a scheduler unavailable error with the given context
    pub fn scheduler_unavailable(context: impl Into<String>) -> Self {
        Self::SchedulerUnavailable {
            context: context.into(),
        }
    }

    /// Create a callback panic error with the given context
    pub fn callback_panic(context: impl Into<String>) -> Self {
        Self::CallbackPanic {
            context: context.into(),
        }
    }

    #[must_use]
    pub const fn invalid_number(value: f64) -> Self {
        Self::InvalidNumber { value }
    }

    #[must_use]
    pub const fn invalid_precision(requested: usize, max: usize) -> Self {
        Self::InvalidPrecision { requested, max }
    }

    pub fn not_an_object(found: impl Into<String>) -> Self {
        Self::NotAnObject {
            found: found.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this is a recoverable error
    ///
    /// A recoverable error may succeed when retried later, e.g. once a runtime
    /// is running.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::SchedulerUnavailable { .. })
    }

    /// Check if this error indicates a permanent failure
    ///
    /// Retrying with the same input fails the same way.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber { .. }
                | Self::InvalidPrecision { .. }
                | Self::NotAnObject { .. }
                | Self::Serialization(_)
        )
    }
}

/// Specialized Result type for tidbit operations
///
/// # Examples
///
/// ```
/// use tidbit_error::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, TidbitError>;

/// Extension trait for converting foreign errors into `TidbitError`
pub trait IntoTidbitError {
    /// Convert this error into a `TidbitError`
    fn into_tidbit(self) -> TidbitError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoTidbitError for E {
    fn into_tidbit(self) -> TidbitError {
        TidbitError::user_error(self)
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// A `UserError` gets the context prepended to its message. Other variants
    /// are preserved unchanged.
    ///
    /// # Errors
    /// Returns `Err(TidbitError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(TidbitError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<TidbitError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            TidbitError::UserError(inner) => {
                TidbitError::UserError(format!("{}: {inner}", f()).into())
            }
            other => other,
        })
    }
}
