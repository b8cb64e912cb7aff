// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the lull debouncing library
//!
//! Debouncing itself cannot fail: a wrapper call only cancels and reschedules a
//! timer. The errors defined here cover the two places where setup can go wrong,
//! binding to an async runtime and turning a raw millisecond value into a delay.
//!
//! # Examples
//!
//! ```
//! use lull_error::{LullError, Result};
//!
//! fn bind() -> Result<()> {
//!     Err(LullError::runtime_unavailable("no tokio reactor running"))
//! }
//!
//! assert!(bind().is_err());
//! ```

/// Root error type for all lull operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LullError {
    /// No async runtime is reachable from the calling context
    ///
    /// Raised when a debounced wrapper is created with the default scheduler
    /// outside of a running runtime, so there is nothing to schedule timers on.
    #[error("No async runtime available: {context}")]
    RuntimeUnavailable {
        /// What the runtime lookup reported
        context: String,
    },

    /// A millisecond delay that cannot be represented as a `Duration`
    ///
    /// Negative, NaN and infinite values are rejected instead of being
    /// coerced to zero.
    #[error("Invalid delay: {millis}ms (must be finite and non-negative)")]
    InvalidDelay {
        /// The rejected value
        millis: f64,
    },
}

impl LullError {
    /// Create a runtime-unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }

    /// Create an invalid-delay error for the given millisecond value
    #[must_use]
    pub const fn invalid_delay(millis: f64) -> Self {
        Self::InvalidDelay { millis }
    }

    /// Check if this error was caused by the environment rather than the input
    ///
    /// Retrying from inside a runtime succeeds; an invalid delay never will.
    #[must_use]
    pub const fn is_environmental(&self) -> bool {
        matches!(self, Self::RuntimeUnavailable { .. })
    }
}

/// Specialized Result type for lull operations
///
/// ```
/// use lull_error::Result;
///
/// fn delay_ms() -> Result<u64> {
///     Ok(250)
/// }
/// ```
pub type Result<T, E = LullError> = std::result::Result<T, E>;
