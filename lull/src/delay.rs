// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use lull_error::{LullError, Result};

/// Converts a floating-point millisecond value into a delay.
///
/// Only finite, non-negative values are accepted. Nothing is coerced: a NaN or
/// negative delay is an error rather than an implicit zero.
///
/// # Errors
/// Returns [`LullError::InvalidDelay`] for negative, NaN, infinite or
/// unrepresentably large values.
///
/// # Example
///
/// ```
/// use lull::delay_from_millis;
/// use std::time::Duration;
///
/// assert_eq!(delay_from_millis(250.0).unwrap(), Duration::from_millis(250));
/// assert!(delay_from_millis(-1.0).is_err());
/// ```
pub fn delay_from_millis(millis: f64) -> Result<Duration> {
    if !millis.is_finite() || millis < 0.0 {
        return Err(LullError::invalid_delay(millis));
    }

    Duration::try_from_secs_f64(millis / 1000.0).map_err(|_| LullError::invalid_delay(millis))
}
