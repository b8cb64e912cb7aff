// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recorder::RecordedCall;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Sleeps until `ms` milliseconds after `origin`.
///
/// On a paused runtime this auto-advances the clock, running every timer due
/// before that point first.
pub async fn at_ms(origin: Instant, ms: u64) {
    sleep_until(origin + Duration::from_millis(ms)).await;
}

/// Asserts that `call` fired `expected_ms` after the recorder's origin.
///
/// The timer wheel rounds deadlines up to the next millisecond, so anything
/// inside `[expected, expected + 1ms)` is accepted.
pub fn assert_fired_at<T: Debug>(call: &RecordedCall<T>, expected_ms: u64) {
    let expected = Duration::from_millis(expected_ms);
    assert!(
        call.at >= expected && call.at < expected + Duration::from_millis(1),
        "expected {call:?} to fire at {expected:?}"
    );
}
