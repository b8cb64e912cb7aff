// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// One recorded callback invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall<T> {
    /// Time since the recorder's origin
    pub at: Duration,
    pub value: T,
}

/// Shared log of callback invocations.
///
/// The origin is taken from `tokio::time::Instant`, so on a paused runtime
/// `at` is exact virtual time.
#[derive(Debug)]
pub struct CallRecorder<T> {
    origin: Instant,
    calls: Arc<Mutex<Vec<RecordedCall<T>>>>,
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            origin: self.origin,
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CallRecorder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The instant every `RecordedCall::at` is measured from.
    pub const fn origin(&self) -> Instant {
        self.origin
    }

    pub fn record(&self, value: T) {
        let at = self.origin.elapsed();
        self.calls.lock().push(RecordedCall { at, value });
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl<T: Send + 'static> CallRecorder<T> {
    /// A callback that records each value it receives.
    pub fn sink(&self) -> impl FnMut(T) + Send + 'static {
        let recorder = self.clone();
        move |value| recorder.record(value)
    }
}

impl<C, A> CallRecorder<(Option<C>, A)>
where
    C: Send + 'static,
    A: Send + 'static,
{
    /// A receiver-aware callback that records `(receiver, args)` pairs.
    pub fn receiver_sink(&self) -> impl FnMut(Option<C>, A) + Send + 'static {
        let recorder = self.clone();
        move |receiver, args| recorder.record((receiver, args))
    }
}

impl<T: Clone> CallRecorder<T> {
    pub fn calls(&self) -> Vec<RecordedCall<T>> {
        self.calls.lock().clone()
    }

    pub fn values(&self) -> Vec<T> {
        self.calls
            .lock()
            .iter()
            .map(|call| call.value.clone())
            .collect()
    }
}
