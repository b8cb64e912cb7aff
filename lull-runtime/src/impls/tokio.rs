// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::time::Duration;

#[cfg(feature = "runtime-tokio")]
use lull_error::{LullError, Result};

#[cfg(feature = "runtime-tokio")]
use crate::{
    runtime::Runtime,
    scheduler::{Scheduler, TimerHandle},
    timer::Timer,
};

#[cfg(feature = "runtime-tokio")]
#[derive(Debug)]
pub struct TokioRuntime;

#[cfg(feature = "runtime-tokio")]
impl Runtime for TokioRuntime {
    type Timer = TokioTimer;
    type Instant = tokio::time::Instant;
    type Scheduler = TokioScheduler;
}

/// Tokio timer. Reads the clock through `tokio::time::Instant` so that a
/// paused test runtime is honored.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

/// Spawns scheduled closures onto a captured Tokio runtime handle.
///
/// Capturing the handle lets a wrapper created inside a runtime be called
/// from plain threads afterwards.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
    timer: TokioTimer,
}

#[cfg(feature = "runtime-tokio")]
impl TokioScheduler {
    #[must_use]
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle,
            timer: TokioTimer,
        }
    }
}

#[cfg(feature = "runtime-tokio")]
impl Scheduler for TokioScheduler {
    type Handle = TokioTimerHandle;

    fn try_current() -> Result<Self> {
        tokio::runtime::Handle::try_current()
            .map(Self::new)
            .map_err(|err| LullError::runtime_unavailable(err.to_string()))
    }

    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let timer = self.timer.clone();
        // The sleep is created inside the task: building it needs a runtime
        // context, which the caller may not have.
        let join = self.handle.spawn(async move {
            timer.sleep_future(delay).await;
            task();
        });

        TokioTimerHandle { join }
    }
}

#[cfg(feature = "runtime-tokio")]
#[derive(Debug)]
pub struct TokioTimerHandle {
    join: tokio::task::JoinHandle<()>,
}

#[cfg(feature = "runtime-tokio")]
impl TimerHandle for TokioTimerHandle {
    fn cancel(self) {
        self.join.abort();
    }

    fn release(self) {
        // Dropping a JoinHandle detaches the task.
        drop(self.join);
    }
}
