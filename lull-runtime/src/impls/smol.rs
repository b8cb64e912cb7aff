// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-smol")]
use std::time::Duration;

#[cfg(feature = "runtime-smol")]
use lull_error::Result;

#[cfg(feature = "runtime-smol")]
use crate::{
    runtime::Runtime,
    scheduler::{Scheduler, TimerHandle},
    timer::Timer,
};

#[cfg(feature = "runtime-smol")]
#[derive(Debug)]
pub struct SmolRuntime;

#[cfg(feature = "runtime-smol")]
impl Runtime for SmolRuntime {
    type Timer = SmolTimer;
    type Instant = std::time::Instant;
    type Scheduler = SmolScheduler;
}

#[cfg(feature = "runtime-smol")]
#[derive(Clone, Debug, Default)]
pub struct SmolTimer;

#[cfg(feature = "runtime-smol")]
pub struct SmolSleep {
    timer: async_io::Timer,
}

#[cfg(feature = "runtime-smol")]
impl SmolSleep {
    fn new(duration: Duration) -> Self {
        Self {
            timer: async_io::Timer::after(duration),
        }
    }
}

#[cfg(feature = "runtime-smol")]
impl core::future::Future for SmolSleep {
    type Output = ();

    fn poll(
        mut self: core::pin::Pin<&mut Self>,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Self::Output> {
        core::pin::Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

#[cfg(feature = "runtime-smol")]
impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    type Instant = std::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep::new(duration)
    }

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }
}

/// Spawns scheduled closures onto smol's global executor.
#[cfg(feature = "runtime-smol")]
#[derive(Clone, Debug, Default)]
pub struct SmolScheduler {
    timer: SmolTimer,
}

#[cfg(feature = "runtime-smol")]
impl Scheduler for SmolScheduler {
    type Handle = SmolTimerHandle;

    /// The global executor is always reachable, so this never fails.
    fn try_current() -> Result<Self> {
        Ok(Self::default())
    }

    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let timer = self.timer.clone();
        let spawned = smol::spawn(async move {
            timer.sleep_future(delay).await;
            task();
        });

        SmolTimerHandle { task: spawned }
    }
}

#[cfg(feature = "runtime-smol")]
#[derive(Debug)]
pub struct SmolTimerHandle {
    task: smol::Task<()>,
}

#[cfg(feature = "runtime-smol")]
impl TimerHandle for SmolTimerHandle {
    fn cancel(self) {
        // Dropping a smol task cancels it.
        drop(self.task);
    }

    fn release(self) {
        self.task.detach();
    }
}
