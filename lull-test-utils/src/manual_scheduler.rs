// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A scheduler driven by hand.
//!
//! Scheduled closures are queued instead of timed, and `cancel` only counts
//! the cancellation: the closure stays queued, like a timer that had already
//! elapsed when it was cancelled. Tests then decide when and in which order
//! the queued closures run.

use lull_error::Result;
use lull_runtime::impls::tokio::TokioTimer;
use lull_runtime::runtime::Runtime;
use lull_runtime::scheduler::{Scheduler, TimerHandle};
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

type Task = Box<dyn FnOnce() + Send>;

/// Runtime pairing [`ManualScheduler`] with the Tokio clock.
#[derive(Debug)]
pub struct ManualRuntime;

impl Runtime for ManualRuntime {
    type Timer = TokioTimer;
    type Instant = tokio::time::Instant;
    type Scheduler = ManualScheduler;
}

#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Arc<Mutex<Vec<Task>>>,
    cancellations: Arc<AtomicUsize>,
}

impl ManualScheduler {
    /// Number of closures waiting to run.
    pub fn queued(&self) -> usize {
        self.queue.lock().len()
    }

    /// Number of `cancel` calls seen so far.
    pub fn cancellations(&self) -> usize {
        self.cancellations.load(Ordering::SeqCst)
    }

    /// Runs every queued closure in scheduling order, cancelled ones included.
    pub fn run_all(&self) {
        let tasks = std::mem::take(&mut *self.queue.lock());
        for task in tasks {
            task();
        }
    }

    /// Runs every queued closure, newest first.
    pub fn run_all_newest_first(&self) {
        let tasks = std::mem::take(&mut *self.queue.lock());
        for task in tasks.into_iter().rev() {
            task();
        }
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("queued", &self.queued())
            .field("cancellations", &self.cancellations())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimerHandle;

    fn try_current() -> Result<Self> {
        Ok(Self::default())
    }

    fn schedule<F>(&self, _delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        self.queue.lock().push(Box::new(task));
        ManualTimerHandle {
            cancellations: Arc::clone(&self.cancellations),
        }
    }
}

#[derive(Debug)]
pub struct ManualTimerHandle {
    cancellations: Arc<AtomicUsize>,
}

impl TimerHandle for ManualTimerHandle {
    fn cancel(self) {
        self.cancellations.fetch_add(1, Ordering::SeqCst);
    }

    fn release(self) {}
}
