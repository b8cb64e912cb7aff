// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The deferred-callback primitive: run a closure once after a delay.

use core::fmt::Debug;
use core::time::Duration;
use lull_error::Result;

/// Schedules closures to run after a delay on an async runtime.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    /// Handle to a single scheduled closure.
    type Handle: TimerHandle;

    /// Bind to the runtime reachable from the calling context.
    ///
    /// # Errors
    /// Returns [`LullError::RuntimeUnavailable`](lull_error::LullError::RuntimeUnavailable)
    /// when there is no such runtime.
    fn try_current() -> Result<Self>;

    /// Run `task` once `delay` has elapsed.
    ///
    /// The closure is never invoked synchronously, not even for a zero delay.
    fn schedule<F>(&self, delay: Duration, task: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static;
}

/// Handle to a scheduled closure, returned by [`Scheduler::schedule`].
pub trait TimerHandle: Send + Debug + 'static {
    /// Stop the closure from running. If the timer has not elapsed yet the
    /// closure is dropped without being called.
    fn cancel(self);

    /// Give up the handle without stopping the task, used once the closure
    /// has started running.
    fn release(self);
}
