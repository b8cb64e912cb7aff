// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing debounce of a callback.
//!
//! A [`Debounced`] wrapper delays every call until `delay` has elapsed with no
//! further calls:
//! - When a call arrives, any pending invocation is cancelled and a new one is
//!   scheduled
//! - The arguments (and receiver) of the call overwrite the captured ones
//! - When the timer elapses, the callback runs once with the latest capture
//!
//! The wrapper holds at most one scheduled invocation at a time. Clones share
//! that invocation, so cloning a wrapper does not create a second debounce
//! window.

use crate::invocation::Invocation;
use crate::logging::{debug, trace};
use crate::DefaultRuntime;
use core::fmt;
use core::time::Duration;
use lull_error::Result;
use lull_runtime::runtime::Runtime;
use lull_runtime::scheduler::{Scheduler, TimerHandle};
use lull_runtime::timer::Timer;
use parking_lot::Mutex;
use std::sync::Arc;

type Callback<A, C> = Box<dyn FnMut(Invocation<A, C>) + Send>;

/// Creates a debounced wrapper around `callback` on the current runtime.
///
/// Every [`Debounced::call`] restarts the `delay` window; `callback` runs once
/// the window elapses, with the arguments of the last call.
///
/// # Errors
/// Returns [`LullError::RuntimeUnavailable`](lull_error::LullError::RuntimeUnavailable)
/// when called outside of the default runtime.
///
/// # Example
///
/// ```rust
/// use lull::debounce;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> lull::Result<()> {
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
///
/// let search = debounce(
///     move |query: String| sink.lock().unwrap().push(query),
///     Duration::from_millis(20),
/// )?;
///
/// search.call("r".to_string());
/// search.call("ru".to_string());
/// search.call("rust".to_string());
///
/// tokio::time::sleep(Duration::from_millis(50)).await;
/// assert_eq!(*seen.lock().unwrap(), vec!["rust".to_string()]);
/// # Ok(())
/// # }
/// ```
pub fn debounce<A, F>(callback: F, delay: Duration) -> Result<Debounced<A>>
where
    A: Send + 'static,
    F: FnMut(A) + Send + 'static,
{
    let scheduler = <<DefaultRuntime as Runtime>::Scheduler as Scheduler>::try_current()?;
    Ok(Debounced::with_scheduler(scheduler, delay, callback))
}

/// Same as [`debounce`], with the delay given in whole milliseconds.
///
/// # Errors
/// See [`debounce`].
pub fn debounce_ms<A, F>(callback: F, delay_ms: u64) -> Result<Debounced<A>>
where
    A: Send + 'static,
    F: FnMut(A) + Send + 'static,
{
    debounce(callback, Duration::from_millis(delay_ms))
}

/// Creates a debounced wrapper whose callback also receives the receiver of
/// the call that fired.
///
/// Calls made with [`Debounced::call_with`] forward `Some(receiver)`; plain
/// [`Debounced::call`]s forward `None`. Like the arguments, only the receiver
/// of the last call in a window is delivered.
///
/// # Errors
/// See [`debounce`].
pub fn debounce_with_receiver<A, C, F>(callback: F, delay: Duration) -> Result<Debounced<A, C>>
where
    A: Send + 'static,
    C: Send + 'static,
    F: FnMut(Option<C>, A) + Send + 'static,
{
    let scheduler = <<DefaultRuntime as Runtime>::Scheduler as Scheduler>::try_current()?;
    Ok(Debounced::with_receiver_and_scheduler(
        scheduler, delay, callback,
    ))
}

/// A debounced callable returned by [`debounce`] and friends.
///
/// States are `IDLE` (nothing scheduled) and `PENDING` (one invocation
/// scheduled). Every call moves the wrapper to `PENDING`, replacing whatever
/// was scheduled before; the timer firing moves it back to `IDLE`. There is no
/// terminal state.
///
/// # Blocking
///
/// The callback runs on a runtime worker under a blocking `parking_lot`
/// mutex, so invocations of one wrapper never overlap. A slow callback
/// therefore blocks any other worker thread that fires the same wrapper
/// meanwhile. Keep the callback short, or hand long work off with
/// `tokio::spawn` / `tokio::task::spawn_blocking` from inside it.
pub struct Debounced<A, C = (), R: Runtime = DefaultRuntime> {
    shared: Arc<Shared<A, C, R>>,
}

struct Shared<A, C, R: Runtime> {
    delay: Duration,
    scheduler: R::Scheduler,
    timer: R::Timer,
    state: Mutex<State<A, C, R>>,
    // Separate from `state` so the callback can call the wrapper again.
    callback: Mutex<Callback<A, C>>,
}

struct State<A, C, R: Runtime> {
    generation: u64,
    pending: Option<Pending<R>>,
    captured: Option<Invocation<A, C>>,
}

struct Pending<R: Runtime> {
    handle: <R::Scheduler as Scheduler>::Handle,
    deadline: R::Instant,
}

impl<A, R> Debounced<A, (), R>
where
    A: Send + 'static,
    R: Runtime,
{
    /// Creates a debounced wrapper that schedules on `scheduler`.
    pub fn with_scheduler<F>(scheduler: R::Scheduler, delay: Duration, mut callback: F) -> Self
    where
        F: FnMut(A) + Send + 'static,
    {
        Self::from_parts(
            scheduler,
            delay,
            Box::new(move |invocation: Invocation<A, ()>| callback(invocation.args)),
        )
    }
}

impl<A, C, R> Debounced<A, C, R>
where
    A: Send + 'static,
    C: Send + 'static,
    R: Runtime,
{
    /// Creates a receiver-aware debounced wrapper that schedules on `scheduler`.
    pub fn with_receiver_and_scheduler<F>(
        scheduler: R::Scheduler,
        delay: Duration,
        mut callback: F,
    ) -> Self
    where
        F: FnMut(Option<C>, A) + Send + 'static,
    {
        Self::from_parts(
            scheduler,
            delay,
            Box::new(move |invocation: Invocation<A, C>| {
                let (receiver, args) = invocation.into_parts();
                callback(receiver, args);
            }),
        )
    }

    fn from_parts(scheduler: R::Scheduler, delay: Duration, callback: Callback<A, C>) -> Self {
        Self {
            shared: Arc::new(Shared {
                delay,
                scheduler,
                timer: R::Timer::default(),
                state: Mutex::new(State {
                    generation: 0,
                    pending: None,
                    captured: None,
                }),
                callback: Mutex::new(callback),
            }),
        }
    }

    /// Restarts the debounce window with `args`.
    ///
    /// Never invokes the callback synchronously, even with a zero delay.
    pub fn call(&self, args: A) {
        self.submit(Invocation::unbound(args));
    }

    /// Restarts the debounce window with `args`, made on `receiver`.
    pub fn call_with(&self, receiver: C, args: A) {
        self.submit(Invocation::bound(receiver, args));
    }

    /// Whether an invocation is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().pending.is_some()
    }

    /// The instant at which the scheduled invocation is due, if any.
    pub fn deadline(&self) -> Option<R::Instant> {
        self.shared
            .state
            .lock()
            .pending
            .as_ref()
            .map(|pending| pending.deadline)
    }

    /// The fixed quiet period set at creation.
    pub fn delay(&self) -> Duration {
        self.shared.delay
    }

    fn submit(&self, invocation: Invocation<A, C>) {
        let shared = &self.shared;
        let mut state = shared.state.lock();

        if let Some(previous) = state.pending.take() {
            trace!(
                "debounce: cancelling invocation of generation {}",
                state.generation
            );
            previous.handle.cancel();
        }

        state.generation = state.generation.wrapping_add(1);
        state.captured = Some(invocation);

        let generation = state.generation;
        let target = Arc::clone(shared);
        let handle = shared
            .scheduler
            .schedule(shared.delay, move || target.fire(generation));
        let deadline = shared.timer.now() + shared.delay;

        state.pending = Some(Pending { handle, deadline });
        trace!(
            "debounce: scheduled generation {} in {:?}",
            generation,
            shared.delay
        );
    }
}

impl<A, C, R> Shared<A, C, R>
where
    R: Runtime,
{
    fn fire(&self, generation: u64) {
        let invocation = {
            let mut state = self.state.lock();

            // A newer call got the lock first; its own timer will fire.
            if state.generation != generation {
                trace!("debounce: dropping stale timer of generation {}", generation);
                return;
            }

            if let Some(pending) = state.pending.take() {
                pending.handle.release();
            }
            state.captured.take()
        };

        if let Some(invocation) = invocation {
            debug!("debounce: window of generation {} settled", generation);
            let mut callback = self.callback.lock();
            (*callback)(invocation);
        }
    }
}

impl<A, C, R: Runtime> Clone for Debounced<A, C, R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A, C, R: Runtime> fmt::Debug for Debounced<A, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Debounced")
            .field("delay", &self.shared.delay)
            .field("generation", &state.generation)
            .field(
                "deadline",
                &state.pending.as_ref().map(|pending| pending.deadline),
            )
            .finish()
    }
}
