// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debouncing of callbacks over async runtimes.
//!
//! [`debounce`] wraps a callback so that it only runs once calls to the
//! wrapper have stopped for a fixed delay. Each call cancels the invocation
//! scheduled by the previous one; the callback finally receives the arguments
//! of the last call.
//!
//! # Overview
//!
//! - **[`debounce`]** / **[`debounce_ms`]** - Wrap a `FnMut(A)` callback
//! - **[`debounce_with_receiver`]** - Wrap a `FnMut(Option<C>, A)` callback that
//!   also gets the receiver the last call was made on
//! - **[`Debounced`]** - The wrapper; `Clone`, `Send` and `Sync`
//! - **[`Invocation`]** - Captured arguments and receiver of one call
//! - **[`delay_from_millis`]** - Validated conversion of raw millisecond values
//!
//! # Runtime Support
//!
//! Enable runtime-specific features in your `Cargo.toml`:
//! - `runtime-tokio` (default) - Timers are spawned on the current Tokio runtime
//! - `runtime-smol` - Timers are spawned on smol's global executor
//!
//! The `tracing` feature emits `debug`/`trace` events for scheduling,
//! cancellation and firing.
//!
//! # Example
//!
//! ```rust
//! use lull::debounce_ms;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> lull::Result<()> {
//! let saves = Arc::new(AtomicUsize::new(0));
//! let counter = saves.clone();
//!
//! let autosave = debounce_ms(
//!     move |_document: &'static str| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     },
//!     20,
//! )?;
//!
//! for _ in 0..10 {
//!     autosave.call("draft.md");
//! }
//!
//! tokio::time::sleep(Duration::from_millis(50)).await;
//! assert_eq!(saves.load(Ordering::SeqCst), 1);
//! # Ok(())
//! # }
//! ```

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("lull needs a runtime: enable `runtime-tokio` or `runtime-smol`");

mod debounce;
mod delay;
mod invocation;
mod logging;

pub use debounce::{debounce, debounce_ms, debounce_with_receiver, Debounced};
pub use delay::delay_from_millis;
pub use invocation::Invocation;
pub use lull_error::{LullError, Result};

/// Runtime used by the free-standing factories.
#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = lull_runtime::impls::tokio::TokioRuntime;

/// Runtime used by the free-standing factories.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultRuntime = lull_runtime::impls::smol::SmolRuntime;
