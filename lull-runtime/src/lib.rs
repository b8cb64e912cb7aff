// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction used by `lull`.
//!
//! A [`Runtime`](runtime::Runtime) bundles a [`Timer`](timer::Timer) (sleep
//! futures and a clock) with a [`Scheduler`](scheduler::Scheduler), the
//! deferred-callback primitive that runs a closure after a delay and hands
//! back a cancelable [`TimerHandle`](scheduler::TimerHandle).
//!
//! Enable one or more runtimes through Cargo features:
//! - `runtime-tokio` (default) - [`TokioRuntime`](impls::tokio::TokioRuntime)
//! - `runtime-smol` - [`SmolRuntime`](impls::smol::SmolRuntime)

pub mod impls;
pub mod runtime;
pub mod scheduler;
pub mod timer;
