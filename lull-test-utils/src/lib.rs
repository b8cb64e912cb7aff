// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the lull debouncing library.
//!
//! This crate is meant for development and testing only.
//!
//! # Key Types
//!
//! ## `CallRecorder<T>`
//!
//! Records every value a debounced callback is invoked with, together with
//! the time elapsed since the recorder was created:
//!
//! ```rust
//! use lull_test_utils::CallRecorder;
//!
//! let recorder = CallRecorder::new();
//! let mut sink = recorder.sink();
//! sink(42);
//!
//! assert_eq!(recorder.values(), vec![42]);
//! ```
//!
//! ## Fixtures
//!
//! - `SearchBox` - A receiver a debounced search handler is bound to
//! - `Resize` - Window geometry, a typical multi-argument payload
//!
//! # Module Organization
//!
//! - `recorder` - `CallRecorder<T>` and `RecordedCall<T>`
//! - `fixtures` - Receiver and argument fixtures
//! - `helpers` - Clock and assertion helpers for paused Tokio runtimes
//! - `manual_scheduler` - `ManualScheduler`, a scheduler whose closures run on demand

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod fixtures;
pub mod helpers;
pub mod manual_scheduler;
pub mod recorder;

pub use fixtures::{Resize, SearchBox};
pub use helpers::{assert_fired_at, at_ms};
pub use manual_scheduler::{ManualRuntime, ManualScheduler};
pub use recorder::{CallRecorder, RecordedCall};
