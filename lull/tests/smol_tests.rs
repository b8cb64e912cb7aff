// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-smol")]

use lull::Debounced;
use lull_runtime::impls::smol::{SmolRuntime, SmolScheduler};
use lull_runtime::scheduler::Scheduler;
use lull_test_utils::fixtures::query;
use lull_test_utils::CallRecorder;
use std::time::Duration;

fn smol_debounced<A, F>(delay: Duration, callback: F) -> Debounced<A, (), SmolRuntime>
where
    A: Send + 'static,
    F: FnMut(A) + Send + 'static,
{
    Debounced::with_scheduler(SmolScheduler::default(), delay, callback)
}

#[test]
fn test_smol_scheduler_is_always_available() {
    assert!(SmolScheduler::try_current().is_ok());
}

#[test]
fn test_smol_debounce_fires_last_call() {
    smol::block_on(async {
        // Arrange
        let recorder = CallRecorder::<String>::new();
        let debounced = smol_debounced(Duration::from_millis(50), recorder.sink());

        // Act
        debounced.call(query("s"));
        smol::Timer::after(Duration::from_millis(10)).await;
        debounced.call(query("sm"));
        smol::Timer::after(Duration::from_millis(10)).await;
        debounced.call(query("smol"));
        smol::Timer::after(Duration::from_millis(300)).await;

        // Assert
        assert_eq!(recorder.values(), vec!["smol"]);
        assert!(!debounced.is_pending());
    });
}

#[test]
fn test_smol_debounce_separate_windows() {
    smol::block_on(async {
        // Arrange
        let recorder = CallRecorder::<u32>::new();
        let debounced = smol_debounced(Duration::from_millis(20), recorder.sink());

        // Act
        debounced.call(1);
        smol::Timer::after(Duration::from_millis(200)).await;
        debounced.call(2);
        smol::Timer::after(Duration::from_millis(200)).await;

        // Assert
        assert_eq!(recorder.values(), vec![1, 2]);
    });
}
