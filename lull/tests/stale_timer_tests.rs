// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lull::Debounced;
use lull_test_utils::fixtures::{query, search_box_header, search_box_sidebar};
use lull_test_utils::{CallRecorder, ManualRuntime, ManualScheduler, SearchBox};
use std::time::Duration;

fn manual_debounced(
    scheduler: &ManualScheduler,
    recorder: &CallRecorder<&'static str>,
) -> Debounced<&'static str, (), ManualRuntime> {
    Debounced::with_scheduler(
        scheduler.clone(),
        Duration::from_millis(100),
        recorder.sink(),
    )
}

#[test]
fn test_elapsed_timer_of_replaced_call_does_not_fire() {
    // Arrange
    let scheduler = ManualScheduler::default();
    let recorder = CallRecorder::new();
    let debounced = manual_debounced(&scheduler, &recorder);

    // Act
    debounced.call("first");
    debounced.call("second");
    scheduler.run_all();

    // Assert
    assert_eq!(scheduler.cancellations(), 1);
    assert_eq!(recorder.values(), vec!["second"]);
    assert!(!debounced.is_pending());
}

#[test]
fn test_stale_timer_running_last_does_not_fire_again() {
    // Arrange
    let scheduler = ManualScheduler::default();
    let recorder = CallRecorder::new();
    let debounced = manual_debounced(&scheduler, &recorder);

    // Act
    debounced.call("first");
    debounced.call("second");
    debounced.call("third");
    scheduler.run_all_newest_first();

    // Assert
    assert_eq!(scheduler.cancellations(), 2);
    assert_eq!(recorder.values(), vec!["third"]);
}

#[test]
fn test_stale_timers_do_not_disturb_later_windows() {
    // Arrange
    let scheduler = ManualScheduler::default();
    let recorder = CallRecorder::new();
    let debounced = manual_debounced(&scheduler, &recorder);

    // Act
    debounced.call("first");
    scheduler.run_all();
    debounced.call("second");
    debounced.call("third");

    // Assert: the new window is pending until its closure runs
    assert!(debounced.is_pending());
    assert_eq!(scheduler.queued(), 2);
    scheduler.run_all();
    assert_eq!(recorder.values(), vec!["first", "third"]);
}

#[test]
fn test_stale_timer_does_not_deliver_old_receiver() {
    // Arrange
    let scheduler = ManualScheduler::default();
    let recorder = CallRecorder::<(Option<SearchBox>, String)>::new();
    let debounced = Debounced::<String, SearchBox, ManualRuntime>::with_receiver_and_scheduler(
        scheduler.clone(),
        Duration::from_millis(100),
        recorder.receiver_sink(),
    );

    // Act
    debounced.call_with(search_box_header(), query("ru"));
    debounced.call_with(search_box_sidebar(), query("rust"));
    scheduler.run_all();

    // Assert
    assert_eq!(
        recorder.values(),
        vec![(Some(search_box_sidebar()), query("rust"))]
    );
}
