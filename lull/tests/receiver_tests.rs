// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use lull::{debounce_with_receiver, Invocation};
use lull_test_utils::fixtures::{query, search_box_header, search_box_sidebar};
use lull_test_utils::{assert_fired_at, at_ms, CallRecorder, SearchBox};
use std::time::Duration;

type Recorded = (Option<SearchBox>, String);

#[tokio::test(start_paused = true)]
async fn test_receiver_is_forwarded_with_arguments() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<Recorded>::new();
    let origin = recorder.origin();
    let debounced = debounce_with_receiver(recorder.receiver_sink(), Duration::from_millis(100))?;

    // Act
    debounced.call_with(search_box_header(), query("rust"));
    at_ms(origin, 200).await;

    // Assert
    let calls = recorder.calls();
    assert_eq!(
        recorder.values(),
        vec![(Some(search_box_header()), query("rust"))]
    );
    assert_fired_at(&calls[0], 100);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_last_receiver_in_window_wins() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<Recorded>::new();
    let origin = recorder.origin();
    let debounced = debounce_with_receiver(recorder.receiver_sink(), Duration::from_millis(100))?;

    // Act
    debounced.call_with(search_box_header(), query("ru"));
    at_ms(origin, 30).await;
    debounced.call_with(search_box_sidebar(), query("rus"));
    at_ms(origin, 300).await;

    // Assert
    let calls = recorder.calls();
    assert_eq!(
        recorder.values(),
        vec![(Some(search_box_sidebar()), query("rus"))]
    );
    assert_fired_at(&calls[0], 130);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_plain_call_overwrites_bound_receiver() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<Recorded>::new();
    let origin = recorder.origin();
    let debounced = debounce_with_receiver(recorder.receiver_sink(), Duration::from_millis(100))?;

    // Act
    debounced.call_with(search_box_header(), query("a"));
    debounced.call(query("b"));
    at_ms(origin, 200).await;

    // Assert
    assert_eq!(recorder.values(), vec![(None, query("b"))]);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_receiver_per_window() -> anyhow::Result<()> {
    // Arrange
    let recorder = CallRecorder::<Recorded>::new();
    let origin = recorder.origin();
    let debounced = debounce_with_receiver(recorder.receiver_sink(), Duration::from_millis(50))?;

    // Act
    debounced.call_with(search_box_header(), query("first"));
    at_ms(origin, 100).await;
    debounced.call_with(search_box_sidebar(), query("second"));
    at_ms(origin, 200).await;

    // Assert
    assert_eq!(
        recorder.values(),
        vec![
            (Some(search_box_header()), query("first")),
            (Some(search_box_sidebar()), query("second")),
        ]
    );

    Ok(())
}

#[test]
fn test_invocation_parts() {
    let bound = Invocation::bound(search_box_header(), query("q"));
    assert_eq!(bound.receiver, Some(search_box_header()));
    assert_eq!(bound.into_parts(), (Some(search_box_header()), query("q")));

    let unbound: Invocation<String, SearchBox> = Invocation::unbound(query("q"));
    assert_eq!(unbound.receiver, None);
    assert_eq!(unbound.args, "q");
}
