// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lull_error::{LullError, Result};

#[test]
fn test_error_display() {
    let err = LullError::runtime_unavailable("must be called from the context of a Tokio runtime");
    assert_eq!(
        err.to_string(),
        "No async runtime available: must be called from the context of a Tokio runtime"
    );

    let err = LullError::invalid_delay(-5.0);
    assert_eq!(
        err.to_string(),
        "Invalid delay: -5ms (must be finite and non-negative)"
    );
}

#[test]
fn test_error_constructors() {
    let err = LullError::runtime_unavailable("missing");
    assert!(matches!(err, LullError::RuntimeUnavailable { .. }));

    let err = LullError::invalid_delay(f64::INFINITY);
    assert!(matches!(err, LullError::InvalidDelay { millis } if millis.is_infinite()));
}

#[test]
fn test_is_environmental() {
    assert!(LullError::runtime_unavailable("missing").is_environmental());
    assert!(!LullError::invalid_delay(-1.0).is_environmental());
}

#[test]
fn test_result_alias_propagates_with_question_mark() {
    fn inner() -> Result<u32> {
        Err(LullError::invalid_delay(f64::NAN))
    }

    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    let err = outer().unwrap_err();
    assert!(matches!(err, LullError::InvalidDelay { millis } if millis.is_nan()));
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error + Send + Sync> =
        Box::new(LullError::runtime_unavailable("missing"));
    assert!(err.source().is_none());
    assert!(err.to_string().contains("missing"));
}
