//! Serde integration tests (requires the `serde` feature).
//!
//! Outcomes are value objects, so serialization must capture exactly the
//! classification plus its content and round-trip without loss.

#![cfg(feature = "serde")]

use railcar::outcome::{Outcome, Status, ValidationError};
use rstest::rstest;

#[rstest]
fn success_round_trips() {
    let outcome = Outcome::success(42);
    let json = serde_json::to_string(&outcome).expect("serialize");
    let back: Outcome<i32> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, outcome);
}

#[rstest]
fn error_round_trips_with_correlation_id() {
    let outcome: Outcome<String> = Outcome::error_with_correlation_id(["boom"], "req-1");
    let json = serde_json::to_string(&outcome).expect("serialize");
    let back: Outcome<String> = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, outcome);
    assert_eq!(back.correlation_id(), Some("req-1"));
}

#[rstest]
fn invalid_round_trips_with_validation_errors() {
    let outcome: Outcome<i32> = Outcome::invalid([
        ValidationError::new("name", "must not be empty"),
        ValidationError::new("age", "must be positive"),
    ]);
    let json = serde_json::to_string(&outcome).expect("serialize");
    let back: Outcome<i32> = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, outcome);
    assert_eq!(back.validation_errors().len(), 2);
}

#[rstest]
fn success_serializes_as_a_tagged_variant() {
    let json = serde_json::to_value(Outcome::success(5)).expect("serialize");
    assert_eq!(json, serde_json::json!({ "Success": 5 }));
}

#[rstest]
fn no_content_serializes_as_a_bare_tag() {
    let json = serde_json::to_value(Outcome::<i32>::no_content()).expect("serialize");
    assert_eq!(json, serde_json::json!("NoContent"));
}

#[rstest]
fn status_round_trips() {
    for status in [
        Status::Success,
        Status::NotFound,
        Status::Unauthorized,
        Status::Forbidden,
        Status::Invalid,
        Status::Error,
        Status::Conflict,
        Status::CriticalError,
        Status::Unavailable,
        Status::NoContent,
    ] {
        let json = serde_json::to_string(&status).expect("serialize");
        let back: Status = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, status);
    }
}
