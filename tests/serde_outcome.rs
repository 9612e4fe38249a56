//! Serialization round-trips for outcomes, behind the `serde` feature.
#![cfg(feature = "serde")]

use augury::Outcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TimeoutIssue {
    after_ms: u64,
}

#[test]
fn value_outcome_round_trips_through_json() {
    let outcome: Outcome<i32, TimeoutIssue> = Outcome::Value(42);

    let json = serde_json::to_string(&outcome).expect("serializable");
    let back: Outcome<i32, TimeoutIssue> = serde_json::from_str(&json).expect("deserializable");

    assert_eq!(back, outcome);
}

#[test]
fn issue_outcome_keeps_its_payload() {
    let outcome: Outcome<i32, TimeoutIssue> = Outcome::Issue(TimeoutIssue { after_ms: 250 });

    let json = serde_json::to_string(&outcome).expect("serializable");
    assert!(json.contains("250"));

    let back: Outcome<i32, TimeoutIssue> = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, outcome);
}
