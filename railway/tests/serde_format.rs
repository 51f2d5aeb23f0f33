//! Serialized shape of outcomes when the `serde` feature is enabled.
#![cfg(feature = "serde")]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface encoding mistakes"
)]

use railway::{Failures, ValueResult, VoidResult};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn outcomes_are_externally_tagged() {
    let ok: ValueResult<u8, String> = ValueResult::ok(3);
    let failed: VoidResult<String> = VoidResult::fail("boom".to_owned());
    assert_eq!(serde_json::to_value(ok).expect("serialize"), json!({ "Successful": 3 }));
    assert_eq!(
        serde_json::to_value(failed).expect("serialize"),
        json!({ "Failed": "boom" })
    );
    assert_eq!(
        serde_json::to_value(VoidResult::<String>::ok()).expect("serialize"),
        json!("Successful")
    );
}

#[rstest]
fn failures_reject_empty_lists() {
    let parsed: Failures<String> = serde_json::from_value(json!(["a", "b"])).expect("non-empty");
    assert_eq!(parsed, ["a".to_owned(), "b".to_owned()]);
    let err = serde_json::from_value::<Failures<String>>(json!([])).expect_err("empty list");
    assert!(err.to_string().contains("a failure aggregate needs at least one error"));
}
