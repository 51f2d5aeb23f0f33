//! Shared assertions for outcome integration tests.
//!
//! They check shape and payload together, so a failure message always says
//! which of the two went wrong.

use std::fmt::Debug;

use railway::{Outcome, ValueResult};

/// Assert that `outcome` is successful and carries `expected`.
#[track_caller]
pub fn assert_successful_with<V, E>(outcome: &ValueResult<V, E>, expected: &V)
where
    V: PartialEq + Debug,
    E: Debug,
{
    match outcome {
        ValueResult::Successful(value) => assert_eq!(value, expected, "unexpected value"),
        ValueResult::Failed(error) => panic!("expected a successful outcome, got error {error:?}"),
    }
}

/// Assert that `outcome` failed with `expected`.
#[track_caller]
pub fn assert_failed_with<O>(outcome: &O, expected: &O::Error)
where
    O: Outcome,
    O::Error: PartialEq + Debug,
{
    match outcome.failure() {
        Some(error) => assert_eq!(error, expected, "unexpected error"),
        None => panic!("expected a failed outcome, but it is successful"),
    }
}

/// Assert that the exclusivity of the two shapes holds for `outcome`.
#[track_caller]
pub fn assert_exclusive<O: Outcome>(outcome: &O) {
    assert_eq!(outcome.is_successful(), !outcome.has_failed());
    assert_eq!(
        outcome.error_iter().len(),
        usize::from(outcome.has_failed()),
        "error iterator length disagrees with the shape"
    );
}
