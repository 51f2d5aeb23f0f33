//! Unit tests for contract-violation messages.

use rstest::rstest;

use super::{Payload, RailwayError, State};

#[rstest]
#[case(State::Failed, Payload::Value, "failed outcome has no value")]
#[case(State::Successful, Payload::Error, "successful outcome has no error")]
fn invalid_state_names_shape_and_payload(
    #[case] state: State,
    #[case] requested: Payload,
    #[case] expected: &str,
) {
    assert_eq!(RailwayError::invalid_state(state, requested).to_string(), expected);
}

#[test]
fn illegal_cast_names_both_types() {
    let err = RailwayError::illegal_cast::<u16, bool>(Payload::Value);
    assert_eq!(
        err.to_string(),
        "cannot cast the value of type 'u16' to 'bool'"
    );
}

#[test]
fn empty_failures_explains_the_requirement() {
    assert_eq!(
        RailwayError::EmptyFailures.to_string(),
        "a failure aggregate needs at least one error"
    );
}

#[test]
fn errors_are_std_errors() {
    let err: Box<dyn std::error::Error> =
        Box::new(RailwayError::invalid_state(State::Failed, Payload::Value));
    assert!(err.source().is_none());
}
