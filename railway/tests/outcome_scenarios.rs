//! Behavioural scenarios for the outcome algebra, bound with `rstest-bdd`.
//!
//! The feature file under `tests/features` drives the steps below; every
//! step shares one [`AlgebraState`] per scenario.
#![expect(
    clippy::expect_used,
    reason = "steps panic to surface scenario wiring mistakes"
)]

mod common;

use common::{assert_exclusive, assert_failed_with, assert_successful_with};
use railway::{Failures, ValueResult};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenarios, then, when};
use test_helpers::CallCounter;

type Step = ValueResult<u8, String>;

/// Scenario state shared between the algebra steps.
#[derive(Debug, Default, ScenarioState)]
struct AlgebraState {
    outcome: Slot<Step>,
    inputs: Slot<Vec<Step>>,
    sequenced: Slot<ValueResult<Vec<u8>, Failures<String>>>,
    calls: Slot<usize>,
}

#[fixture]
fn algebra_state() -> AlgebraState {
    AlgebraState::default()
}

fn parse_outcome(token: &str) -> Step {
    match token.split_once(':') {
        Some(("ok", value)) => ValueResult::ok(value.parse().expect("numeric value")),
        Some(("err", error)) => ValueResult::fail(error.to_owned()),
        _ => panic!("unrecognised outcome token {token:?}"),
    }
}

#[given("a successful outcome holding {value:u8}")]
fn successful_outcome(algebra_state: &AlgebraState, value: u8) {
    algebra_state.outcome.set(ValueResult::ok(value));
}

#[given("a failed outcome with error {error}")]
fn failed_outcome(algebra_state: &AlgebraState, error: String) {
    algebra_state.outcome.set(ValueResult::fail(error));
}

#[given("the outcomes {tokens}")]
fn outcomes(algebra_state: &AlgebraState, tokens: String) {
    algebra_state
        .inputs
        .set(tokens.split_whitespace().map(parse_outcome).collect());
}

#[when("the value is incremented")]
fn increment(algebra_state: &AlgebraState) {
    let outcome = algebra_state.outcome.take().expect("an outcome was given");
    let mapper = CallCounter::new();
    let mapped = outcome.map(|value| {
        mapper.hit();
        value + 1
    });
    algebra_state.calls.set(mapper.count());
    algebra_state.outcome.set(mapped);
}

#[when("it is guarded by {flag} with error {error}")]
fn guard(algebra_state: &AlgebraState, flag: bool, error: String) {
    let outcome = algebra_state.outcome.take().expect("an outcome was given");
    algebra_state.outcome.set(outcome.ensure(flag, error));
}

#[when("the outcomes are sequenced")]
fn sequence(algebra_state: &AlgebraState) {
    let inputs = algebra_state.inputs.take().expect("outcomes were given");
    algebra_state.sequenced.set(ValueResult::sequence(inputs));
}

#[then("the outcome succeeded with {expected:u8}")]
fn succeeded_with(algebra_state: &AlgebraState, expected: u8) {
    let outcome = algebra_state.outcome.take().expect("an outcome was produced");
    assert_exclusive(&outcome);
    assert_successful_with(&outcome, &expected);
}

#[then("the outcome failed with {expected}")]
fn failed_with(algebra_state: &AlgebraState, expected: String) {
    let outcome = algebra_state.outcome.take().expect("an outcome was produced");
    assert_exclusive(&outcome);
    assert_failed_with(&outcome, &expected);
}

#[then("the callback ran {expected} times")]
fn callback_ran(algebra_state: &AlgebraState, expected: usize) {
    assert_eq!(algebra_state.calls.get(), Some(expected));
}

#[then("the sequence failed with {expected}")]
fn sequence_failed_with(algebra_state: &AlgebraState, expected: String) {
    let sequenced = algebra_state.sequenced.take().expect("a sequence was produced");
    let errors: Vec<String> = expected.split_whitespace().map(str::to_owned).collect();
    let expected_failures = Failures::try_from(errors).expect("at least one error expected");
    assert_failed_with(&sequenced, &expected_failures);
}

#[then("the sequence succeeded with {expected}")]
fn sequence_succeeded_with(algebra_state: &AlgebraState, expected: String) {
    let sequenced = algebra_state.sequenced.take().expect("a sequence was produced");
    let values: Vec<u8> = expected
        .split_whitespace()
        .map(|value| value.parse().expect("numeric value"))
        .collect();
    assert_successful_with(&sequenced, &values);
}

scenarios!(
    "tests/features/outcome_algebra.feature",
    fixtures = [algebra_state: AlgebraState]
);
