//! Collapsing many outcomes into one.
//!
//! Both `sequence` functions walk their input once, keep successes and
//! failures in input order, and report every error rather than the first.

use crate::{Failures, ValueResult, VoidResult};

impl<V, E> ValueResult<V, E> {
    /// Partition `outcomes` into one outcome.
    ///
    /// Successful with every value when no input failed (an empty input
    /// included); otherwise failed with the errors of all failed inputs.
    /// Values of successful inputs are discarded in the failed case.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{Outcome, ValueResult};
    ///
    /// let all = ValueResult::sequence([ValueResult::<u8, &str>::ok(1), ValueResult::ok(2)]);
    /// assert_eq!(all.value(), &vec![1, 2]);
    ///
    /// let some = ValueResult::sequence([
    ///     ValueResult::fail("err1"),
    ///     ValueResult::ok(2),
    ///     ValueResult::fail("err2"),
    /// ]);
    /// assert_eq!(some.error(), &["err1", "err2"]);
    /// ```
    pub fn sequence<I>(outcomes: I) -> ValueResult<Vec<V>, Failures<E>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Self::Successful(value) => values.push(value),
                Self::Failed(error) => errors.push(error),
            }
        }
        let total = values.len() + errors.len();
        match Failures::try_from_vec(errors) {
            None => ValueResult::Successful(values),
            Some(failures) => {
                tracing::debug!(failures = failures.len(), total, "sequence collected failures");
                ValueResult::Failed(failures)
            }
        }
    }
}

impl<E> VoidResult<E> {
    /// Collapse `outcomes` into one: successful when every input succeeded,
    /// otherwise failed with the errors of all failed inputs in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{Outcome, VoidResult};
    ///
    /// let failed = VoidResult::sequence([VoidResult::fail("err1"), VoidResult::ok(), VoidResult::fail("err2")]);
    /// assert_eq!(failed.error(), &["err1", "err2"]);
    /// ```
    pub fn sequence<I>(outcomes: I) -> VoidResult<Failures<E>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut total = 0_usize;
        let errors: Vec<E> = outcomes
            .into_iter()
            .inspect(|_| total += 1)
            .filter_map(|outcome| match outcome {
                Self::Successful => None,
                Self::Failed(error) => Some(error),
            })
            .collect();
        match Failures::try_from_vec(errors) {
            None => VoidResult::Successful,
            Some(failures) => {
                tracing::debug!(failures = failures.len(), total, "sequence collected failures");
                VoidResult::Failed(failures)
            }
        }
    }
}

impl<V, E> FromIterator<ValueResult<V, E>> for ValueResult<Vec<V>, Failures<E>> {
    fn from_iter<I: IntoIterator<Item = ValueResult<V, E>>>(iter: I) -> Self {
        ValueResult::sequence(iter)
    }
}

impl<E> FromIterator<VoidResult<E>> for VoidResult<Failures<E>> {
    fn from_iter<I: IntoIterator<Item = VoidResult<E>>>(iter: I) -> Self {
        VoidResult::sequence(iter)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::{Failures, Outcome, ValueResult, VoidResult};

    #[rstest]
    fn empty_value_sequence_succeeds_with_no_values() {
        let sequenced = ValueResult::<u8, &str>::sequence(Vec::new());
        assert_eq!(sequenced, ValueResult::ok(Vec::new()));
    }

    #[rstest]
    fn empty_void_sequence_succeeds() {
        let sequenced = VoidResult::<&str>::sequence(Vec::new());
        assert!(sequenced.is_successful());
    }

    #[rstest]
    fn collect_matches_sequence() {
        let inputs = vec![
            ValueResult::<u8, &str>::fail("a"),
            ValueResult::ok(1),
            ValueResult::fail("b"),
        ];
        let collected: ValueResult<Vec<u8>, Failures<&str>> = inputs.clone().into_iter().collect();
        assert_eq!(collected, ValueResult::sequence(inputs));
        assert_eq!(collected.error(), &["a", "b"]);
    }

    #[rstest]
    fn void_collect_keeps_error_order() {
        let collected: VoidResult<Failures<u8>> = [3_u8, 1, 2]
            .into_iter()
            .map(VoidResult::fail)
            .chain(std::iter::once(VoidResult::ok()))
            .collect();
        assert_eq!(collected.error(), &[3, 1, 2]);
    }
}
