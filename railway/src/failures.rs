//! Non-empty, ordered collection of the errors gathered by `sequence`.

use std::{error::Error, fmt, ops::Deref};

use crate::{RailwayError, RailwayResult};

/// Errors of every failed outcome fed to [`crate::ValueResult::sequence`] or
/// [`crate::VoidResult::sequence`], in input order.
///
/// A `Failures` is never empty and exposes no mutable access.
///
/// # Examples
///
/// ```
/// use railway::Failures;
///
/// let failures = Failures::try_from_vec(vec!["err1", "err2"]).expect("non-empty");
/// assert_eq!(failures.len(), 2);
/// assert_eq!(failures.first(), Some(&"err1"));
/// assert_eq!(failures.to_string(), "1: err1\n2: err2");
/// assert!(Failures::<&str>::try_from_vec(Vec::new()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<E>"))]
pub struct Failures<E>(Vec<E>);

impl<E> Failures<E> {
    /// Wrap `errors`, or return `None` when there are none.
    #[must_use]
    pub fn try_from_vec(errors: Vec<E>) -> Option<Self> {
        (!errors.is_empty()).then_some(Self(errors))
    }

    /// Number of collected errors; always at least one.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for parity with [`Failures::len`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the errors in input order.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.0.iter()
    }

    /// Borrow the errors as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[E] {
        self.0.as_slice()
    }

    /// Give up the non-empty guarantee and take the errors.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.0
    }
}

impl<E> Deref for Failures<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.0
    }
}

impl<E: PartialEq> PartialEq<Vec<E>> for Failures<E> {
    fn eq(&self, other: &Vec<E>) -> bool {
        self.0 == *other
    }
}

impl<E: PartialEq, const N: usize> PartialEq<[E; N]> for Failures<E> {
    fn eq(&self, other: &[E; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

impl<E> TryFrom<Vec<E>> for Failures<E> {
    type Error = RailwayError;

    fn try_from(errors: Vec<E>) -> RailwayResult<Self> {
        Self::try_from_vec(errors).ok_or(RailwayError::EmptyFailures)
    }
}

impl<E> From<Failures<E>> for Vec<E> {
    fn from(failures: Failures<E>) -> Self {
        failures.0
    }
}

impl<E: fmt::Display> fmt::Display for Failures<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl<E: Error> Error for Failures<E> {}

impl<'a, E> IntoIterator for &'a Failures<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E> IntoIterator for Failures<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
