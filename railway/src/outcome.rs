//! The read-only contract shared by every outcome shape.
//!
//! [`Outcome`] is what lets a [`crate::ValueResult`] be guarded by a
//! [`crate::VoidResult`] (and the other way round) without either type
//! knowing about the other's payload.

use std::iter::FusedIterator;

use crate::{Payload, RailwayError, RailwayResult, State};

/// Success-or-failure of a computation, carrying an error of type
/// [`Outcome::Error`] when it failed.
///
/// Implementors only provide [`Outcome::failure`] and
/// [`Outcome::into_failure`]; every other method derives from them, so the
/// successful and failed states can never disagree.
///
/// # Examples
///
/// ```
/// use railway::{Outcome, ValueResult, VoidResult};
///
/// let done: VoidResult<&str> = VoidResult::ok();
/// let broken: ValueResult<u8, &str> = ValueResult::fail("boom");
///
/// assert!(done.is_successful());
/// assert!(broken.has_failed());
/// assert_eq!(broken.error_iter().collect::<Vec<_>>(), [&"boom"]);
/// ```
pub trait Outcome {
    /// Error carried by the failed shape.
    type Error;

    /// Borrow the error, or `None` when the outcome is successful.
    fn failure(&self) -> Option<&Self::Error>;

    /// Move the error out, or `None` when the outcome is successful.
    fn into_failure(self) -> Option<Self::Error>
    where
        Self: Sized;

    /// Returns `true` when the outcome was built on the success path.
    #[must_use]
    fn is_successful(&self) -> bool {
        self.failure().is_none()
    }

    /// Returns `true` when the outcome carries an error.
    #[must_use]
    fn has_failed(&self) -> bool {
        !self.is_successful()
    }

    /// Shape the outcome was constructed with.
    #[must_use]
    fn state(&self) -> State {
        if self.is_successful() {
            State::Successful
        } else {
            State::Failed
        }
    }

    /// Borrow the error of a failed outcome.
    ///
    /// # Panics
    ///
    /// Panics with [`RailwayError::InvalidState`] when the outcome is
    /// successful. Use [`Outcome::try_error`] to handle that case.
    #[must_use]
    #[track_caller]
    fn error(&self) -> &Self::Error {
        self.try_error().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Borrow the error of a failed outcome.
    ///
    /// # Errors
    ///
    /// Returns [`RailwayError::InvalidState`] when the outcome is successful.
    fn try_error(&self) -> RailwayResult<&Self::Error> {
        self.failure()
            .ok_or_else(|| RailwayError::invalid_state(State::Successful, Payload::Error))
    }

    /// Iterate over the error: empty when successful, one item when failed.
    ///
    /// Every call yields a fresh iterator.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    fn error_iter(&self) -> ErrorIter<'_, Self::Error> {
        ErrorIter {
            inner: self.failure(),
        }
    }
}

/// Iterator over the zero or one error held by an [`Outcome`].
///
/// Created by [`Outcome::error_iter`].
#[derive(Debug, Clone)]
pub struct ErrorIter<'a, E> {
    inner: Option<&'a E>,
}

impl<'a, E> Iterator for ErrorIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<E> DoubleEndedIterator for ErrorIter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<E> ExactSizeIterator for ErrorIter<'_, E> {}

impl<E> FusedIterator for ErrorIter<'_, E> {}

/// Standard results take part in guards such as
/// [`crate::ValueResult::ensure_outcome`].
impl<T, E> Outcome for Result<T, E> {
    type Error = E;

    fn failure(&self) -> Option<&E> {
        self.as_ref().err()
    }

    fn into_failure(self) -> Option<E> {
        self.err()
    }
}
