//! Outcome of a computation that produces nothing but may fail.
//!
//! [`VoidResult`] mirrors the guard, hook and fold vocabulary of
//! [`crate::ValueResult`] without the value-carrying operations.

use std::{
    any::Any,
    fmt,
    hash::{Hash, Hasher},
    mem,
};

use crate::{
    Outcome, Payload, RailwayError, RailwayResult, State, ValueResult, cast::downcast,
};

/// Either plain success or an error `E`.
///
/// The successful shape holds no data, so two successful void results compare
/// equal even when their error types differ, as long as those error types can
/// be compared with each other.
///
/// # Examples
///
/// ```
/// use railway::{Outcome, VoidResult};
///
/// fn check_quota(used: u32, limit: u32) -> VoidResult<String> {
///     VoidResult::ok().ensure(used <= limit, format!("{used} exceeds {limit}"))
/// }
///
/// assert!(check_quota(3, 5).is_successful());
/// assert_eq!(check_quota(7, 5).error(), "7 exceeds 5");
/// assert_eq!(VoidResult::<String>::ok(), VoidResult::<&str>::ok());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this outcome may be a failure, which should be handled"]
pub enum VoidResult<E> {
    /// The computation succeeded.
    Successful,
    /// The computation failed with an error.
    Failed(E),
}

impl<E> VoidResult<E> {
    /// The canonical successful outcome.
    pub const fn ok() -> Self {
        Self::Successful
    }

    /// A failed outcome carrying `error`.
    pub const fn fail(error: E) -> Self {
        Self::Failed(error)
    }

    /// Borrow the error.
    pub const fn as_ref(&self) -> VoidResult<&E> {
        match self {
            Self::Successful => VoidResult::Successful,
            Self::Failed(error) => VoidResult::Failed(error),
        }
    }

    /// Move the error out of a failed outcome.
    ///
    /// # Panics
    ///
    /// Panics with [`RailwayError::InvalidState`] when the outcome succeeded.
    #[must_use]
    #[track_caller]
    pub fn into_error(self) -> E {
        match self {
            Self::Successful => panic!(
                "{}",
                RailwayError::invalid_state(State::Successful, Payload::Error)
            ),
            Self::Failed(error) => error,
        }
    }

    /// Keep a successful outcome when `flag` holds, otherwise fail with
    /// `error`. A failed outcome is returned unchanged.
    pub fn ensure(self, flag: bool, error: E) -> Self {
        match self {
            Self::Successful if !flag => Self::Failed(error),
            other => other,
        }
    }

    /// Like [`VoidResult::ensure`], asking `check` for the flag only when the
    /// outcome is successful.
    pub fn ensure_with<C>(self, check: C, error: E) -> Self
    where
        C: FnOnce() -> bool,
    {
        if matches!(self, Self::Successful) && !check() {
            Self::Failed(error)
        } else {
            self
        }
    }

    /// Fail with the error of `other` when it failed; otherwise keep `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{ValueResult, VoidResult};
    ///
    /// let lookup: ValueResult<u32, &str> = ValueResult::fail("no such user");
    /// assert_eq!(VoidResult::ok().ensure_outcome(lookup), VoidResult::fail("no such user"));
    /// ```
    pub fn ensure_outcome<O>(self, other: O) -> Self
    where
        O: Outcome<Error = E>,
    {
        match self {
            Self::Successful => other.into_failure().map_or(Self::Successful, Self::Failed),
            failed @ Self::Failed(_) => failed,
        }
    }

    /// Like [`VoidResult::ensure_outcome`], producing the other outcome only
    /// when `self` is successful.
    pub fn ensure_outcome_with<O, S>(self, supplier: S) -> Self
    where
        O: Outcome<Error = E>,
        S: FnOnce() -> O,
    {
        match self {
            Self::Successful => Self::Successful.ensure_outcome(supplier()),
            failed @ Self::Failed(_) => failed,
        }
    }

    /// Transform the error of a failed outcome. `mapper` is not called on a
    /// successful outcome.
    pub fn map_error<F, M>(self, mapper: M) -> VoidResult<F>
    where
        M: FnOnce(E) -> F,
    {
        match self {
            Self::Successful => VoidResult::Successful,
            Self::Failed(error) => VoidResult::Failed(mapper(error)),
        }
    }

    /// Attach `value` to a successful outcome.
    pub fn with_value<V>(self, value: V) -> ValueResult<V, E> {
        match self {
            Self::Successful => ValueResult::Successful(value),
            Self::Failed(error) => ValueResult::Failed(error),
        }
    }

    /// Call `action` when successful; returns `self`.
    pub fn on_success<A>(self, action: A) -> Self
    where
        A: FnOnce(),
    {
        if matches!(self, Self::Successful) {
            action();
        }
        self
    }

    /// Call `action` with the error when failed; returns `self`.
    pub fn on_failure<A>(self, action: A) -> Self
    where
        A: FnOnce(&E),
    {
        if let Self::Failed(error) = &self {
            action(error);
        }
        self
    }

    /// Call `action` when failed; returns `self`.
    pub fn on_failure_run<A>(self, action: A) -> Self
    where
        A: FnOnce(),
    {
        if let Self::Failed(_) = &self {
            action();
        }
        self
    }

    /// Call exactly one of the two actions, depending on the shape; returns
    /// `self`.
    pub fn on_both<S, F>(self, success: S, failure: F) -> Self
    where
        S: FnOnce(),
        F: FnOnce(&E),
    {
        match &self {
            Self::Successful => success(),
            Self::Failed(error) => failure(error),
        }
        self
    }

    /// Reduce to a single value with one function per shape.
    pub fn fold<T, S, F>(self, success: S, failure: F) -> T
    where
        S: FnOnce() -> T,
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Successful => success(),
            Self::Failed(error) => failure(error),
        }
    }

    /// Widen the error type through its [`Into`] conversion.
    pub fn up_cast<F>(self) -> VoidResult<F>
    where
        E: Into<F>,
    {
        self.map_error(Into::into)
    }

    /// Re-type the error as `F` after checking its runtime type.
    ///
    /// An error held as `Box<dyn Any>` (optionally `+ Send`, `+ Send + Sync`)
    /// is unboxed when the error inside is an `F`.
    ///
    /// # Errors
    ///
    /// Returns [`RailwayError::IllegalCast`] when the outcome failed and its
    /// error is not an `F`.
    pub fn cast_error<F>(self) -> RailwayResult<VoidResult<F>>
    where
        E: Any,
        F: Any,
    {
        match self {
            Self::Successful => Ok(VoidResult::Successful),
            Self::Failed(error) => downcast(error, Payload::Error).map(VoidResult::Failed),
        }
    }
}

impl<E> Default for VoidResult<E> {
    fn default() -> Self {
        Self::Successful
    }
}

impl<E> Outcome for VoidResult<E> {
    type Error = E;

    fn failure(&self) -> Option<&E> {
        match self {
            Self::Successful => None,
            Self::Failed(error) => Some(error),
        }
    }

    fn into_failure(self) -> Option<E> {
        match self {
            Self::Successful => None,
            Self::Failed(error) => Some(error),
        }
    }
}

impl<E, F> PartialEq<VoidResult<F>> for VoidResult<E>
where
    E: PartialEq<F>,
{
    fn eq(&self, other: &VoidResult<F>) -> bool {
        match (self, other) {
            (Self::Successful, VoidResult::Successful) => true,
            (Self::Failed(error), VoidResult::Failed(other_error)) => error == other_error,
            _ => false,
        }
    }
}

impl<E: Eq> Eq for VoidResult<E> {}

impl<E: Hash> Hash for VoidResult<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        if let Self::Failed(error) = self {
            error.hash(state);
        }
    }
}

impl<E: fmt::Display> fmt::Display for VoidResult<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Successful => f.write_str("Successful"),
            Self::Failed(error) => write!(f, "Failed({error})"),
        }
    }
}
