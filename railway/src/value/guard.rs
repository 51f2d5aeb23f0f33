//! Guards that demote a successful `ValueResult` and hooks that observe it.

use super::ValueResult;
use crate::Outcome;

impl<V, E> ValueResult<V, E> {
    /// Keep a successful outcome when `flag` holds, otherwise fail with
    /// `error`. A failed outcome is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::ValueResult;
    ///
    /// let ok: ValueResult<u8, &str> = ValueResult::ok(1);
    /// assert_eq!(ok.ensure(true, "unused"), ValueResult::ok(1));
    /// assert_eq!(ok.ensure(false, "rejected"), ValueResult::fail("rejected"));
    /// ```
    pub fn ensure(self, flag: bool, error: E) -> Self {
        match self {
            Self::Successful(_) if !flag => Self::Failed(error),
            other => other,
        }
    }

    /// Like [`ValueResult::ensure`], asking `check` for the flag only when the
    /// outcome is successful.
    pub fn ensure_with<C>(self, check: C, error: E) -> Self
    where
        C: FnOnce() -> bool,
    {
        let rejected = match &self {
            Self::Successful(_) => !check(),
            Self::Failed(_) => false,
        };
        if rejected { Self::Failed(error) } else { self }
    }

    /// Keep a successful outcome when `predicate` accepts its value,
    /// otherwise fail with `error`.
    pub fn ensure_value<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        let rejected = match &self {
            Self::Successful(value) => !predicate(value),
            Self::Failed(_) => false,
        };
        if rejected { Self::Failed(error) } else { self }
    }

    /// Fail with the error of `other` when it failed; otherwise keep `self`.
    ///
    /// `other` may be any [`Outcome`] sharing the error type, including a
    /// [`crate::VoidResult`] or a standard [`Result`].
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{ValueResult, VoidResult};
    ///
    /// let saved: VoidResult<&str> = VoidResult::fail("disk full");
    /// let user: ValueResult<&str, &str> = ValueResult::ok("ada");
    /// assert_eq!(user.ensure_outcome(saved), ValueResult::fail("disk full"));
    /// ```
    pub fn ensure_outcome<O>(self, other: O) -> Self
    where
        O: Outcome<Error = E>,
    {
        match self {
            Self::Successful(value) => match other.into_failure() {
                Some(error) => Self::Failed(error),
                None => Self::Successful(value),
            },
            failed @ Self::Failed(_) => failed,
        }
    }

    /// Like [`ValueResult::ensure_outcome`], producing the other outcome only
    /// when `self` is successful.
    pub fn ensure_outcome_with<O, S>(self, supplier: S) -> Self
    where
        O: Outcome<Error = E>,
        S: FnOnce() -> O,
    {
        if matches!(self, Self::Successful(_)) {
            self.ensure_outcome(supplier())
        } else {
            self
        }
    }

    /// Like [`ValueResult::ensure_outcome`], deriving the other outcome from
    /// the value. `check` is never called on a failed outcome.
    pub fn ensure_outcome_of<O, C>(self, check: C) -> Self
    where
        O: Outcome<Error = E>,
        C: FnOnce(&V) -> O,
    {
        let verdict = match &self {
            Self::Successful(value) => check(value).into_failure(),
            Self::Failed(_) => None,
        };
        match verdict {
            Some(error) => Self::Failed(error),
            None => self,
        }
    }

    /// Call `action` with the value when successful; returns `self`.
    pub fn on_success<A>(self, action: A) -> Self
    where
        A: FnOnce(&V),
    {
        if let Self::Successful(value) = &self {
            action(value);
        }
        self
    }

    /// Call `action` when successful; returns `self`.
    pub fn on_success_run<A>(self, action: A) -> Self
    where
        A: FnOnce(),
    {
        if let Self::Successful(_) = &self {
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
        S: FnOnce(&V),
        F: FnOnce(&E),
    {
        match &self {
            Self::Successful(value) => success(value),
            Self::Failed(error) => failure(error),
        }
        self
    }
}
