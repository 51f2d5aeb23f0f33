//! Mapping, chaining and terminal extraction for `ValueResult`.

use super::ValueResult;
use crate::VoidResult;

impl<V, E> ValueResult<V, E> {
    /// Transform the value of a successful outcome. `mapper` is not called on
    /// a failed outcome.
    pub fn map<W, M>(self, mapper: M) -> ValueResult<W, E>
    where
        M: FnOnce(V) -> W,
    {
        match self {
            Self::Successful(value) => ValueResult::Successful(mapper(value)),
            Self::Failed(error) => ValueResult::Failed(error),
        }
    }

    /// Transform the error of a failed outcome. `mapper` is not called on a
    /// successful outcome.
    pub fn map_error<F, M>(self, mapper: M) -> ValueResult<V, F>
    where
        M: FnOnce(E) -> F,
    {
        match self {
            Self::Successful(value) => ValueResult::Successful(value),
            Self::Failed(error) => ValueResult::Failed(mapper(error)),
        }
    }

    /// Chain a computation that may itself fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::ValueResult;
    ///
    /// fn half(n: u32) -> ValueResult<u32, String> {
    ///     if n % 2 == 0 {
    ///         ValueResult::ok(n / 2)
    ///     } else {
    ///         ValueResult::fail(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(ValueResult::ok(8).flat_map(half).flat_map(half), ValueResult::ok(2));
    /// assert_eq!(
    ///     ValueResult::ok(6).flat_map(half).flat_map(half),
    ///     ValueResult::fail("3 is odd".to_owned())
    /// );
    /// ```
    #[doc(alias = "and_then")]
    pub fn flat_map<W, F>(self, function: F) -> ValueResult<W, E>
    where
        F: FnOnce(V) -> ValueResult<W, E>,
    {
        match self {
            Self::Successful(value) => function(value),
            Self::Failed(error) => ValueResult::Failed(error),
        }
    }

    /// Merge the values of two successful outcomes with `function`.
    ///
    /// A failed `self` wins over `other`; otherwise a failed `other` is
    /// returned. `function` only runs when both succeeded.
    pub fn combine<W, X, F>(self, function: F, other: ValueResult<W, E>) -> ValueResult<X, E>
    where
        F: FnOnce(V, W) -> X,
    {
        match (self, other) {
            (Self::Failed(error), _) | (Self::Successful(_), ValueResult::Failed(error)) => {
                ValueResult::Failed(error)
            }
            (Self::Successful(value), ValueResult::Successful(other_value)) => {
                ValueResult::Successful(function(value, other_value))
            }
        }
    }

    /// Replace a successful outcome with `other`, whichever shape it has.
    /// A failed outcome keeps its error.
    pub fn take<W>(self, other: ValueResult<W, E>) -> ValueResult<W, E> {
        match self {
            Self::Successful(_) => other,
            Self::Failed(error) => ValueResult::Failed(error),
        }
    }

    /// Like [`ValueResult::take`], producing the replacement only when
    /// `self` is successful.
    pub fn take_with<W, S>(self, supplier: S) -> ValueResult<W, E>
    where
        S: FnOnce() -> ValueResult<W, E>,
    {
        match self {
            Self::Successful(_) => supplier(),
            Self::Failed(error) => ValueResult::Failed(error),
        }
    }

    /// Like [`ValueResult::take`], deriving the replacement from the value.
    pub fn take_from<W, F>(self, function: F) -> ValueResult<W, E>
    where
        F: FnOnce(&V) -> ValueResult<W, E>,
    {
        match self {
            Self::Successful(value) => function(&value),
            Self::Failed(error) => ValueResult::Failed(error),
        }
    }

    /// The value, or `default` when failed.
    #[must_use]
    pub fn unwrap_or(self, default: V) -> V {
        match self {
            Self::Successful(value) => value,
            Self::Failed(_) => default,
        }
    }

    /// The value, or one computed from the error when failed.
    #[must_use]
    pub fn unwrap_or_else<F>(self, function: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Successful(value) => value,
            Self::Failed(error) => function(error),
        }
    }

    /// The value, or the caller's own error built by `supplier` when failed.
    ///
    /// The held error is dropped; `supplier` receives no context.
    ///
    /// # Errors
    ///
    /// Returns `Err(supplier())` when the outcome failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::ValueResult;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Missing;
    ///
    /// let found: ValueResult<u8, &str> = ValueResult::ok(4);
    /// assert_eq!(found.or_raise(|| Missing), Ok(4));
    ///
    /// let lost: ValueResult<u8, &str> = ValueResult::fail("gone");
    /// assert_eq!(lost.or_raise(|| Missing), Err(Missing));
    /// ```
    pub fn or_raise<X, S>(self, supplier: S) -> Result<V, X>
    where
        S: FnOnce() -> X,
    {
        match self {
            Self::Successful(value) => Ok(value),
            Self::Failed(_) => Err(supplier()),
        }
    }

    /// Reduce to a single value with one function per shape.
    pub fn fold<T, S, F>(self, success: S, failure: F) -> T
    where
        S: FnOnce(V) -> T,
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Successful(value) => success(value),
            Self::Failed(error) => failure(error),
        }
    }

    /// The value as an [`Option`], discarding any error.
    ///
    /// For `V = Option<T>`, flatten the result to treat an absent success
    /// value as `None`.
    #[must_use]
    pub fn to_option(self) -> Option<V> {
        match self {
            Self::Successful(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Drop the value, keeping only success or the error.
    pub fn into_void(self) -> VoidResult<E> {
        match self {
            Self::Successful(_) => VoidResult::Successful,
            Self::Failed(error) => VoidResult::Failed(error),
        }
    }
}
