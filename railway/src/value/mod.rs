//! Outcome of a computation that yields a value when it succeeds.
//!
//! A [`ValueResult`] is either [`ValueResult::Successful`] with a value of
//! type `V` or [`ValueResult::Failed`] with an error of type `E`. The shape is
//! fixed at construction; every combinator consumes the receiver and returns
//! either that same outcome or a freshly built one.
//!
//! "No value" is not a third state. A successful computation whose payload
//! may be absent is a `ValueResult<Option<T>, E>`, and `ok(None)` is a
//! perfectly good success.

mod cast;
mod guard;
mod transform;

use std::fmt;

use crate::{Outcome, Payload, RailwayError, RailwayResult, State};

/// Either a success value `V` or an error `E`.
///
/// # Examples
///
/// ```
/// use railway::{Outcome, ValueResult};
///
/// fn parse_port(raw: &str) -> ValueResult<u16, String> {
///     raw.parse::<u16>().map_err(|e| e.to_string()).into()
/// }
///
/// let port = parse_port("8080")
///     .ensure_value(|port| *port >= 1024, "privileged port".to_owned())
///     .map(u32::from);
/// assert_eq!(port, ValueResult::ok(8080));
///
/// let rejected = parse_port("80").ensure_value(|port| *port >= 1024, "privileged port".to_owned());
/// assert_eq!(rejected.error(), "privileged port");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this outcome may be a failure, which should be handled"]
pub enum ValueResult<V, E> {
    /// The computation succeeded with a value.
    Successful(V),
    /// The computation failed with an error.
    Failed(E),
}

impl<V, E> ValueResult<V, E> {
    /// A successful outcome carrying `value`.
    pub const fn ok(value: V) -> Self {
        Self::Successful(value)
    }

    /// A failed outcome carrying `error`.
    pub const fn fail(error: E) -> Self {
        Self::Failed(error)
    }

    /// Successful with the contents of `value` when present, otherwise failed
    /// with `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::ValueResult;
    ///
    /// assert_eq!(ValueResult::from_optional(Some(1), "missing"), ValueResult::ok(1));
    /// assert_eq!(ValueResult::<u8, _>::from_optional(None, "missing"), ValueResult::fail("missing"));
    /// ```
    pub fn from_optional(value: Option<V>, error: E) -> Self {
        match value {
            Some(value) => Self::Successful(value),
            None => Self::Failed(error),
        }
    }

    /// Like [`ValueResult::from_optional`], building the error only when the
    /// value is absent.
    pub fn from_optional_else<F>(value: Option<V>, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match value {
            Some(value) => Self::Successful(value),
            None => Self::Failed(error()),
        }
    }

    /// Successful with `value` unless it is absent, in which case failed with
    /// `error`.
    ///
    /// Identical to [`ValueResult::from_optional`]; kept for call sites that
    /// read better when the input is a nullable field rather than an
    /// optional lookup.
    pub fn from_nullable(value: Option<V>, error: E) -> Self {
        Self::from_optional(value, error)
    }

    /// Borrow both payloads.
    pub const fn as_ref(&self) -> ValueResult<&V, &E> {
        match self {
            Self::Successful(value) => ValueResult::Successful(value),
            Self::Failed(error) => ValueResult::Failed(error),
        }
    }

    /// Returns `true` when successful and `predicate` accepts the value.
    #[must_use]
    pub fn is_successful_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&V) -> bool,
    {
        match self {
            Self::Successful(value) => predicate(value),
            Self::Failed(_) => false,
        }
    }

    /// Borrow the value of a successful outcome.
    ///
    /// # Panics
    ///
    /// Panics with [`RailwayError::InvalidState`] when the outcome failed.
    /// Use [`ValueResult::try_value`] to handle that case.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &V {
        self.try_value().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Borrow the value of a successful outcome.
    ///
    /// # Errors
    ///
    /// Returns [`RailwayError::InvalidState`] when the outcome failed.
    pub const fn try_value(&self) -> RailwayResult<&V> {
        match self {
            Self::Successful(value) => Ok(value),
            Self::Failed(_) => Err(RailwayError::invalid_state(State::Failed, Payload::Value)),
        }
    }

    /// Move the value out of a successful outcome.
    ///
    /// # Panics
    ///
    /// Panics with [`RailwayError::InvalidState`] when the outcome failed.
    #[must_use]
    #[track_caller]
    pub fn into_value(self) -> V {
        match self {
            Self::Successful(value) => value,
            Self::Failed(_) => panic!(
                "{}",
                RailwayError::invalid_state(State::Failed, Payload::Value)
            ),
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
            Self::Successful(_) => panic!(
                "{}",
                RailwayError::invalid_state(State::Successful, Payload::Error)
            ),
            Self::Failed(error) => error,
        }
    }

    /// Borrow the value as an [`Option`], `None` when failed.
    #[must_use]
    pub const fn as_option(&self) -> Option<&V> {
        match self {
            Self::Successful(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Iterate over the value: one item when successful, none when failed.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn iter(&self) -> std::option::IntoIter<&V> {
        self.as_option().into_iter()
    }
}

impl<V, E> Outcome for ValueResult<V, E> {
    type Error = E;

    fn failure(&self) -> Option<&E> {
        match self {
            Self::Successful(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    fn into_failure(self) -> Option<E> {
        match self {
            Self::Successful(_) => None,
            Self::Failed(error) => Some(error),
        }
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for ValueResult<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Successful(value) => write!(f, "Successful({value})"),
            Self::Failed(error) => write!(f, "Failed({error})"),
        }
    }
}

impl<V, E> IntoIterator for ValueResult<V, E> {
    type Item = V;
    type IntoIter = std::option::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<'a, V, E> IntoIterator for &'a ValueResult<V, E> {
    type Item = &'a V;
    type IntoIter = std::option::IntoIter<&'a V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
