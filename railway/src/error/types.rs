//! Primary error enum for misuse of outcome accessors and casts.

use std::fmt;

use thiserror::Error;

/// Result alias for operations that can violate an outcome's contract.
pub type RailwayResult<T> = Result<T, RailwayError>;

/// Which of the two shapes an outcome was constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// The outcome represents a successful computation.
    Successful,
    /// The outcome carries an error.
    Failed,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Successful => "successful",
            Self::Failed => "failed",
        })
    }
}

/// The payload slot an accessor or cast targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payload {
    /// The success value of a [`crate::ValueResult`].
    Value,
    /// The error of a failed outcome.
    Error,
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "value",
            Self::Error => "error",
        })
    }
}

/// Errors raised when an outcome is used against its contract.
///
/// These describe programming mistakes rather than domain failures; domain
/// failures travel inside [`crate::ValueResult::Failed`] and
/// [`crate::VoidResult::Failed`] untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RailwayError {
    /// A payload was requested from the shape that does not hold it.
    #[error("{state} outcome has no {requested}")]
    InvalidState {
        /// Shape of the outcome that was queried.
        state: State,
        /// Payload the caller asked for.
        requested: Payload,
    },

    /// A runtime cast found a payload of an unrelated type.
    #[error("cannot cast the {payload} of type '{actual}' to '{target}'")]
    IllegalCast {
        /// Payload slot the cast inspected.
        payload: Payload,
        /// Runtime type name of the held payload.
        actual: &'static str,
        /// Type name the caller asked for.
        target: &'static str,
    },

    /// A [`crate::Failures`] was built from an empty list of errors.
    #[error("a failure aggregate needs at least one error")]
    EmptyFailures,
}
