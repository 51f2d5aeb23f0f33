//! Shorthand constructors for `RailwayError`.

use std::any::type_name;

use super::{Payload, RailwayError, State};

impl RailwayError {
    /// Build the error reported when `requested` is read from an outcome in
    /// `state`.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{Payload, RailwayError, State};
    /// let err = RailwayError::invalid_state(State::Failed, Payload::Value);
    /// assert_eq!(err.to_string(), "failed outcome has no value");
    /// ```
    #[must_use]
    pub const fn invalid_state(state: State, requested: Payload) -> Self {
        Self::InvalidState { state, requested }
    }

    /// Build the error reported when a `payload` of type `A` cannot be viewed
    /// as a `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{Payload, RailwayError};
    /// let err = RailwayError::illegal_cast::<u8, String>(Payload::Error);
    /// assert!(matches!(err, RailwayError::IllegalCast { actual: "u8", .. }));
    /// ```
    #[must_use]
    pub fn illegal_cast<A: ?Sized, T: ?Sized>(payload: Payload) -> Self {
        Self::IllegalCast {
            payload,
            actual: type_name::<A>(),
            target: type_name::<T>(),
        }
    }
}
