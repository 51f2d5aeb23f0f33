//! Static widening and runtime narrowing of `ValueResult` payloads.

use std::any::Any;

use super::ValueResult;
use crate::{Payload, RailwayResult, cast::downcast};

impl<V, E> ValueResult<V, E> {
    /// Widen both payload types through their [`Into`] conversions.
    ///
    /// This is how an outcome built with narrow types joins a chain that
    /// expects broader ones, such as a boxed error.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::ValueResult;
    ///
    /// let narrow: ValueResult<u8, &str> = ValueResult::fail("bad input");
    /// let wide: ValueResult<u64, Box<dyn std::error::Error>> = narrow.up_cast();
    /// assert_eq!(wide.into_error().to_string(), "bad input");
    /// ```
    pub fn up_cast<W, F>(self) -> ValueResult<W, F>
    where
        V: Into<W>,
        E: Into<F>,
    {
        match self {
            Self::Successful(value) => ValueResult::Successful(value.into()),
            Self::Failed(error) => ValueResult::Failed(error.into()),
        }
    }

    /// Re-type the value as `W` after checking its runtime type.
    ///
    /// A value held as `Box<dyn Any>` (optionally `+ Send`, `+ Send + Sync`)
    /// is unboxed when the value inside is a `W`. A failed outcome has no
    /// value to check and always converts.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::any::Any;
    ///
    /// use railway::ValueResult;
    ///
    /// let erased: ValueResult<Box<dyn Any>, &str> = ValueResult::ok(Box::new(7_u32));
    /// assert_eq!(erased.cast_value::<u32>(), Ok(ValueResult::ok(7)));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::RailwayError::IllegalCast`] when the outcome is
    /// successful and its value is not a `W`.
    pub fn cast_value<W>(self) -> RailwayResult<ValueResult<W, E>>
    where
        V: Any,
        W: Any,
    {
        match self {
            Self::Successful(value) => downcast(value, Payload::Value).map(ValueResult::Successful),
            Self::Failed(error) => Ok(ValueResult::Failed(error)),
        }
    }

    /// Re-type the error as `F` after checking its runtime type.
    ///
    /// An error held as `Box<dyn Any>` (optionally `+ Send`, `+ Send + Sync`)
    /// is unboxed when the error inside is an `F`. A successful outcome has no
    /// error to check and always converts.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RailwayError::IllegalCast`] when the outcome failed
    /// and its error is not an `F`.
    pub fn cast_error<F>(self) -> RailwayResult<ValueResult<V, F>>
    where
        E: Any,
        F: Any,
    {
        match self {
            Self::Successful(value) => Ok(ValueResult::Successful(value)),
            Self::Failed(error) => downcast(error, Payload::Error).map(ValueResult::Failed),
        }
    }
}
