//! Conversions between outcomes and the standard [`Result`].
//!
//! Outcomes are built at the boundary of a computation, and most of those
//! boundaries already speak `Result`. These conversions keep that crossing
//! short in both directions:
//!
//! - `From`/`Into` in both directions for `ValueResult<V, E>` and
//!   `Result<V, E>`, and for `VoidResult<E>` and `Result<(), E>`.
//! - [`ResultExt`] for method-call style on any `Result`, including dropping
//!   an unwanted success value.
//!
//! # Examples
//!
//! ```
//! use railway::{ResultExt, ValueResult, VoidResult};
//!
//! let parsed = "42".parse::<u8>().into_value_result();
//! assert_eq!(parsed.map(u32::from).into_result(), Ok(42));
//!
//! let written: VoidResult<&str> = Ok::<usize, &str>(12).into_void_result();
//! assert_eq!(written, VoidResult::<&str>::ok());
//!
//! fn load() -> Result<u8, String> {
//!     let value = ValueResult::<u8, String>::ok(7).into_result()?;
//!     Ok(value + 1)
//! }
//! assert_eq!(load(), Ok(8));
//! ```

use crate::{ValueResult, VoidResult};

/// Method-call conversions from [`Result`] into outcomes.
pub trait ResultExt<T, E> {
    /// Convert into a [`ValueResult`] carrying the same value or error.
    fn into_value_result(self) -> ValueResult<T, E>;

    /// Convert into a [`VoidResult`], dropping any success value.
    fn into_void_result(self) -> VoidResult<E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn into_value_result(self) -> ValueResult<T, E> {
        self.into()
    }

    fn into_void_result(self) -> VoidResult<E> {
        match self {
            Ok(_) => VoidResult::Successful,
            Err(error) => VoidResult::Failed(error),
        }
    }
}

impl<V, E> ValueResult<V, E> {
    /// Convert into a standard [`Result`], e.g. to use `?`.
    ///
    /// # Errors
    ///
    /// Returns the held error when the outcome failed.
    pub fn into_result(self) -> Result<V, E> {
        self.into()
    }
}

impl<E> VoidResult<E> {
    /// Convert into a standard [`Result`], e.g. to use `?`.
    ///
    /// # Errors
    ///
    /// Returns the held error when the outcome failed.
    pub fn into_result(self) -> Result<(), E> {
        self.into()
    }
}

impl<V, E> From<Result<V, E>> for ValueResult<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Successful(value),
            Err(error) => Self::Failed(error),
        }
    }
}

impl<V, E> From<ValueResult<V, E>> for Result<V, E> {
    fn from(outcome: ValueResult<V, E>) -> Self {
        match outcome {
            ValueResult::Successful(value) => Ok(value),
            ValueResult::Failed(error) => Err(error),
        }
    }
}

impl<E> From<Result<(), E>> for VoidResult<E> {
    fn from(result: Result<(), E>) -> Self {
        result.into_void_result()
    }
}

impl<E> From<VoidResult<E>> for Result<(), E> {
    fn from(outcome: VoidResult<E>) -> Self {
        match outcome {
            VoidResult::Successful => Ok(()),
            VoidResult::Failed(error) => Err(error),
        }
    }
}
