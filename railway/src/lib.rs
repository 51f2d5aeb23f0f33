//! Railway-oriented outcomes for Rust.
//!
//! This crate models the success or failure of a computation with two
//! immutable outcome types and a fluent set of combinators:
//!
//! - [`ValueResult`] carries a value `V` when successful and an error `E`
//!   when failed.
//! - [`VoidResult`] carries nothing when successful and an error `E` when
//!   failed.
//!
//! Both implement the [`Outcome`] contract, which is what lets one kind of
//! outcome guard the other. Combinators either hand back the outcome they
//! were called on or build a new one; callbacks run synchronously, at most
//! once, and only on the branch their combinator documents.
//!
//! Misuse of an outcome, such as asking a failed [`ValueResult`] for its
//! value, is reported as a [`RailwayError`]. Panicking accessors have
//! `try_*` counterparts that return it instead.
//!
//! # Examples
//!
//! ```
//! use railway::{Outcome, ValueResult, VoidResult};
//!
//! #[derive(Debug, PartialEq)]
//! enum SignupError {
//!     EmptyName,
//!     Taken(String),
//! }
//!
//! fn reserve(name: &str) -> VoidResult<SignupError> {
//!     VoidResult::ok().ensure(name != "root", SignupError::Taken(name.to_owned()))
//! }
//!
//! fn signup(name: &str) -> ValueResult<String, SignupError> {
//!     ValueResult::ok(name.trim().to_owned())
//!         .ensure_value(|name| !name.is_empty(), SignupError::EmptyName)
//!         .ensure_outcome_of(|name| reserve(name))
//!         .map(|name| format!("welcome, {name}"))
//! }
//!
//! assert_eq!(signup(" ada ").value(), "welcome, ada");
//! assert_eq!(signup("  ").error(), &SignupError::EmptyName);
//! assert_eq!(signup("root").error(), &SignupError::Taken("root".to_owned()));
//! ```

mod cast;
mod error;
mod failures;
mod outcome;
mod result_ext;
mod sequence;
mod value;
mod void;

pub use error::{Payload, RailwayError, RailwayResult, State};
pub use failures::Failures;
pub use outcome::{ErrorIter, Outcome};
pub use result_ext::ResultExt;
pub use value::ValueResult;
pub use void::VoidResult;

/// Glob-importable set of the traits and types most call sites need.
///
/// ```
/// use railway::prelude::*;
///
/// let outcome: ValueResult<u8, &str> = Ok(1).into_value_result();
/// assert!(outcome.is_successful());
/// ```
pub mod prelude {
    pub use crate::{Outcome, ResultExt, ValueResult, VoidResult};
}
