//! Test helpers shared across crates.
//!
//! Outcome combinators promise to run a callback once on one branch and never
//! on the other. The spies here make those promises observable:
//! [`counter::CallCounter`] counts argument-less invocations and
//! [`recorder::Recorder`] keeps every argument it was handed.

pub mod counter;
pub mod recorder;

pub use counter::CallCounter;
pub use recorder::Recorder;
