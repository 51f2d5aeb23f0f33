//! Contract violations reported by the outcome types themselves.

mod constructors;
mod types;

pub use types::{Payload, RailwayError, RailwayResult, State};

#[cfg(test)]
mod tests;
