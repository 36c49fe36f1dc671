//! Core traits and types for goal seeking.
//!
//! This crate defines the contracts the root finders and the orchestrator
//! build on:
//!
//! - [`Evaluator`]: turns a formula expression and a set of variable bindings
//!   into a number
//! - [`Formula`]: a read-only formula descriptor
//! - [`Objective`]: binds an evaluator, an expression and known values into a
//!   scalar function of the variable being sought
//! - [`Observer`]: receives solver events

mod evaluator;
mod formula;
mod objective;
mod observer;

pub use evaluator::Evaluator;
pub use formula::{EvaluateError, Formula, Variables};
pub use objective::Objective;
pub use observer::Observer;
