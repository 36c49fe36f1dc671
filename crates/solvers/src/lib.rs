//! Scalar root finders and the goal-seek orchestrator.
//!
//! The [`equation`] module holds three interchangeable root finders that
//! drive `f(x) - target` toward zero on a bounded interval.
//! [`GoalSeeker`] runs the primary algorithm and falls back through the
//! others, keeping the best outcome.

mod algorithm;
mod config;

pub mod equation;
pub mod goal_seek;

pub use algorithm::Algorithm;
pub use config::{Config, ConfigError};
pub use equation::{Criteria, Event, Solution, Status};
pub use goal_seek::{GoalSeeker, Request, RequestError, Response};
