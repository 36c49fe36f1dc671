//! Root finders for scalar equations `f(x) = target`.
//!
//! Every solver takes the raw function `f`, the target, a search interval
//! and a [`Criteria`], and always returns a [`Solution`]. Numeric trouble
//! (no sign change, a flat derivative, an exhausted budget, `NaN` samples)
//! is reported through [`Status`], never as an error.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed interval
//! - [`newton_raphson`]: fast near the root, uses a numerical derivative
//! - [`brent`]: hybrid interpolation with a bisection safeguard
//!
//! # Observer Events
//!
//! Bisection and Brent emit [`Event::Bracket`] once a sign-changing interval
//! is established. Every solver emits [`Event::Step`] after each refinement
//! step.

mod bracket;
mod criteria;
mod event;
mod point;
mod solution;

pub mod bisection;
pub mod brent;
pub mod newton_raphson;

pub use criteria::Criteria;
pub use event::Event;
pub use solution::{Solution, Status};

use point::Point;
