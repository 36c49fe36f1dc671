#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Algorithm;

use super::Point;

/// How a root finder finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Status {
    /// The residual or the step size fell below the tolerance.
    Converged,

    /// The iteration budget ran out.
    ///
    /// The solution may still be accepted by the relaxed check.
    MaxIterations,

    /// No sign-changing interval could be found.
    NoBracket,

    /// The numerical derivative vanished.
    DerivativeTooSmall,
}

impl Status {
    /// Returns the human-readable outcome text.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Converged => "Converged successfully",
            Self::MaxIterations => "Maximum iterations reached",
            Self::NoBracket => "Could not find bracketing interval",
            Self::DerivativeTooSmall => "Derivative too small, method stuck",
        }
    }
}

/// The outcome of a single root finder run.
///
/// `error` and `achieved_value` are always computed from the same `value`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Solution {
    /// Whether the solution is accepted, including relaxed acceptance.
    pub converged: bool,

    /// The solved input, or `NaN` if nothing was attempted.
    pub value: f64,

    /// `f(value)`.
    pub achieved_value: f64,

    /// `|f(value) - target|`, or infinity if nothing was attempted.
    pub error: f64,

    /// Refinement steps taken.
    pub iterations: usize,

    pub algorithm: Algorithm,

    pub status: Status,

    pub message: &'static str,
}

impl Solution {
    pub(crate) fn from_point(
        algorithm: Algorithm,
        point: Point,
        status: Status,
        converged: bool,
        iterations: usize,
    ) -> Self {
        Self {
            converged,
            value: point.x,
            achieved_value: point.output,
            error: point.error(),
            iterations,
            algorithm,
            status,
            message: status.message(),
        }
    }

    pub(crate) fn no_bracket(algorithm: Algorithm) -> Self {
        Self {
            converged: false,
            value: f64::NAN,
            achieved_value: f64::NAN,
            error: f64::INFINITY,
            iterations: 0,
            algorithm,
            status: Status::NoBracket,
            message: Status::NoBracket.message(),
        }
    }

    /// Returns the display name of the algorithm that produced this solution.
    #[must_use]
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }
}
