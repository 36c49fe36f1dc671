use std::fmt;

use goalseek_core::Observer;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::equation::{Criteria, Event, Solution, bisection, brent, newton_raphson};

/// The available root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    Bisection,

    #[cfg_attr(feature = "serde", serde(rename = "Newton-Raphson"))]
    NewtonRaphson,

    Brent,
}

impl Algorithm {
    /// Every algorithm, in the order fallbacks are tried.
    pub const REGISTRY: [Algorithm; 3] = [Self::Bisection, Self::Brent, Self::NewtonRaphson];

    /// The algorithm tried first.
    pub const PRIMARY: Algorithm = Self::Brent;

    /// Returns the display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bisection => "Bisection",
            Self::NewtonRaphson => "Newton-Raphson",
            Self::Brent => "Brent",
        }
    }

    /// Runs this algorithm on `f(x) = target` over `bounds`.
    pub fn solve<F, Obs>(
        self,
        f: &F,
        target: f64,
        bounds: [f64; 2],
        criteria: &Criteria,
        observer: &mut Obs,
    ) -> Solution
    where
        F: Fn(f64) -> f64,
        Obs: Observer<Event>,
    {
        match self {
            Self::Bisection => bisection::solve(f, target, bounds, criteria, observer),
            Self::NewtonRaphson => newton_raphson::solve(f, target, bounds, criteria, observer),
            Self::Brent => brent::solve(f, target, bounds, criteria, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn registry_lists_each_algorithm_once() {
        assert_eq!(
            Algorithm::REGISTRY,
            [
                Algorithm::Bisection,
                Algorithm::Brent,
                Algorithm::NewtonRaphson
            ]
        );
        assert!(Algorithm::REGISTRY.contains(&Algorithm::PRIMARY));
    }

    #[test]
    fn names_match_display() {
        for algorithm in Algorithm::REGISTRY {
            assert_eq!(algorithm.to_string(), algorithm.name());
        }
        assert_eq!(Algorithm::NewtonRaphson.name(), "Newton-Raphson");
    }

    #[test]
    fn bisection_and_brent_agree() {
        let f = |x: f64| x * x - 4.0;
        let criteria = Criteria::default();

        let bisection = Algorithm::Bisection.solve(&f, 0.0, [0.0, 10.0], &criteria, &mut ());
        let brent = Algorithm::Brent.solve(&f, 0.0, [0.0, 10.0], &criteria, &mut ());

        assert_eq!(bisection.algorithm, Algorithm::Bisection);
        assert_eq!(brent.algorithm, Algorithm::Brent);
        assert_relative_eq!(bisection.value, 2.0, epsilon = 1e-6);
        assert_relative_eq!(brent.value, 2.0, epsilon = 1e-6);
        assert_relative_eq!(bisection.value, brent.value, epsilon = 1e-6);
    }

    #[test]
    fn dispatches_to_newton_raphson() {
        let solution =
            Algorithm::NewtonRaphson.solve(&|x: f64| 3.0 * x, 6.0, [0.0, 10.0], &Criteria::default(), &mut ());

        assert!(solution.converged);
        assert_eq!(solution.algorithm, Algorithm::NewtonRaphson);
        assert_relative_eq!(solution.value, 2.0, epsilon = 1e-9);
    }
}
