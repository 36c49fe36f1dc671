//! Newton-Raphson root finder.
//!
//! Starts at the midpoint of the bounds and steps `x - g(x) / g'(x)`, where
//! `g(x) = f(x) - target` and `g'` is a central-difference estimate. Each new
//! iterate is clamped into the bounds.
//!
//! A vanishing derivative ends the attempt with
//! [`Status::DerivativeTooSmall`]. A step shorter than the tolerance counts
//! as convergence only if the unclamped Newton step was that short too, so a
//! step cut off at a bound is not mistaken for a converged root.

use goalseek_core::Observer;
use tracing::{debug, instrument};

use crate::Algorithm;

use super::{Criteria, Event, Point, Solution, Status};

const ALGORITHM: Algorithm = Algorithm::NewtonRaphson;

/// Relative step used for the central difference.
pub const DERIVATIVE_STEP: f64 = 1e-8;

/// Derivatives smaller than this in magnitude stop the method.
pub const MIN_DERIVATIVE: f64 = 1e-15;

/// Finds `x` in `bounds` such that `f(x) = target` using Newton-Raphson.
///
/// The observer receives an [`Event::Step`] after every Newton step.
#[instrument(
    level = "debug",
    skip_all,
    fields(target_value = target, lower = bounds[0], upper = bounds[1])
)]
pub fn solve<F, Obs>(
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
    let eval = |x| Point::eval(f, target, x);
    let [lower, upper] = bounds;

    let mut current = eval(0.5 * (lower + upper));

    for iter in 0..criteria.max_iters() {
        if criteria.is_met(current.residual) {
            debug!(x = current.x, iters = iter, "converged on residual");
            return Solution::from_point(ALGORITHM, current, Status::Converged, true, iter);
        }

        let slope = derivative(&eval, current.x);
        if slope.abs() < MIN_DERIVATIVE {
            debug!(x = current.x, slope, "derivative too small");
            return Solution::from_point(
                ALGORITHM,
                current,
                Status::DerivativeTooSmall,
                false,
                iter,
            );
        }

        let unclamped = current.x - current.residual / slope;
        let mut x_new = unclamped;
        if x_new < lower {
            x_new = lower;
        }
        if x_new > upper {
            x_new = upper;
        }

        let next = eval(x_new);

        observer.observe(&Event::Step {
            algorithm: ALGORITHM,
            iter: iter + 1,
            x: next.x,
            residual: next.residual,
        });

        if criteria.is_met(unclamped - current.x) {
            debug!(x = next.x, iters = iter + 1, "converged on step size");
            return Solution::from_point(ALGORITHM, next, Status::Converged, true, iter + 1);
        }

        current = next;
    }

    let converged = criteria.is_nearly_met(current.residual);
    debug!(x = current.x, error = current.error(), converged, "iteration budget exhausted");
    Solution::from_point(
        ALGORITHM,
        current,
        Status::MaxIterations,
        converged,
        criteria.max_iters(),
    )
}

/// Finds `x` in `bounds` such that `f(x) = target` without observation.
pub fn solve_unobserved<F>(f: &F, target: f64, bounds: [f64; 2], criteria: &Criteria) -> Solution
where
    F: Fn(f64) -> f64,
{
    solve(f, target, bounds, criteria, &mut ())
}

/// Central-difference estimate of the residual's slope at `x`.
fn derivative<E>(eval: &E, x: f64) -> f64
where
    E: Fn(f64) -> Point,
{
    let h = DERIVATIVE_STEP * x.abs().max(1.0);
    (eval(x + h).residual - eval(x - h).residual) / (2.0 * h)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_square_root() {
        let solution = solve_unobserved(&|x: f64| x * x, 2.0, [0.0, 4.0], &Criteria::default());

        assert!(solution.converged);
        assert_eq!(solution.algorithm, Algorithm::NewtonRaphson);
        assert_eq!(solution.algorithm_name(), "Newton-Raphson");
        assert_relative_eq!(solution.value, 2.0_f64.sqrt(), epsilon = 1e-9);
        assert!(solution.iterations > 0);
    }

    #[test]
    fn residual_check_comes_first() {
        let solution = solve_unobserved(&|_: f64| 5.0, 5.0, [-1.0, 1.0], &Criteria::default());

        assert!(solution.converged);
        assert_eq!(solution.iterations, 0);
        assert_relative_eq!(solution.value, 0.0);
    }

    #[test]
    fn constant_function_is_stuck() {
        let solution = solve_unobserved(&|_: f64| 5.0, 7.0, [-1.0, 1.0], &Criteria::default());

        assert!(!solution.converged);
        assert_eq!(solution.status, Status::DerivativeTooSmall);
        assert_eq!(solution.message, "Derivative too small, method stuck");
        assert_eq!(solution.iterations, 0);
        assert_relative_eq!(solution.error, 2.0);
        assert_relative_eq!(solution.achieved_value, 5.0);
    }

    #[test]
    fn flat_start_is_stuck() {
        let solution =
            solve_unobserved(&|x: f64| x * x - 4.0, 0.0, [-10.0, 10.0], &Criteria::default());

        assert_eq!(solution.status, Status::DerivativeTooSmall);
        assert_relative_eq!(solution.value, 0.0);
        assert_relative_eq!(solution.error, 4.0);
    }

    #[test]
    fn steps_are_clamped_into_bounds() {
        let mut xs = Vec::new();
        let criteria = Criteria::new(20, 1e-10).expect("valid tolerance");
        let solution = solve(
            &|x: f64| x - 100.0,
            0.0,
            [0.0, 10.0],
            &criteria,
            &mut |event: &Event| {
                if let Event::Step { x, .. } = event {
                    xs.push(*x);
                }
            },
        );

        assert!(xs.iter().all(|x| (0.0..=10.0).contains(x)));
        assert!(!solution.converged);
        assert_eq!(solution.status, Status::MaxIterations);
        assert_relative_eq!(solution.value, 10.0);
        assert_relative_eq!(solution.error, 90.0);
    }

    #[test]
    fn nan_objective_does_not_converge() {
        let criteria = Criteria::new(10, 1e-10).expect("valid tolerance");
        let solution = solve_unobserved(&|_: f64| f64::NAN, 0.0, [0.0, 1.0], &criteria);

        assert!(!solution.converged);
        assert_eq!(solution.iterations, 10);
    }
}
