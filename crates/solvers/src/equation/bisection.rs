//! Bisection root finder.
//!
//! # Algorithm
//!
//! Bisection halves a sign-changing interval until the midpoint residual or
//! the half-width falls below the tolerance. Convergence is guaranteed for
//! continuous functions once a bracket exists.
//!
//! If the bounds do not bracket a root, a marching search probes outward in
//! steps of a tenth of the interval width, doubling the step and widening
//! the window on both sides each pass. The search is limited to
//! `max_iters / 4` probes.
//!
//! # Iterations
//!
//! A solution that converges on the k-th midpoint (counting from zero)
//! reports `k + 1` iterations. A bound that is an exact root is returned
//! with zero iterations.

use goalseek_core::Observer;
use tracing::{debug, instrument};

use crate::Algorithm;

use super::{Criteria, Event, Point, Solution, Status, bracket};

const ALGORITHM: Algorithm = Algorithm::Bisection;

/// Finds `x` in `bounds` such that `f(x) = target` using bisection.
///
/// The observer receives an [`Event::Bracket`] once the interval is known and
/// an [`Event::Step`] for every midpoint.
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

    let mut a = eval(bounds[0]);
    let mut b = eval(bounds[1]);

    #[allow(clippy::float_cmp)]
    let exact = [a, b].into_iter().find(|p| p.residual == 0.0);
    if let Some(root) = exact {
        debug!(x = root.x, "bound is an exact root");
        return Solution::from_point(ALGORITHM, root, Status::Converged, true, 0);
    }

    if bracket::needs_repair(&a, &b) {
        match bracket::march(eval, bounds, criteria.bracket_attempts()) {
            Some([left, right]) => {
                debug!(left = left.x, right = right.x, "bracket found by marching");
                a = left;
                b = right;
            }
            None => {
                debug!("no bracketing interval");
                return Solution::no_bracket(ALGORITHM);
            }
        }
    }

    observer.observe(&Event::Bracket {
        algorithm: ALGORITHM,
        bracket: [a.x, b.x],
    });

    let mut mid = a;

    for iter in 0..criteria.max_iters() {
        mid = eval(0.5 * (a.x + b.x));

        observer.observe(&Event::Step {
            algorithm: ALGORITHM,
            iter: iter + 1,
            x: mid.x,
            residual: mid.residual,
        });

        if criteria.is_met(mid.residual) || criteria.is_met(0.5 * (b.x - a.x)) {
            debug!(x = mid.x, iters = iter + 1, "converged");
            return Solution::from_point(ALGORITHM, mid, Status::Converged, true, iter + 1);
        }

        if bracket::changes_sign(a.residual, mid.residual) {
            b = mid;
        } else {
            a = mid;
        }
    }

    let converged = criteria.is_nearly_met(mid.residual);
    debug!(x = mid.x, error = mid.error(), converged, "iteration budget exhausted");
    Solution::from_point(
        ALGORITHM,
        mid,
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_square_root() {
        let solution = solve_unobserved(&|x: f64| x * x, 4.0, [0.0, 10.0], &Criteria::default());

        assert!(solution.converged);
        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.algorithm, Algorithm::Bisection);
        assert_relative_eq!(solution.value, 2.0, epsilon = 1e-9);
        assert_relative_eq!(solution.achieved_value, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn first_midpoint_counts_as_one_iteration() {
        let solution = solve_unobserved(&|x: f64| x, 0.0, [-1.0, 1.0], &Criteria::default());

        assert!(solution.converged);
        assert_eq!(solution.iterations, 1);
        assert_relative_eq!(solution.value, 0.0);
    }

    #[test]
    fn exact_root_at_bound_skips_repair() {
        let solution = solve_unobserved(&|x: f64| x - 3.0, 0.0, [3.0, 5.0], &Criteria::default());

        assert!(solution.converged);
        assert_relative_eq!(solution.value, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn marches_to_root_outside_bounds() {
        let solution =
            solve_unobserved(&|x: f64| x - 100.0, 0.0, [-10.0, 10.0], &Criteria::default());

        assert!(solution.converged);
        assert_relative_eq!(solution.value, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn reports_missing_bracket() {
        let solution =
            solve_unobserved(&|x: f64| x * x + 1.0, 0.0, [-1.0, 1.0], &Criteria::default());

        assert!(!solution.converged);
        assert_eq!(solution.status, Status::NoBracket);
        assert!(solution.value.is_nan());
        assert!(solution.error.is_infinite());
    }

    #[test]
    fn relaxed_acceptance_after_budget() {
        // Midpoints 0.5, 0.25, 0.375: the last is 0.075 away from the root.
        let f = |x: f64| x - 0.3;

        let strict = Criteria::new(3, 1e-6).expect("valid tolerance");
        let solution = solve_unobserved(&f, 0.0, [0.0, 1.0], &strict);

        assert!(!solution.converged);
        assert_eq!(solution.status, Status::MaxIterations);
        assert_eq!(solution.message, "Maximum iterations reached");
        assert_eq!(solution.iterations, 3);
        assert_relative_eq!(solution.value, 0.375);
        assert_relative_eq!(solution.error, 0.075, epsilon = 1e-12);

        let relaxed = Criteria::new(3, 1e-3).expect("valid tolerance");
        let solution = solve_unobserved(&f, 0.0, [0.0, 1.0], &relaxed);

        assert!(solution.converged);
        assert_eq!(solution.status, Status::MaxIterations);
        assert_relative_eq!(solution.value, 0.375);
    }

    #[test]
    fn emits_bracket_then_steps() {
        let mut events = Vec::new();
        let solution = solve(
            &|x: f64| x * x,
            4.0,
            [0.0, 10.0],
            &Criteria::default(),
            &mut |event: &Event| events.push(*event),
        );

        assert_eq!(
            events.first(),
            Some(&Event::Bracket {
                algorithm: Algorithm::Bisection,
                bracket: [0.0, 10.0],
            })
        );
        assert_eq!(events.len(), solution.iterations + 1);
        assert!(events.iter().all(|e| e.algorithm() == Algorithm::Bisection));
    }

    #[test]
    fn nan_samples_degrade_without_panicking() {
        let solution = solve_unobserved(&|_: f64| f64::NAN, 0.0, [0.0, 1.0], &Criteria::default());

        assert!(!solution.converged);
        assert_eq!(solution.status, Status::NoBracket);
    }
}
