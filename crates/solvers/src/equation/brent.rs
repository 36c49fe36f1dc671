//! Brent's method.
//!
//! # Algorithm
//!
//! Brent's method keeps a sign-changing interval `[a, b]` where `b` is the
//! best estimate (`|g(b)| <= |g(a)|`) and `c` is the previous `b`. Each step
//! tries inverse quadratic interpolation through `a`, `b` and `c` (or a
//! secant step when two residuals coincide) and falls back to bisection
//! whenever the candidate:
//!
//! 1. lies outside the interval between `(3a + b) / 4` and `b`
//! 2. moves less than half as far as the last relevant step
//! 3. follows a step already smaller than the tolerance
//!
//! If the bounds do not bracket a root, 50 evenly spaced probes are swept
//! across them, then across windows widened by whole interval widths on both
//! sides, up to `max_iters / 4` widenings.
//!
//! This is the primary algorithm used by [`GoalSeeker`](crate::GoalSeeker).

use std::mem;

use goalseek_core::Observer;
use tracing::{debug, instrument};

use crate::Algorithm;

use super::{Criteria, Event, Point, Solution, Status, bracket};

const ALGORITHM: Algorithm = Algorithm::Brent;

/// Finds `x` in `bounds` such that `f(x) = target` using Brent's method.
///
/// The observer receives an [`Event::Bracket`] once the interval is known and
/// an [`Event::Step`] after every update, reporting the best estimate `b`.
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

    if bracket::needs_repair(&a, &b) {
        match bracket::sweep(eval, bounds, criteria.bracket_attempts()) {
            Some([left, right]) => {
                debug!(left = left.x, right = right.x, "bracket found by sweeping");
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

    if a.error() < b.error() {
        mem::swap(&mut a, &mut b);
    }

    let mut c = a;
    let mut d = c.x;
    let mut bisected = true;

    for iter in 0..criteria.max_iters() {
        if criteria.is_met(b.residual) || criteria.is_met(b.x - a.x) {
            debug!(x = b.x, iters = iter, "converged");
            return Solution::from_point(ALGORITHM, b, Status::Converged, true, iter);
        }

        let mut s = candidate(&a, &b, &c);

        let quarter = 0.25 * (3.0 * a.x + b.x);
        let between = (s > quarter && s < b.x) || (s < quarter && s > b.x);
        let last_gap = if bisected {
            (b.x - c.x).abs()
        } else {
            (c.x - d).abs()
        };
        let slow = (s - b.x).abs() >= 0.5 * last_gap;
        let tiny = criteria.is_met(last_gap);

        bisected = !between || slow || tiny;
        if bisected {
            s = 0.5 * (a.x + b.x);
        }

        let next = eval(s);
        d = c.x;
        c = b;

        if bracket::changes_sign(a.residual, next.residual) {
            b = next;
        } else {
            a = next;
        }

        if a.error() < b.error() {
            mem::swap(&mut a, &mut b);
        }

        observer.observe(&Event::Step {
            algorithm: ALGORITHM,
            iter: iter + 1,
            x: b.x,
            residual: b.residual,
        });
    }

    let converged = criteria.is_nearly_met(b.residual);
    debug!(x = b.x, error = b.error(), converged, "iteration budget exhausted");
    Solution::from_point(
        ALGORITHM,
        b,
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

/// Inverse quadratic interpolation through `a`, `b`, `c` when their residuals
/// are distinct from `c`'s, otherwise the secant step through `a` and `b`.
#[allow(clippy::float_cmp)]
fn candidate(a: &Point, b: &Point, c: &Point) -> f64 {
    let (fa, fb, fc) = (a.residual, b.residual, c.residual);

    if fa != fc && fb != fc {
        a.x * fb * fc / ((fa - fb) * (fa - fc))
            + b.x * fa * fc / ((fb - fa) * (fb - fc))
            + c.x * fa * fb / ((fc - fa) * (fc - fb))
    } else {
        b.x - fb * (b.x - a.x) / (fb - fa)
    }
}
