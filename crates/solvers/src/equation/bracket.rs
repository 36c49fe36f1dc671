use super::Point;

/// Probes per pass of the sweep search.
pub(crate) const SWEEP_POINTS: usize = 50;

/// Returns true if `a` and `b` have strictly opposite signs.
///
/// `NaN` never forms a sign change.
pub(crate) fn changes_sign(a: f64, b: f64) -> bool {
    a * b < 0.0
}

/// Returns true if the endpoints neither bracket a root nor hit one exactly.
///
/// A `NaN` endpoint also needs repair.
pub(crate) fn needs_repair(a: &Point, b: &Point) -> bool {
    let product = a.residual * b.residual;
    product > 0.0 || product.is_nan()
}

/// Marches forward from the lower bound looking for a sign change.
///
/// Steps start at a tenth of the interval width. Each time the march passes
/// the right edge of the current window, the step doubles, the window grows
/// on both sides by `step * attempt`, and the march restarts from the new
/// left edge. Every probe counts as one attempt.
pub(crate) fn march<E>(eval: E, bounds: [f64; 2], attempts: usize) -> Option<[Point; 2]>
where
    E: Fn(f64) -> Point,
{
    let [lower, upper] = bounds;
    let mut step = (upper - lower) / 10.0;
    let mut right_edge = upper;
    let mut left = eval(lower);

    for attempt in 0..attempts {
        let right = eval(left.x + step);
        if changes_sign(left.residual, right.residual) {
            return Some([left, right]);
        }

        left = right;

        if left.x > right_edge {
            step *= 2.0;
            let widen = step * attempt as f64;
            right_edge = upper + widen;
            left = eval(lower - widen);
        }
    }

    None
}

/// Sweeps [`SWEEP_POINTS`] evenly spaced probes across the bounds, then
/// across windows widened by `i` interval widths on each side for
/// `i = 1..=widenings`.
pub(crate) fn sweep<E>(eval: E, bounds: [f64; 2], widenings: usize) -> Option<[Point; 2]>
where
    E: Fn(f64) -> Point,
{
    let [lower, upper] = bounds;
    let width = upper - lower;

    (0..=widenings).find_map(|i| {
        let widen = width * i as f64;
        scan(&eval, lower - widen, upper + widen)
    })
}

fn scan<E>(eval: &E, start: f64, end: f64) -> Option<[Point; 2]>
where
    E: Fn(f64) -> Point,
{
    let step = (end - start) / SWEEP_POINTS as f64;
    let mut prev = eval(start);

    for j in 1..=SWEEP_POINTS {
        let next = eval(start + j as f64 * step);
        if changes_sign(prev.residual, next.residual) {
            return Some([prev, next]);
        }
        prev = next;
    }

    None
}
