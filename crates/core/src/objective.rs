use tracing::trace;

use crate::{Evaluator, Variables};

/// A scalar function of the seek variable.
///
/// Known values are copied at construction so later changes to the caller's
/// map do not leak into an ongoing solve.
/// Evaluation failures are reported as `NaN` rather than as errors; the root
/// finders treat non-finite outputs as "no usable information" at that point.
#[derive(Debug, Clone)]
pub struct Objective<'a, E> {
    evaluator: &'a E,
    expression: &'a str,
    bindings: Variables,
    seek_variable: String,
}

impl<'a, E: Evaluator> Objective<'a, E> {
    /// Creates an objective over `seek_variable`.
    ///
    /// Any value already present for `seek_variable` in `known_values` is
    /// overwritten on every evaluation.
    pub fn new(
        evaluator: &'a E,
        expression: &'a str,
        known_values: &Variables,
        seek_variable: &str,
    ) -> Self {
        let mut bindings = known_values.clone();
        bindings.insert(seek_variable.to_owned(), f64::NAN);

        Self {
            evaluator,
            expression,
            bindings,
            seek_variable: seek_variable.to_owned(),
        }
    }

    #[must_use]
    pub fn seek_variable(&self) -> &str {
        &self.seek_variable
    }

    /// Evaluates the formula with the seek variable bound to `x`.
    ///
    /// Returns `NaN` if the evaluator fails.
    pub fn value(&self, x: f64) -> f64 {
        let mut bindings = self.bindings.clone();
        if let Some(slot) = bindings.get_mut(&self.seek_variable) {
            *slot = x;
        }

        match self.evaluator.evaluate(self.expression, &bindings) {
            Ok(output) => output,
            Err(error) => {
                trace!(x, %error, "evaluation failed, treating as NaN");
                f64::NAN
            }
        }
    }
}
