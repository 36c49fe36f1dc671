use crate::Variables;

/// An expression engine that evaluates a formula expression.
///
/// Implementations are expected to be pure: evaluating the same expression
/// with the same bindings always yields the same result.
pub trait Evaluator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates `expression` with the given variable bindings.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is malformed or cannot be evaluated
    /// at the supplied values (for example, a division by zero).
    fn evaluate(&self, expression: &str, variables: &Variables) -> Result<f64, Self::Error>;
}

/// Blanket implementation for evaluator closures.
impl<F, E> Evaluator for F
where
    F: Fn(&str, &Variables) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, expression: &str, variables: &Variables) -> Result<f64, Self::Error> {
        self(expression, variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    fn evaluate_with<E: Evaluator>(evaluator: &E, variables: &Variables) -> f64 {
        evaluator
            .evaluate("x + y", variables)
            .unwrap_or(f64::NAN)
    }

    #[test]
    fn closures_are_evaluators() {
        let sum = |_: &str, variables: &Variables| -> Result<f64, Infallible> {
            Ok(variables.values().sum())
        };

        let variables = Variables::from([("x".to_string(), 1.5), ("y".to_string(), 2.0)]);

        assert_relative_eq!(evaluate_with(&sum, &variables), 3.5);
    }
}
