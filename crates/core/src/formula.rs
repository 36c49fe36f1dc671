use std::collections::BTreeMap;

use thiserror::Error;

use crate::Evaluator;

/// Named variable values.
///
/// Ordered by name so derived mappings and log output are deterministic.
pub type Variables = BTreeMap<String, f64>;

/// Errors that can occur when evaluating a [`Formula`] directly.
#[derive(Debug, Error)]
pub enum EvaluateError<E> {
    #[error("missing value for variable: {variable}")]
    MissingValue { variable: String },

    #[error("formula evaluation failed")]
    Evaluator(#[source] E),
}

/// A read-only formula descriptor.
///
/// Variables keep their declaration order; duplicates are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    name: String,
    expression: String,
    variables: Vec<String>,
}

impl Formula {
    /// Creates a formula descriptor.
    pub fn new<V>(
        name: impl Into<String>,
        expression: impl Into<String>,
        variables: impl IntoIterator<Item = V>,
    ) -> Self
    where
        V: Into<String>,
    {
        let mut declared: Vec<String> = Vec::new();
        for variable in variables {
            let variable = variable.into();
            if !declared.contains(&variable) {
                declared.push(variable);
            }
        }

        Self {
            name: name.into(),
            expression: expression.into(),
            variables: declared,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns the declared variables in declaration order.
    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Returns true if the formula declares `variable`.
    #[must_use]
    pub fn declares(&self, variable: &str) -> bool {
        self.variables.iter().any(|v| v == variable)
    }

    /// Returns the declared variables, other than `seek_variable`, that have
    /// no entry in `known`.
    pub fn missing_values<'a>(
        &'a self,
        seek_variable: &'a str,
        known: &'a Variables,
    ) -> impl Iterator<Item = &'a str> {
        self.variables
            .iter()
            .map(String::as_str)
            .filter(move |v| *v != seek_variable && !known.contains_key(*v))
    }

    /// Evaluates the formula with every declared variable bound.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::MissingValue`] for the first declared variable
    /// without a value, or [`EvaluateError::Evaluator`] if the evaluator fails.
    pub fn evaluate<E: Evaluator>(
        &self,
        evaluator: &E,
        values: &Variables,
    ) -> Result<f64, EvaluateError<E::Error>> {
        if let Some(missing) = self.variables.iter().find(|v| !values.contains_key(*v)) {
            return Err(EvaluateError::MissingValue {
                variable: missing.clone(),
            });
        }

        evaluator
            .evaluate(&self.expression, values)
            .map_err(EvaluateError::Evaluator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[derive(Debug, Error)]
    #[error("unsupported expression")]
    struct Unsupported;

    /// Evaluates `P * R * T / 100`; everything else is unsupported.
    struct SimpleInterest;

    impl Evaluator for SimpleInterest {
        type Error = Unsupported;

        fn evaluate(&self, expression: &str, v: &Variables) -> Result<f64, Self::Error> {
            match expression {
                "P * R * T / 100" => Ok(v["P"] * v["R"] * v["T"] / 100.0),
                _ => Err(Unsupported),
            }
        }
    }

    fn simple_interest() -> Formula {
        Formula::new("SIMPLE_INTEREST", "P * R * T / 100", ["P", "R", "T"])
    }

    fn values(pairs: &[(&str, f64)]) -> Variables {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn new_drops_duplicate_variables_in_order() {
        let formula = Formula::new("f", "a + b", ["b", "a", "b"]);
        assert_eq!(formula.variables(), ["b", "a"]);
    }

    #[test]
    fn declares_checks_variables() {
        let formula = simple_interest();
        assert!(formula.declares("R"));
        assert!(!formula.declares("r"));
    }

    #[test]
    fn missing_values_skips_seek_and_known() {
        let formula = simple_interest();
        let known = values(&[("P", 1000.0)]);

        let missing: Vec<_> = formula.missing_values("R", &known).collect();
        assert_eq!(missing, ["T"]);

        let known = values(&[("P", 1000.0), ("T", 2.0)]);
        assert_eq!(formula.missing_values("R", &known).count(), 0);
    }

    #[test]
    fn evaluate_computes_value() {
        let formula = simple_interest();
        let result = formula
            .evaluate(&SimpleInterest, &values(&[("P", 1000.0), ("R", 5.0), ("T", 2.0)]))
            .expect("all values present");

        assert_relative_eq!(result, 100.0);
    }

    #[test]
    fn evaluate_reports_missing_value() {
        let formula = simple_interest();
        let result = formula.evaluate(&SimpleInterest, &values(&[("P", 1000.0), ("T", 2.0)]));

        assert!(matches!(
            result,
            Err(EvaluateError::MissingValue { variable }) if variable == "R"
        ));
    }

    #[test]
    fn evaluate_propagates_evaluator_error() {
        let formula = Formula::new("ROI", "unknown", ["x"]);
        let result = formula.evaluate(&SimpleInterest, &values(&[("x", 1.0)]));

        assert!(matches!(result, Err(EvaluateError::Evaluator(Unsupported))));
    }
}
