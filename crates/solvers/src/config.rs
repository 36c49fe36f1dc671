#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Criteria;

/// Goal-seek configuration.
///
/// Applies to every seek unless a request overrides the bounds.
/// With the `serde` feature, keys are kebab-case (`max-iterations`,
/// `default-lower-bound`, ...) and missing keys take their defaults.
/// Deserialized values are validated like [`Config::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case", try_from = "Fields")
)]
pub struct Config {
    max_iterations: usize,
    tolerance: f64,
    default_lower_bound: f64,
    default_upper_bound: f64,
    relaxed_factor: f64,
}

/// Errors that can occur when validating a [`Config`] or [`Criteria`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("default bounds must be finite with lower < upper")]
    Bounds,

    #[error("relaxed factor must be finite and at least 1")]
    RelaxedFactor,
}

impl Default for Config {
    fn default() -> Self {
        let criteria = Criteria::default();
        Self {
            max_iterations: criteria.max_iters,
            tolerance: criteria.tolerance,
            default_lower_bound: -1_000_000.0,
            default_upper_bound: 1_000_000.0,
            relaxed_factor: criteria.relaxed_factor,
        }
    }
}

impl Config {
    /// Creates a config with the default relaxed factor.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive, or if the
    /// default bounds are not finite with `lower < upper`.
    pub fn new(
        max_iterations: usize,
        tolerance: f64,
        default_bounds: [f64; 2],
    ) -> Result<Self, ConfigError> {
        let [lower, upper] = default_bounds;
        Self {
            max_iterations,
            tolerance,
            default_lower_bound: lower,
            default_upper_bound: upper,
            ..Self::default()
        }
        .validate()
    }

    /// Replaces the factor applied to the tolerance once the iteration
    /// budget is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RelaxedFactor`] if `factor` is not finite or is
    /// less than 1.
    pub fn with_relaxed_factor(self, factor: f64) -> Result<Self, ConfigError> {
        Self {
            relaxed_factor: factor,
            ..self
        }
        .validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !self.default_lower_bound.is_finite()
            || !self.default_upper_bound.is_finite()
            || self.default_lower_bound >= self.default_upper_bound
        {
            return Err(ConfigError::Bounds);
        }
        if !self.relaxed_factor.is_finite() || self.relaxed_factor < 1.0 {
            return Err(ConfigError::RelaxedFactor);
        }
        Ok(self)
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns `[lower, upper]` used when a request gives no bounds.
    #[must_use]
    pub fn default_bounds(&self) -> [f64; 2] {
        [self.default_lower_bound, self.default_upper_bound]
    }

    #[must_use]
    pub fn relaxed_factor(&self) -> f64 {
        self.relaxed_factor
    }

    /// Returns the convergence criteria passed to each algorithm.
    #[must_use]
    pub fn criteria(&self) -> Criteria {
        Criteria {
            max_iters: self.max_iterations,
            tolerance: self.tolerance,
            relaxed_factor: self.relaxed_factor,
        }
    }
}

/// Unvalidated config fields as read from a serialized source.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct Fields {
    max_iterations: usize,
    tolerance: f64,
    default_lower_bound: f64,
    default_upper_bound: f64,
    relaxed_factor: f64,
}

#[cfg(feature = "serde")]
impl Default for Fields {
    fn default() -> Self {
        let config = Config::default();
        Self {
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
            default_lower_bound: config.default_lower_bound,
            default_upper_bound: config.default_upper_bound,
            relaxed_factor: config.relaxed_factor,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Fields> for Config {
    type Error = ConfigError;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        Config {
            max_iterations: fields.max_iterations,
            tolerance: fields.tolerance,
            default_lower_bound: fields.default_lower_bound,
            default_upper_bound: fields.default_upper_bound,
            relaxed_factor: fields.relaxed_factor,
        }
        .validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.max_iterations(), 1000);
        assert_relative_eq!(config.tolerance(), 1e-10);
        assert_eq!(config.default_bounds(), [-1_000_000.0, 1_000_000.0]);
        assert_relative_eq!(config.relaxed_factor(), 100.0);
        assert_eq!(config.criteria(), Criteria::default());
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            Config::new(10, 0.0, [0.0, 1.0]),
            Err(ConfigError::Tolerance)
        );
        assert_eq!(
            Config::new(10, 1e-6, [1.0, 1.0]),
            Err(ConfigError::Bounds)
        );
        assert_eq!(
            Config::new(10, 1e-6, [f64::NEG_INFINITY, 1.0]),
            Err(ConfigError::Bounds)
        );
        assert_eq!(
            Config::default().with_relaxed_factor(f64::NAN),
            Err(ConfigError::RelaxedFactor)
        );
    }

    #[test]
    fn criteria_follow_config() {
        let config = Config::new(40, 1e-6, [-5.0, 5.0])
            .and_then(|c| c.with_relaxed_factor(10.0))
            .expect("valid config");
        let criteria = config.criteria();

        assert_eq!(criteria.max_iters(), 40);
        assert_relative_eq!(criteria.tolerance(), 1e-6);
        assert_relative_eq!(criteria.relaxed_factor(), 10.0);
    }
}
