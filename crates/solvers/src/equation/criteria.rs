use crate::ConfigError;

/// Convergence criteria shared by every root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criteria {
    pub(crate) max_iters: usize,
    pub(crate) tolerance: f64,
    pub(crate) relaxed_factor: f64,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            tolerance: 1e-10,
            relaxed_factor: 100.0,
        }
    }
}

impl Criteria {
    /// Creates criteria with the default relaxed factor of 100.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if `tolerance` is not finite and
    /// positive.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            tolerance,
            ..Self::default()
        })
    }

    /// Replaces the factor applied to the tolerance once the iteration
    /// budget is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RelaxedFactor`] if `factor` is not finite or is
    /// less than 1.
    pub fn with_relaxed_factor(self, factor: f64) -> Result<Self, ConfigError> {
        if !factor.is_finite() || factor < 1.0 {
            return Err(ConfigError::RelaxedFactor);
        }

        Ok(Self {
            relaxed_factor: factor,
            ..self
        })
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn relaxed_factor(&self) -> f64 {
        self.relaxed_factor
    }

    /// Returns true if `|value| < tolerance`.
    #[must_use]
    pub fn is_met(&self, value: f64) -> bool {
        value.abs() < self.tolerance
    }

    /// Returns true if `|value| < tolerance * relaxed_factor`.
    ///
    /// Applied only after the iteration budget runs out.
    #[must_use]
    pub fn is_nearly_met(&self, value: f64) -> bool {
        value.abs() < self.tolerance * self.relaxed_factor
    }

    /// Number of probing passes allowed when searching for a bracket.
    pub(crate) fn bracket_attempts(&self) -> usize {
        self.max_iters / 4
    }
}
