use goalseek_core::Variables;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A goal-seek request: find `seek_variable` so the formula hits
/// `target_value` with every other variable fixed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Request {
    #[cfg_attr(feature = "serde", serde(default))]
    pub known_values: Variables,

    pub seek_variable: String,

    pub target_value: f64,

    /// Overrides the configured default lower bound.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub lower_bound: Option<f64>,

    /// Overrides the configured default upper bound.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub upper_bound: Option<f64>,

    /// Recenters the search window on this value.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub initial_guess: Option<f64>,
}

impl Request {
    /// Creates a request with no known values and no overrides.
    pub fn new(seek_variable: impl Into<String>, target_value: f64) -> Self {
        Self {
            known_values: Variables::new(),
            seek_variable: seek_variable.into(),
            target_value,
            lower_bound: None,
            upper_bound: None,
            initial_guess: None,
        }
    }

    /// Adds a known value.
    #[must_use]
    pub fn with_known(mut self, variable: impl Into<String>, value: f64) -> Self {
        self.known_values.insert(variable.into(), value);
        self
    }

    /// Adds every entry of `values` to the known values.
    #[must_use]
    pub fn with_known_values(mut self, values: Variables) -> Self {
        self.known_values.extend(values);
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = Some(lower);
        self.upper_bound = Some(upper);
        self
    }

    #[must_use]
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = Some(guess);
        self
    }
}
