use thiserror::Error;

/// Errors that reject a goal-seek request before any algorithm runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequestError {
    #[error("seek variable '{variable}' is not a valid variable in formula '{formula}'")]
    UnknownSeekVariable { variable: String, formula: String },

    #[error("missing value for variable: {variable}")]
    MissingValue { variable: String },

    #[error("invalid search bounds [{lower}, {upper}]")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("initial guess must be finite, got {value}")]
    NonFiniteInitialGuess { value: f64 },

    #[error("target value must be finite, got {value}")]
    NonFiniteTarget { value: f64 },
}
