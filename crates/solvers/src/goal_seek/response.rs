use goalseek_core::Variables;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::Solution;

/// The outcome of a goal seek.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct Response {
    pub formula_name: String,

    pub seek_variable: String,

    pub target_value: f64,

    /// The selected algorithm's result.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub solution: Solution,

    /// The known values with the seek variable set to the solved value.
    pub all_values: Variables,
}
