use crate::Algorithm;

/// Events emitted by the root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A sign-changing interval was established.
    Bracket {
        algorithm: Algorithm,
        bracket: [f64; 2],
    },

    /// A refinement step completed.
    Step {
        algorithm: Algorithm,

        /// Completed steps so far, starting at 1.
        iter: usize,

        /// The current best estimate.
        x: f64,

        /// Signed residual `f(x) - target` at `x`.
        residual: f64,
    },
}

impl Event {
    /// Returns the algorithm that emitted the event.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bracket { algorithm, .. } | Self::Step { algorithm, .. } => *algorithm,
        }
    }

    /// Returns the residual for step events.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        match self {
            Self::Bracket { .. } => None,
            Self::Step { residual, .. } => Some(*residual),
        }
    }
}
