//! The goal-seek orchestrator.
//!
//! [`GoalSeeker::seek`] validates a [`Request`] against its [`Formula`],
//! resolves the search bounds, and runs [`Algorithm::PRIMARY`]. If that does
//! not converge, the remaining algorithms run in order. An alternate replaces
//! the running best if it converges or has a strictly lower error, and the
//! first converged alternate ends the search.

mod error;
mod request;
mod response;

pub use error::RequestError;
pub use request::Request;
pub use response::Response;

use goalseek_core::{EvaluateError, Evaluator, Formula, Objective, Observer, Variables};
use tracing::{debug, info, instrument, warn};

use crate::{Algorithm, Config, Event, Solution};

/// Runs goal seeks with a fixed configuration and fallback order.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalSeeker {
    config: Config,
    fallbacks: Vec<Algorithm>,
}

impl Default for GoalSeeker {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl GoalSeeker {
    /// Creates a seeker that falls back through [`Algorithm::REGISTRY`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            fallbacks: Algorithm::REGISTRY.to_vec(),
        }
    }

    /// Replaces the fallback order.
    ///
    /// [`Algorithm::PRIMARY`] always runs first and is skipped if listed.
    #[must_use]
    pub fn with_fallbacks(mut self, fallbacks: impl IntoIterator<Item = Algorithm>) -> Self {
        self.fallbacks = fallbacks.into_iter().collect();
        self
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn fallbacks(&self) -> &[Algorithm] {
        &self.fallbacks
    }

    /// Finds the value of the request's seek variable that makes `formula`
    /// evaluate to the target.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the request is invalid. Failing to find a
    /// root is not an error; check [`Solution::converged`] on the response.
    pub fn seek<E: Evaluator>(
        &self,
        evaluator: &E,
        formula: &Formula,
        request: &Request,
    ) -> Result<Response, RequestError> {
        self.seek_observed(evaluator, formula, request, &mut ())
    }

    /// Like [`seek`](Self::seek), forwarding every algorithm's events to
    /// `observer`.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the request is invalid.
    #[instrument(
        skip_all,
        fields(
            formula = formula.name(),
            seek = %request.seek_variable,
            target_value = request.target_value,
        )
    )]
    pub fn seek_observed<E, Obs>(
        &self,
        evaluator: &E,
        formula: &Formula,
        request: &Request,
        observer: &mut Obs,
    ) -> Result<Response, RequestError>
    where
        E: Evaluator,
        Obs: Observer<Event>,
    {
        validate(formula, request)?;
        let bounds = self.resolve_bounds(request)?;
        debug!(lower = bounds[0], upper = bounds[1], "resolved bounds");

        let objective = Objective::new(
            evaluator,
            formula.expression(),
            &request.known_values,
            &request.seek_variable,
        );
        let f = |x| objective.value(x);

        let solution = self.run(&f, request.target_value, bounds, observer);

        info!(
            algorithm = %solution.algorithm,
            converged = solution.converged,
            value = solution.value,
            error = solution.error,
            iterations = solution.iterations,
            "goal seek finished"
        );

        let mut all_values = request.known_values.clone();
        all_values.insert(request.seek_variable.clone(), solution.value);

        Ok(Response {
            formula_name: formula.name().to_owned(),
            seek_variable: request.seek_variable.clone(),
            target_value: request.target_value,
            solution,
            all_values,
        })
    }

    /// Evaluates `formula` directly with every declared variable bound.
    ///
    /// # Errors
    ///
    /// Returns an error if a declared variable has no value or the evaluator
    /// fails.
    pub fn evaluate<E: Evaluator>(
        &self,
        evaluator: &E,
        formula: &Formula,
        values: &Variables,
    ) -> Result<f64, EvaluateError<E::Error>> {
        formula.evaluate(evaluator, values)
    }

    /// Resolves the search interval for a request.
    ///
    /// Explicit bounds override the configured defaults. An initial guess
    /// recenters the window on the guess with width
    /// `max(|guess| * 10, upper - lower)`.
    fn resolve_bounds(&self, request: &Request) -> Result<[f64; 2], RequestError> {
        let [default_lower, default_upper] = self.config.default_bounds();
        let mut lower = request.lower_bound.unwrap_or(default_lower);
        let mut upper = request.upper_bound.unwrap_or(default_upper);

        if let Some(guess) = request.initial_guess {
            if !guess.is_finite() {
                return Err(RequestError::NonFiniteInitialGuess { value: guess });
            }
            let range = (guess.abs() * 10.0).max(upper - lower);
            lower = guess - range / 2.0;
            upper = guess + range / 2.0;
        }

        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(RequestError::InvalidBounds { lower, upper });
        }

        Ok([lower, upper])
    }

    /// Runs the primary algorithm, then the fallbacks until one converges.
    fn run<F, Obs>(&self, f: &F, target: f64, bounds: [f64; 2], observer: &mut Obs) -> Solution
    where
        F: Fn(f64) -> f64,
        Obs: Observer<Event>,
    {
        let criteria = self.config.criteria();

        let mut best = Algorithm::PRIMARY.solve(f, target, bounds, &criteria, observer);
        if best.converged {
            return best;
        }

        warn!(
            algorithm = %best.algorithm,
            status = best.message,
            "primary algorithm failed, trying fallbacks"
        );

        for algorithm in self
            .fallbacks
            .iter()
            .copied()
            .filter(|&a| a != Algorithm::PRIMARY)
        {
            let candidate = algorithm.solve(f, target, bounds, &criteria, observer);
            debug!(
                %algorithm,
                converged = candidate.converged,
                error = candidate.error,
                "fallback finished"
            );

            if candidate.converged || candidate.error < best.error {
                best = candidate;
                if best.converged {
                    break;
                }
            }
        }

        best
    }
}

/// Checks that the seek variable is declared and every other declared
/// variable has a known value.
fn validate(formula: &Formula, request: &Request) -> Result<(), RequestError> {
    if !formula.declares(&request.seek_variable) {
        return Err(RequestError::UnknownSeekVariable {
            variable: request.seek_variable.clone(),
            formula: formula.name().to_owned(),
        });
    }

    if let Some(missing) = formula
        .missing_values(&request.seek_variable, &request.known_values)
        .next()
    {
        return Err(RequestError::MissingValue {
            variable: missing.to_owned(),
        });
    }

    if !request.target_value.is_finite() {
        return Err(RequestError::NonFiniteTarget {
            value: request.target_value,
        });
    }

    Ok(())
}
