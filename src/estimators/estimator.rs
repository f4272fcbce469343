use crate::estimators::{Estimate, EstimateError};

/// Online scalar estimator (e.g., streaming mean).
///
/// Implementations accept values incrementally via [`add`](Estimator::add) and
/// expose the current estimate via [`estimation`](Estimator::estimation).
pub trait Estimator {
    /// Incorporates a new observation.
    fn add(&mut self, v: f64);

    /// Returns the current estimate.
    fn estimation(&self) -> f64;
}

/// Estimates the success rate of a prefix of binary trials.
///
/// Implementations may carry state (a random generator) that advances with
/// every call, hence `&mut self`.
pub trait RateEstimator {
    /// Short label used in logs and chart legends.
    fn name(&self) -> &'static str;

    fn estimate(&mut self, trials: &[bool]) -> Result<Estimate, EstimateError>;
}
