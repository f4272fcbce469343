mod beta_posterior;
mod bootstrap;
mod error;
mod estimate;
mod estimator;
mod moments;

pub use beta_posterior::{BetaCoefficients, BetaPosterior, JEFFREYS_PRIOR};
pub use bootstrap::{Bootstrap, CURVE_RESAMPLES, HISTOGRAM_RESAMPLES};
pub use error::EstimateError;
pub use estimate::Estimate;
pub use estimator::{Estimator, RateEstimator};
pub use moments::MomentsEstimator;
