use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimateError {
    #[error("prior pseudo-counts must be finite and > 0, got alpha={alpha}, beta={beta}")]
    InvalidPrior { alpha: f64, beta: f64 },

    #[error("bootstrap needs at least one resample")]
    InvalidResampleCount,

    #[error("bootstrap sample size must be > 0")]
    InvalidSampleSize,

    #[error("cannot resample from an empty trial prefix")]
    EmptySample,
}
