use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Point estimate of a success rate with its uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub mean: f64,
    pub std_dev: f64,
}

impl Estimate {
    #[inline]
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

impl Display for Estimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:.6} +/- {:.6}", self.mean, self.std_dev)
    }
}
