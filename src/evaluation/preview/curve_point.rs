use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

use crate::estimators::Estimate;

/// One learning-curve sample: the estimate after `trials` observations.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct CurvePoint {
    pub trials: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl CurvePoint {
    pub fn new(trials: usize, estimate: Estimate) -> Self {
        Self {
            trials,
            mean: estimate.mean,
            std_dev: estimate.std_dev,
        }
    }

    #[inline]
    pub fn estimate(&self) -> Estimate {
        Estimate::new(self.mean, self.std_dev)
    }
}

impl Display for CurvePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "trials={}, mean={:.6}, std={:.6}",
            self.trials, self.mean, self.std_dev
        )
    }
}
