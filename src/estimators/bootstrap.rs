use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::estimators::{Estimate, EstimateError, Estimator, MomentsEstimator, RateEstimator};

/// Resamples per point on a learning curve.
pub const CURVE_RESAMPLES: usize = 10_000;
/// Resamples behind the bootstrap histogram.
pub const HISTOGRAM_RESAMPLES: usize = 1_000;

/// Non-parametric bootstrap of the sample mean.
///
/// Each call to [`resample_means`](Bootstrap::resample_means) advances the
/// internal generator, so consecutive estimates differ. Two instances built
/// with the same seed produce bit-identical results on identical input.
#[derive(Debug, Clone)]
pub struct Bootstrap {
    seed: u64,
    rng: StdRng,
    resamples: usize,
    sample_size: Option<usize>,
}

impl Bootstrap {
    pub fn new(resamples: usize, seed: u64) -> Result<Self, EstimateError> {
        if resamples == 0 {
            return Err(EstimateError::InvalidResampleCount);
        }
        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            resamples,
            sample_size: None,
        })
    }

    /// Draws `n` values per resample instead of the input length.
    pub fn with_sample_size(mut self, n: usize) -> Result<Self, EstimateError> {
        if n == 0 {
            return Err(EstimateError::InvalidSampleSize);
        }
        self.sample_size = Some(n);
        Ok(self)
    }

    #[inline]
    pub fn resamples(&self) -> usize {
        self.resamples
    }

    #[inline]
    pub fn sample_size(&self) -> Option<usize> {
        self.sample_size
    }

    /// Restores the generator to its initial state.
    pub fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    /// Means of `resamples` draws-with-replacement from `trials`.
    pub fn resample_means(&mut self, trials: &[bool]) -> Result<Vec<f64>, EstimateError> {
        if trials.is_empty() {
            return Err(EstimateError::EmptySample);
        }
        let n = trials.len();
        let size = self.sample_size.unwrap_or(n);

        let mut means = Vec::with_capacity(self.resamples);
        for _ in 0..self.resamples {
            let hits = (0..size)
                .filter(|_| trials[self.rng.random_range(0..n)])
                .count();
            means.push(hits as f64 / size as f64);
        }
        Ok(means)
    }

    /// Mean and population standard deviation of the resampled means.
    pub fn expectation(&mut self, trials: &[bool]) -> Result<Estimate, EstimateError> {
        let mut moments = MomentsEstimator::default();
        for m in self.resample_means(trials)? {
            moments.add(m);
        }
        Ok(moments.summary())
    }
}

impl RateEstimator for Bootstrap {
    fn name(&self) -> &'static str {
        "bootstrap"
    }

    fn estimate(&mut self, trials: &[bool]) -> Result<Estimate, EstimateError> {
        self.expectation(trials)
    }
}
