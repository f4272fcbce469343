use rand::SeedableRng;
use rand::distr::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use thiserror::Error;

use crate::streams::stream::TrialStream;

#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    #[error("success rate must be in [0, 1], got {0}")]
    InvalidRate(f64),
}

/// Fixed-rate Bernoulli process.
#[derive(Debug)]
pub struct BernoulliGenerator {
    seed: u64,
    rng: StdRng,
    rate: f64,
    dist: Bernoulli,
    max_trials: Option<usize>,
    produced: usize,
}

impl BernoulliGenerator {
    pub fn new(rate: f64, max_trials: Option<usize>, seed: u64) -> Result<Self, GeneratorError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(GeneratorError::InvalidRate(rate));
        }
        let dist = Bernoulli::new(rate).map_err(|_| GeneratorError::InvalidRate(rate))?;

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            rate,
            dist,
            max_trials,
            produced: 0,
        })
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn produced(&self) -> usize {
        self.produced
    }
}

impl TrialStream for BernoulliGenerator {
    fn has_more_trials(&self) -> bool {
        self.max_trials.map_or(true, |max| self.produced < max)
    }

    fn next_trial(&mut self) -> Option<bool> {
        if !self.has_more_trials() {
            return None;
        }
        let outcome = self.dist.sample(&mut self.rng);
        self.produced += 1;
        Some(outcome)
    }

    fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
    }
}
