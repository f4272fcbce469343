use serde::Serialize;
use statrs::distribution::{Beta, Continuous};

use crate::core::count_successes;
use crate::estimators::{Estimate, EstimateError, RateEstimator};

/// Symmetric Jeffreys prior pseudo-count.
pub const JEFFREYS_PRIOR: f64 = 0.5;

/// Parameters of a Beta distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BetaCoefficients {
    pub alpha: f64,
    pub beta: f64,
}

impl BetaCoefficients {
    #[inline]
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    pub fn variance(&self) -> f64 {
        let s = self.alpha + self.beta;
        self.alpha * self.beta / (s * s * (s + 1.0))
    }

    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Probability density at `x`; zero outside `[0, 1]`.
    ///
    /// Unbounded at the endpoints when either parameter is below one.
    pub fn density(&self, x: f64) -> f64 {
        self.density_at(&[x]).first().copied().unwrap_or(f64::NAN)
    }

    /// Density evaluated at each point of `xs`.
    pub fn density_at(&self, xs: &[f64]) -> Vec<f64> {
        match Beta::new(self.alpha, self.beta) {
            Ok(dist) => xs.iter().map(|&x| dist.pdf(x)).collect(),
            Err(_) => vec![f64::NAN; xs.len()],
        }
    }

    pub fn summary(&self) -> Estimate {
        Estimate::new(self.mean(), self.std_dev())
    }
}

/// Closed-form Beta-Bernoulli posterior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaPosterior {
    prior: BetaCoefficients,
}

impl BetaPosterior {
    pub fn new(prior_alpha: f64, prior_beta: f64) -> Result<Self, EstimateError> {
        let valid = |p: f64| p.is_finite() && p > 0.0;
        if !valid(prior_alpha) || !valid(prior_beta) {
            return Err(EstimateError::InvalidPrior {
                alpha: prior_alpha,
                beta: prior_beta,
            });
        }
        Ok(Self {
            prior: BetaCoefficients {
                alpha: prior_alpha,
                beta: prior_beta,
            },
        })
    }

    pub fn jeffreys() -> Self {
        Self {
            prior: BetaCoefficients {
                alpha: JEFFREYS_PRIOR,
                beta: JEFFREYS_PRIOR,
            },
        }
    }

    #[inline]
    pub fn prior(&self) -> BetaCoefficients {
        self.prior
    }

    /// Posterior parameters after observing `trials`.
    pub fn coefficients(&self, trials: &[bool]) -> BetaCoefficients {
        let successes = count_successes(trials);
        let failures = trials.len() - successes;
        BetaCoefficients {
            alpha: self.prior.alpha + successes as f64,
            beta: self.prior.beta + failures as f64,
        }
    }

    /// Posterior mean and standard deviation after observing `trials`.
    pub fn posterior(&self, trials: &[bool]) -> Estimate {
        self.coefficients(trials).summary()
    }
}

impl Default for BetaPosterior {
    fn default() -> Self {
        Self::jeffreys()
    }
}

impl RateEstimator for BetaPosterior {
    fn name(&self) -> &'static str {
        "bayes"
    }

    fn estimate(&mut self, trials: &[bool]) -> Result<Estimate, EstimateError> {
        Ok(self.posterior(trials))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn invalid_priors_are_rejected() {
        assert!(BetaPosterior::new(0.0, 1.0).is_err());
        assert!(BetaPosterior::new(1.0, -2.0).is_err());
        assert!(BetaPosterior::new(f64::INFINITY, 1.0).is_err());
        assert!(matches!(
            BetaPosterior::new(f64::NAN, 1.0),
            Err(EstimateError::InvalidPrior { .. })
        ));
        assert!(BetaPosterior::new(2.0, 3.0).is_ok());
    }

    #[test]
    fn coefficients_add_counts_to_prior() {
        let bp = BetaPosterior::default();
        let c = bp.coefficients(&[true, false, true, true]);
        assert_eq!(c, BetaCoefficients { alpha: 3.5, beta: 1.5 });
    }

    #[test]
    fn empty_prefix_returns_the_prior() {
        let e = BetaPosterior::jeffreys().posterior(&[]);
        assert!(close(e.mean, 0.5));
        assert!(close(e.std_dev * e.std_dev, 0.125));
    }

    #[test]
    fn all_successes_mean_is_shifted_by_the_prior() {
        let bp = BetaPosterior::jeffreys();
        for k in [1usize, 2, 5, 37, 149] {
            let trials = vec![true; k];
            let e = bp.posterior(&trials);
            let want = (k as f64 + 0.5) / (k as f64 + 1.0);
            assert!(close(e.mean, want), "k={k}: got {} want {want}", e.mean);
        }
    }

    #[test]
    fn variance_matches_closed_form() {
        let c = BetaCoefficients { alpha: 2.0, beta: 3.0 };
        assert!(close(c.mean(), 0.4));
        assert!(close(c.variance(), 6.0 / (25.0 * 6.0)));
    }

    #[test]
    fn density_uses_beta_pdf() {
        let uniform = BetaCoefficients { alpha: 1.0, beta: 1.0 };
        assert!((uniform.density(0.3) - 1.0).abs() < 1e-9);

        let c = BetaCoefficients { alpha: 2.0, beta: 2.0 };
        assert!((c.density(0.5) - 1.5).abs() < 1e-9);
        assert_eq!(c.density_at(&[0.25, 0.75]).len(), 2);
    }

    #[test]
    fn std_dev_shrinks_with_more_trials() {
        use crate::streams::TrialStream;
        use crate::streams::generators::BernoulliGenerator;

        let bp = BetaPosterior::jeffreys();
        for seed in [1u64, 2, 3, 42, 1234] {
            let mut generator = BernoulliGenerator::new(0.86, None, seed).unwrap();
            let trials = generator.take_sequence(150);
            let short = bp.posterior(trials.prefix(10)).std_dev;
            let long = bp.posterior(trials.prefix(150)).std_dev;
            assert!(long < short, "seed={seed}: {long} !< {short}");
        }
    }

    #[test]
    fn rate_estimator_never_fails() {
        let mut bp = BetaPosterior::jeffreys();
        assert_eq!(bp.name(), "bayes");
        assert!(bp.estimate(&[]).is_ok());
    }
}
