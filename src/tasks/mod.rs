mod bootstrap_histogram;
mod learn_curves;
mod posterior_panels;
mod report;
mod task;

pub use report::TaskReport;
pub use task::{RunOptions, TaskKind, run_task};

use anyhow::Result;

use crate::config::ExperimentConfig;
use crate::core::TrialSequence;
use crate::estimators::{BetaPosterior, Bootstrap};
use crate::streams::TrialStream;
use crate::streams::generators::BernoulliGenerator;

/// Fresh synthetic run drawn from the configured rate and seed.
pub(crate) fn generate_trials(config: &ExperimentConfig) -> Result<TrialSequence> {
    let mut generator = BernoulliGenerator::new(config.true_rate, Some(config.trials), config.seed)?;
    Ok(generator.take_sequence(config.trials))
}

pub(crate) fn posterior_for(config: &ExperimentConfig) -> Result<BetaPosterior> {
    Ok(BetaPosterior::new(config.prior_alpha, config.prior_beta)?)
}

/// Bootstrap generator seeded one past the data seed so the two streams differ.
pub(crate) fn bootstrap_for(config: &ExperimentConfig, resamples: usize) -> Result<Bootstrap> {
    let bs = Bootstrap::new(resamples, config.seed.wrapping_add(1))?;
    Ok(match config.bootstrap_sample_size {
        Some(n) => bs.with_sample_size(n)?,
        None => bs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_run_has_configured_length() {
        let config = ExperimentConfig::default();
        let trials = generate_trials(&config).unwrap();
        assert_eq!(trials.len(), 150);
        assert_eq!(trials, generate_trials(&config).unwrap());
    }

    #[test]
    fn bootstrap_honours_sample_size() {
        let config = ExperimentConfig {
            bootstrap_sample_size: Some(150),
            ..ExperimentConfig::default()
        };
        let bs = bootstrap_for(&config, 10).unwrap();
        assert_eq!(bs.sample_size(), Some(150));
        assert_eq!(bs.resamples(), 10);
    }
}
