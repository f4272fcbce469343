use std::path::Path;

use crate::config::ExperimentConfig;
use crate::core::TrialSequence;

/// `true, false, true, ...` of length `n`.
pub fn alternating_trials(n: usize) -> TrialSequence {
    TrialSequence::new((0..n).map(|i| i % 2 == 0).collect())
}

/// Default experiment shrunk so rendering tests stay fast, writing under `dir`.
pub fn small_config(dir: &Path) -> ExperimentConfig {
    ExperimentConfig {
        trials: 40,
        curve_resamples: 300,
        histogram_resamples: 500,
        output_dir: dir.to_path_buf(),
        ..ExperimentConfig::default()
    }
}
