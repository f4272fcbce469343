use anyhow::Result;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::config::ExperimentConfig;
use crate::evaluation::CurveFormat;
use crate::tasks::{TaskReport, bootstrap_histogram, learn_curves, posterior_panels};

/// The plotting commands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumMessage, EnumString, IntoStaticStr,
)]
pub enum TaskKind {
    #[strum(
        to_string = "learncurve",
        message = "Bayesian learning curve",
        detailed_message = "Beta-posterior mean and std over growing prefixes."
    )]
    LearnCurve,

    #[strum(
        to_string = "bslearncurve",
        message = "Bootstrap learning curve",
        detailed_message = "Bootstrapped mean and std over growing prefixes."
    )]
    BootstrapLearnCurve,

    #[strum(
        to_string = "bothlc",
        message = "Overlay both learning curves",
        detailed_message = "Bayes (blue) and bootstrap (green) on one chart."
    )]
    BothLearnCurves,

    #[strum(
        to_string = "bootstrap",
        message = "Bootstrap histogram",
        detailed_message = "Distribution of resampled means over the full run."
    )]
    BootstrapHistogram,

    #[strum(
        to_string = "selected-bayes-dists",
        message = "Posterior densities",
        detailed_message = "Grid of Beta posteriors at selected prefix lengths."
    )]
    SelectedBayesDists,
}

impl TaskKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            TaskKind::LearnCurve => "learncurvebayes.svg",
            TaskKind::BootstrapLearnCurve => "learncurvebootstrap.svg",
            TaskKind::BothLearnCurves => "learncurve-both.svg",
            TaskKind::BootstrapHistogram => "histogram.svg",
            TaskKind::SelectedBayesDists => "distributions.svg",
        }
    }

    pub fn draws_curve(&self) -> bool {
        matches!(
            self,
            TaskKind::LearnCurve | TaskKind::BootstrapLearnCurve | TaskKind::BothLearnCurves
        )
    }
}

/// Per-invocation switches that are not part of the experiment itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Also write learning-curve data next to the chart.
    pub export: Option<CurveFormat>,
}

pub fn run_task(kind: TaskKind, config: &ExperimentConfig, opts: RunOptions) -> Result<TaskReport> {
    config.validate()?;
    if kind.draws_curve() {
        config.validate_curve()?;
    }
    match kind {
        TaskKind::LearnCurve => learn_curves::bayes(config, opts),
        TaskKind::BootstrapLearnCurve => learn_curves::bootstrap(config, opts),
        TaskKind::BothLearnCurves => learn_curves::overlay(config, opts),
        TaskKind::BootstrapHistogram => bootstrap_histogram::run(config),
        TaskKind::SelectedBayesDists => posterior_panels::run(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::small_config;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn command_names_parse() {
        assert_eq!(TaskKind::from_str("bothlc").unwrap(), TaskKind::BothLearnCurves);
        assert_eq!(
            TaskKind::from_str("selected-bayes-dists").unwrap(),
            TaskKind::SelectedBayesDists
        );
        assert_eq!(TaskKind::BootstrapLearnCurve.to_string(), "bslearncurve");
    }

    #[test]
    fn every_task_has_a_message_and_distinct_file() {
        let mut files = HashSet::new();
        for k in TaskKind::iter() {
            assert!(k.get_message().is_some(), "{k} has no message");
            assert!(k.get_detailed_message().is_some());
            assert!(files.insert(k.file_name()));
        }
        assert_eq!(files.len(), 5);
    }

    #[test]
    fn single_trial_runs_everything_but_curves() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExperimentConfig {
            trials: 1,
            ..small_config(dir.path())
        };
        for kind in TaskKind::iter() {
            let result = run_task(kind, &config, RunOptions::default());
            assert_eq!(result.is_ok(), !kind.draws_curve(), "{kind}");
        }
        assert!(dir.path().join("histogram.svg").exists());
        assert!(dir.path().join("distributions.svg").exists());
    }

    #[test]
    fn invalid_config_is_rejected_before_running() {
        let config = ExperimentConfig {
            true_rate: 2.0,
            ..ExperimentConfig::default()
        };
        assert!(run_task(TaskKind::LearnCurve, &config, RunOptions::default()).is_err());
    }
}
