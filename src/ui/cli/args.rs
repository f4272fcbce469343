use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::ExperimentConfig;
use crate::evaluation::CurveFormat;
use crate::logging::LogLevel;
use crate::tasks::{RunOptions, TaskKind};

#[derive(Debug, Parser)]
#[command(
    name = "ratecurve",
    version,
    about = "Compare Beta-posterior and bootstrap estimates of a Bernoulli rate"
)]
pub struct Cli {
    /// JSON experiment config; flags below override its fields
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of Bernoulli draws
    #[arg(long, global = true)]
    pub trials: Option<usize>,

    /// Success probability of the synthetic stream
    #[arg(long, global = true)]
    pub true_rate: Option<f64>,

    /// PRNG seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Directory charts are written to
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Log level when RATECURVE_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Args, Default)]
pub struct CurveArgs {
    /// Also write the curve data (csv, tsv or json) next to the chart
    #[arg(long)]
    pub export: Option<CurveFormat>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Bayesian learning curve
    #[command(name = "learncurve")]
    LearnCurve(CurveArgs),

    /// Bootstrap learning curve
    #[command(name = "bslearncurve")]
    BootstrapLearnCurve(CurveArgs),

    /// Bayesian and bootstrap learning curves on one chart
    #[command(name = "bothlc")]
    BothLearnCurves(CurveArgs),

    /// Histogram of bootstrapped means
    #[command(name = "bootstrap")]
    BootstrapHistogram,

    /// Grid of posterior densities at selected prefix lengths
    #[command(name = "selected-bayes-dists")]
    SelectedBayesDists,

    /// Print the effective config as JSON
    Config {
        /// Print the JSON Schema instead
        #[arg(long)]
        schema: bool,
    },
}

impl Command {
    /// The plotting task behind this command, if any.
    pub fn task(&self) -> Option<(TaskKind, RunOptions)> {
        let opts = |a: &CurveArgs| RunOptions { export: a.export };
        match self {
            Command::LearnCurve(a) => Some((TaskKind::LearnCurve, opts(a))),
            Command::BootstrapLearnCurve(a) => Some((TaskKind::BootstrapLearnCurve, opts(a))),
            Command::BothLearnCurves(a) => Some((TaskKind::BothLearnCurves, opts(a))),
            Command::BootstrapHistogram => Some((TaskKind::BootstrapHistogram, RunOptions::default())),
            Command::SelectedBayesDists => Some((TaskKind::SelectedBayesDists, RunOptions::default())),
            Command::Config { .. } => None,
        }
    }
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<ExperimentConfig> {
        let mut config = match &self.config {
            Some(path) => ExperimentConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ExperimentConfig::default(),
        };
        if let Some(n) = self.trials {
            config.trials = n;
        }
        if let Some(r) = self.true_rate {
            config.true_rate = r;
        }
        if let Some(s) = self.seed {
            config.seed = s;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        config.validate()?;
        Ok(config)
    }
}
