use std::fs;
use std::path::{Path, PathBuf};

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::estimators::{CURVE_RESAMPLES, HISTOGRAM_RESAMPLES, JEFFREYS_PRIOR};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets/images")
}

/// Constants shared by every command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    #[schemars(
        title = "Trials",
        description = "Number of Bernoulli draws per run",
        range(min = 1)
    )]
    pub trials: usize,

    #[schemars(
        title = "True Rate",
        description = "Success probability of the synthetic stream",
        range(min = 0.0, max = 1.0)
    )]
    pub true_rate: f64,

    #[schemars(title = "Seed", description = "PRNG seed")]
    pub seed: u64,

    #[schemars(title = "Curve Start", description = "First prefix length on learning curves")]
    pub curve_start: usize,

    #[schemars(
        title = "Curve Step",
        description = "Prefix length increment on learning curves",
        range(min = 1)
    )]
    pub curve_step: usize,

    #[schemars(title = "Prior Alpha", description = "Prior pseudo-count of successes")]
    pub prior_alpha: f64,

    #[schemars(title = "Prior Beta", description = "Prior pseudo-count of failures")]
    pub prior_beta: f64,

    #[schemars(
        title = "Curve Resamples",
        description = "Bootstrap resamples per learning-curve point",
        range(min = 1)
    )]
    pub curve_resamples: usize,

    #[schemars(
        title = "Histogram Resamples",
        description = "Bootstrap resamples behind the histogram",
        range(min = 1)
    )]
    pub histogram_resamples: usize,

    #[schemars(
        title = "Histogram Edges",
        description = "Number of evenly spaced bin edges on [0, 1]",
        range(min = 2)
    )]
    pub histogram_edges: usize,

    #[schemars(
        title = "Bootstrap Sample Size",
        description = "Draws per resample (None = prefix length)"
    )]
    pub bootstrap_sample_size: Option<usize>,

    #[schemars(title = "Panel Y Max", description = "Upper y limit of posterior panels")]
    pub panel_y_max: f64,

    #[schemars(title = "Output Directory", description = "Where charts are written")]
    pub output_dir: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: 150,
            true_rate: 0.86,
            seed: 1,
            curve_start: 1,
            curve_step: 4,
            prior_alpha: JEFFREYS_PRIOR,
            prior_beta: JEFFREYS_PRIOR,
            curve_resamples: CURVE_RESAMPLES,
            histogram_resamples: HISTOGRAM_RESAMPLES,
            histogram_edges: 50,
            bootstrap_sample_size: None,
            panel_y_max: 13.0,
            output_dir: default_output_dir(),
        }
    }
}

impl ExperimentConfig {
    /// Reads a JSON config; absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::InvalidParameter(msg));

        if self.trials == 0 {
            return invalid("trials must be > 0".into());
        }
        if !(0.0..=1.0).contains(&self.true_rate) {
            return invalid(format!("true_rate must be in [0, 1], got {}", self.true_rate));
        }
        if self.curve_step == 0 {
            return invalid("curve_step must be > 0".into());
        }
        for (name, p) in [("prior_alpha", self.prior_alpha), ("prior_beta", self.prior_beta)] {
            if !(p.is_finite() && p > 0.0) {
                return invalid(format!("{name} must be finite and > 0, got {p}"));
            }
        }
        if self.curve_resamples == 0 || self.histogram_resamples == 0 {
            return invalid("resample counts must be > 0".into());
        }
        if self.histogram_edges < 2 {
            return invalid("histogram_edges must be >= 2".into());
        }
        if self.bootstrap_sample_size == Some(0) {
            return invalid("bootstrap_sample_size must be > 0".into());
        }
        if !(self.panel_y_max.is_finite() && self.panel_y_max > 0.0) {
            return invalid("panel_y_max must be finite and > 0".into());
        }
        Ok(())
    }

    /// Extra checks for the commands that draw a learning curve.
    pub fn validate_curve(&self) -> Result<(), ConfigError> {
        if self.curve_start >= self.trials {
            return Err(ConfigError::InvalidParameter(format!(
                "curve_start ({}) must be below trials ({})",
                self.curve_start, self.trials
            )));
        }
        Ok(())
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn schema_json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&schema_for!(ExperimentConfig))
    }
}
