use anyhow::{Context, Result};
use tracing::info;

use crate::config::ExperimentConfig;
use crate::estimators::MomentsEstimator;
use crate::evaluation::Histogram;
use crate::render::{Chart, HistogramChart};
use crate::tasks::{TaskKind, TaskReport, bootstrap_for, generate_trials};

/// Histogram of bootstrapped means over the whole run.
pub(crate) fn run(config: &ExperimentConfig) -> Result<TaskReport> {
    let kind = TaskKind::BootstrapHistogram;
    let trials = generate_trials(config)?;
    info!(task = %kind, %trials, "generated trials");

    let mut bs = bootstrap_for(config, config.histogram_resamples)?;
    let means = bs.resample_means(trials.outcomes())?;
    let moments: MomentsEstimator = means.iter().copied().collect();

    let mut histogram = Histogram::with_uniform_edges(0.0, 1.0, config.histogram_edges)?;
    histogram.fill(means);

    let output = config.output_path(kind.file_name());
    HistogramChart::new(histogram)
        .labels("Rate", "Occurences")
        .reference_line(config.true_rate)
        .save(&output)
        .with_context(|| format!("rendering {kind}"))?;
    info!(task = %kind, path = %output.display(), "chart written");

    let summary = moments.summary();
    Ok(TaskReport {
        kind,
        output,
        summary: format!("Bootstrap: {} +/-\t{}", summary.mean, summary.std_dev),
        exported: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::small_config;
    use std::fs;

    #[test]
    fn writes_histogram_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let report = run(&config).unwrap();

        assert!(report.output.ends_with("histogram.svg"));
        assert!(report.summary.starts_with("Bootstrap: "));
        assert!(report.summary.contains(" +/-\t"));
        let svg = fs::read_to_string(&report.output).unwrap();
        assert!(svg.contains(">Occurences</text>"));
    }

    #[test]
    fn summary_mean_is_near_sample_mean() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let report = run(&config).unwrap();

        let sample_mean = generate_trials(&config).unwrap().sample_mean();
        let reported: f64 = report
            .summary
            .trim_start_matches("Bootstrap: ")
            .split(" +/-")
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert!((reported - sample_mean).abs() < 0.03, "{reported} vs {sample_mean}");
    }
}
