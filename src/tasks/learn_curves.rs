use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::ExperimentConfig;
use crate::core::TrialSequence;
use crate::estimators::RateEstimator;
use crate::evaluation::{LearningCurve, learning_curve, prefix_lengths};
use crate::render::{Chart, Color, ErrorBarChart};
use crate::tasks::{RunOptions, TaskKind, TaskReport, bootstrap_for, generate_trials, posterior_for};

const X_LABEL: &str = "number of trials";
const Y_LABEL: &str = "estimated rate and std. deviation";

fn curve_for<E: RateEstimator + ?Sized>(
    config: &ExperimentConfig,
    trials: &TrialSequence,
    estimator: &mut E,
) -> Result<LearningCurve> {
    let lengths = prefix_lengths(config.curve_start, config.trials, config.curve_step);
    learning_curve(trials, &lengths, estimator)
        .with_context(|| format!("{} learning curve", estimator.name()))
}

fn last_point_summary(curve: &LearningCurve) -> String {
    match curve.latest() {
        Some(p) => format!("Mean: {}, std {}", p.mean, p.std_dev),
        None => "Mean: n/a, std n/a".to_string(),
    }
}

fn export(curve: &LearningCurve, chart_path: &Path, opts: RunOptions, suffix: &str) -> Result<Option<PathBuf>> {
    let Some(fmt) = opts.export else {
        return Ok(None);
    };
    let stem = chart_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("curve");
    let path = chart_path.with_file_name(format!("{stem}{suffix}.{}", fmt.extension()));
    curve
        .export(&path, fmt)
        .with_context(|| format!("exporting curve to {}", path.display()))?;
    info!(path = %path.display(), %fmt, "curve data exported");
    Ok(Some(path))
}

fn save(chart: &ErrorBarChart, kind: TaskKind, config: &ExperimentConfig) -> Result<PathBuf> {
    let output = config.output_path(kind.file_name());
    chart
        .save(&output)
        .with_context(|| format!("rendering {kind}"))?;
    info!(task = %kind, path = %output.display(), "chart written");
    Ok(output)
}

/// Beta-posterior learning curve.
pub(crate) fn bayes(config: &ExperimentConfig, opts: RunOptions) -> Result<TaskReport> {
    let kind = TaskKind::LearnCurve;
    let trials = generate_trials(config)?;
    info!(task = %kind, %trials, "generated trials");

    let curve = curve_for(config, &trials, &mut posterior_for(config)?)?;
    let chart = ErrorBarChart::new("Learn Curve Bayesian Inference (Beta-Prior)")
        .labels(X_LABEL, Y_LABEL)
        .series("bayes", Color::Default, &curve)
        .reference_line(config.true_rate);
    let output = save(&chart, kind, config)?;

    Ok(TaskReport {
        kind,
        exported: export(&curve, &output, opts, "")?,
        output,
        summary: last_point_summary(&curve),
    })
}

/// Bootstrap learning curve.
pub(crate) fn bootstrap(config: &ExperimentConfig, opts: RunOptions) -> Result<TaskReport> {
    let kind = TaskKind::BootstrapLearnCurve;
    let trials = generate_trials(config)?;
    info!(task = %kind, %trials, "generated trials");

    let mut bs = bootstrap_for(config, config.curve_resamples)?;
    let curve = curve_for(config, &trials, &mut bs)?;
    let chart = ErrorBarChart::new("Learn Curve Of Bootstrapped Estimation")
        .labels(X_LABEL, Y_LABEL)
        .series("bootstrap", Color::Default, &curve)
        .reference_line(config.true_rate);
    let output = save(&chart, kind, config)?;

    Ok(TaskReport {
        kind,
        exported: export(&curve, &output, opts, "")?,
        output,
        summary: last_point_summary(&curve),
    })
}

/// Both learning curves on one chart over the same trials.
pub(crate) fn overlay(config: &ExperimentConfig, opts: RunOptions) -> Result<TaskReport> {
    let kind = TaskKind::BothLearnCurves;
    let trials = generate_trials(config)?;
    info!(task = %kind, %trials, "generated trials");

    let bayes_curve = curve_for(config, &trials, &mut posterior_for(config)?)?;
    let mut bs = bootstrap_for(config, config.curve_resamples)?;
    let bootstrap_curve = curve_for(config, &trials, &mut bs)?;

    let chart = ErrorBarChart::new("Overlay Learn Curves Bayesian Inference and Bootstrap")
        .labels(X_LABEL, Y_LABEL)
        .series("bayes", Color::Blue, &bayes_curve)
        .series("bootstrap", Color::Green, &bootstrap_curve)
        .reference_line(config.true_rate)
        .with_legend();
    let output = save(&chart, kind, config)?;

    // the bootstrap file carries the name of the last export
    let exported = export(&bayes_curve, &output, opts, "-bayes")?;
    let exported = export(&bootstrap_curve, &output, opts, "-bootstrap")?.or(exported);

    Ok(TaskReport {
        kind,
        exported,
        output,
        summary: format!(
            "bayes {}; bootstrap {}",
            last_point_summary(&bayes_curve),
            last_point_summary(&bootstrap_curve)
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::CurveFormat;
    use crate::testing::small_config;
    use std::fs;

    #[test]
    fn bayes_writes_chart_and_reports_last_point() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let report = bayes(&config, RunOptions::default()).unwrap();

        assert_eq!(report.kind, TaskKind::LearnCurve);
        assert_eq!(report.output, dir.path().join("learncurvebayes.svg"));
        assert!(report.summary.starts_with("Mean: "));
        assert!(report.exported.is_none());
        let svg = fs::read_to_string(&report.output).unwrap();
        assert!(svg.contains("Learn Curve Bayesian Inference (Beta-Prior)"));
    }

    #[test]
    fn bayes_summary_matches_posterior_of_last_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let report = bayes(&config, RunOptions::default()).unwrap();

        let trials = generate_trials(&config).unwrap();
        let lengths = prefix_lengths(config.curve_start, config.trials, config.curve_step);
        let last = *lengths.last().unwrap();
        let want = posterior_for(&config).unwrap().posterior(trials.prefix(last));
        assert_eq!(report.summary, format!("Mean: {}, std {}", want.mean, want.std_dev));
    }

    #[test]
    fn bootstrap_curve_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let a = bootstrap(&config, RunOptions::default()).unwrap();
        let b = bootstrap(&config, RunOptions::default()).unwrap();
        assert_eq!(a.summary, b.summary);
        assert!(a.output.ends_with("learncurvebootstrap.svg"));
    }

    #[test]
    fn overlay_exports_both_curves() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let opts = RunOptions {
            export: Some(CurveFormat::Csv),
        };
        let report = overlay(&config, opts).unwrap();

        assert!(report.output.ends_with("learncurve-both.svg"));
        assert!(dir.path().join("learncurve-both-bayes.csv").exists());
        assert!(dir.path().join("learncurve-both-bootstrap.csv").exists());
        assert_eq!(
            report.exported.as_deref(),
            Some(dir.path().join("learncurve-both-bootstrap.csv").as_path())
        );
        let svg = fs::read_to_string(&report.output).unwrap();
        assert!(svg.contains(">bayes</text>"));
        assert!(svg.contains(">bootstrap</text>"));
    }

    #[test]
    fn export_uses_chart_stem() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let opts = RunOptions {
            export: Some(CurveFormat::Json),
        };
        let report = bayes(&config, opts).unwrap();
        assert_eq!(
            report.exported,
            Some(dir.path().join("learncurvebayes.json"))
        );
    }
}
