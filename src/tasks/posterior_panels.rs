use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::ExperimentConfig;
use crate::core::sample_mean;
use crate::evaluation::{linspace, panel_prefix_lengths};
use crate::render::{Chart, Color, DensityGrid, DensityPanel, LineStyle};
use crate::tasks::{TaskKind, TaskReport, generate_trials, posterior_for};

const DENSITY_POINTS: usize = 400;

/// Grid of posterior densities at selected prefix lengths.
pub(crate) fn run(config: &ExperimentConfig) -> Result<TaskReport> {
    let kind = TaskKind::SelectedBayesDists;
    let trials = generate_trials(config)?;
    info!(task = %kind, %trials, "generated trials");

    let posterior = posterior_for(config)?;
    let xs = linspace(0.0, 1.0, DENSITY_POINTS);
    let mut grid = DensityGrid::new(config.panel_y_max);

    for n in panel_prefix_lengths() {
        let prefix = trials.prefix(n);
        let coeffs = posterior.coefficients(prefix);
        debug!(n, alpha = coeffs.alpha, beta = coeffs.beta, "posterior panel");

        let curve = xs.iter().copied().zip(coeffs.density_at(&xs)).collect();
        grid.push(
            DensityPanel::new(format!("N={}", prefix.len()), curve)
                .marker(coeffs.mean(), Color::Black, LineStyle::Solid)
                .marker(sample_mean(prefix), Color::Black, LineStyle::Dotted)
                .marker(config.true_rate, Color::Red, LineStyle::Dotted),
        );
    }

    let output = config.output_path(kind.file_name());
    grid.save(&output)
        .with_context(|| format!("rendering {kind}"))?;
    info!(task = %kind, path = %output.display(), "chart written");

    let side = grid.side();
    Ok(TaskReport {
        kind,
        output,
        summary: format!("Panels: {} ({side}x{side})", grid.len()),
        exported: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::small_config;
    use std::fs;

    #[test]
    fn renders_sixteen_panels() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.trials = 150;
        let report = run(&config).unwrap();

        assert_eq!(report.summary, "Panels: 16 (4x4)");
        let svg = fs::read_to_string(&report.output).unwrap();
        assert!(svg.contains(">N=0</text>"));
        assert!(svg.contains(">N=110</text>"));
        assert_eq!(svg.matches("<polyline").count(), 16);
    }

    #[test]
    fn short_runs_clamp_prefixes() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let report = run(&config).unwrap();
        assert!(report.output.ends_with("distributions.svg"));
    }
}
