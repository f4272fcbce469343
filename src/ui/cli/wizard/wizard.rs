use anyhow::{Context, Result, bail};
use schemars::schema_for;
use serde_json::Value;
use strum::{EnumMessage, IntoEnumIterator};

use crate::config::ExperimentConfig;
use crate::tasks::TaskKind;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::schema::{FieldKind, field_specs};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

/// Config fields offered for editing after a command is picked.
pub const PROMPTED_FIELDS: [&str; 4] = ["trials", "true_rate", "seed", "output_dir"];

fn task_items() -> Vec<(TaskKind, String)> {
    TaskKind::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

pub fn prompt_task<D: PromptDriver>(driver: &D) -> Result<TaskKind> {
    let items = task_items();
    let labels: Vec<String> = items.iter().map(|(_, text)| text.clone()).collect();
    let idx = driver.select("Choose a chart:", "↑/↓ to navigate, ↵ to select", &labels)?;
    match items.get(idx) {
        Some((kind, _)) => Ok(*kind),
        None => bail!("selection {idx} out of range"),
    }
}

/// Asks for each of [`PROMPTED_FIELDS`], starting from `base`.
pub fn prompt_config<D: PromptDriver>(driver: &D, base: ExperimentConfig) -> Result<ExperimentConfig> {
    let schema = schema_for!(ExperimentConfig);
    let specs = field_specs(&schema, &PROMPTED_FIELDS)?;

    let Value::Object(mut params) = serde_json::to_value(&base)? else {
        bail!("config did not serialise to an object");
    };

    for s in specs {
        let init = params.get(&s.name).cloned().unwrap_or(Value::Null);
        let help = s.description.as_deref().unwrap_or("");

        let val = match s.kind {
            FieldKind::String => {
                Value::String(driver.ask_string(&s.title, help, init.as_str().unwrap_or(""))?)
            }
            FieldKind::Integer => Value::from(driver.ask_u64(
                &s.title,
                help,
                init.as_u64().unwrap_or(0),
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?),
            FieldKind::Number => Value::from(driver.ask_f64(
                &s.title,
                help,
                init.as_f64().unwrap_or(0.0),
                s.min,
                s.max,
            )?),
        };
        params.insert(s.name, val);
    }

    let config: ExperimentConfig =
        serde_json::from_value(Value::Object(params)).context("building config from answers")?;
    config.validate()?;
    Ok(config)
}

/// Picks a command, then edits the config it will run with.
pub fn prompt_run<D: PromptDriver>(driver: &D, base: ExperimentConfig) -> Result<(TaskKind, ExperimentConfig)> {
    let kind = prompt_task(driver)?;
    let config = prompt_config(driver, base)?;
    Ok((kind, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedDriver;

    #[test]
    fn items_follow_task_order() {
        let items = task_items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].0, TaskKind::LearnCurve);
        assert!(items[0].1.starts_with("Bayesian learning curve"));
    }

    #[test]
    fn picks_task_by_index() {
        let driver = ScriptedDriver::new(2);
        assert_eq!(prompt_task(&driver).unwrap(), TaskKind::BothLearnCurves);
    }

    #[test]
    fn out_of_range_selection_fails() {
        let driver = ScriptedDriver::new(9);
        assert!(prompt_task(&driver).is_err());
    }

    #[test]
    fn answers_override_base_config() {
        let driver = ScriptedDriver::new(0).with_u64s([60, 7]).with_f64s([0.3]);
        let (kind, config) = prompt_run(&driver, ExperimentConfig::default()).unwrap();
        assert_eq!(kind, TaskKind::LearnCurve);
        assert_eq!(config.trials, 60);
        assert_eq!(config.true_rate, 0.3);
        assert_eq!(config.seed, 7);
        assert_eq!(config.curve_step, 4);
    }

    #[test]
    fn defaults_are_kept_when_accepted() {
        let driver = ScriptedDriver::new(4);
        let base = ExperimentConfig {
            seed: 33,
            ..ExperimentConfig::default()
        };
        let config = prompt_config(&driver, base.clone()).unwrap();
        assert_eq!(config, base);
        assert_eq!(driver.asked(), vec!["Trials", "True Rate", "Seed", "Output Directory"]);
    }

    #[test]
    fn output_dir_answer_is_used() {
        let driver = ScriptedDriver::new(3).with_strings(["charts/run-2"]);
        let (kind, config) = prompt_run(&driver, ExperimentConfig::default()).unwrap();
        assert_eq!(kind, TaskKind::BootstrapHistogram);
        assert_eq!(config.output_dir, std::path::PathBuf::from("charts/run-2"));
        assert_eq!(
            config.output_path(kind.file_name()),
            std::path::PathBuf::from("charts/run-2/histogram.svg")
        );
    }

    #[test]
    fn invalid_answers_fail_validation() {
        let driver = ScriptedDriver::new(0).with_u64s([0]);
        assert!(prompt_config(&driver, ExperimentConfig::default()).is_err());
    }
}
