use std::io::IsTerminal;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use ratecurve::config::ExperimentConfig;
use ratecurve::logging::init_logging;
use ratecurve::tasks::{RunOptions, run_task};
use ratecurve::ui::cli::drivers::InquireDriver;
use ratecurve::ui::cli::wizard::prompt_run;
use ratecurve::ui::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);
    let config = cli.resolve_config()?;

    let (kind, config, opts) = match &cli.command {
        Some(Command::Config { schema: true }) => {
            println!("{}", ExperimentConfig::schema_json()?);
            return Ok(());
        }
        Some(Command::Config { schema: false }) => {
            println!("{}", config.to_json()?);
            return Ok(());
        }
        Some(cmd) => match cmd.task() {
            Some((kind, opts)) => (kind, config, opts),
            None => bail!("command has no chart to render"),
        },
        None if std::io::stdin().is_terminal() => {
            let (kind, config) = prompt_run(&InquireDriver, config)?;
            (kind, config, RunOptions::default())
        }
        None => bail!("no command given; see `ratecurve --help`"),
    };

    info!(task = %kind, seed = config.seed, trials = config.trials, "running");
    let report = run_task(kind, &config, opts)?;
    println!("{report}");
    eprintln!("wrote {}", report.output.display());
    if let Some(path) = &report.exported {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
