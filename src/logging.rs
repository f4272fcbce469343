//! Structured logging setup.
//!
//! stdout carries command summaries; every log line goes to stderr.
//! `RATECURVE_LOG` takes an `EnvFilter` directive and wins over the level
//! passed on the command line.

use std::io::IsTerminal;

use strum_macros::{Display, EnumString, IntoStaticStr};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "RATECURVE_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(format!("ratecurve={level}")))
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(level: LogLevel) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter_for(level))
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn levels_parse_lowercase() {
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::Info.to_string(), "info");
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(LogLevel::Warn);
        init_logging(LogLevel::Debug);
    }
}
