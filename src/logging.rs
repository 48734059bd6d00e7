//! Tracing initialization.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary. Nothing needs to be initialised before the library is used.

use std::fs::OpenOptions;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::LoggingConfig;
use crate::error::{CodeCounterError, Result};

/// Environment variable holding a full filter directive, e.g.
/// `CODE_COUNTER_LOG=code_counter=debug`. Overrides every other setting.
pub const LOG_ENV_VAR: &str = "CODE_COUNTER_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Command-line verbosity flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbosity {
    pub verbose: u8,
    pub quiet: bool,
}

/// Level directive used when `CODE_COUNTER_LOG` is not set.
///
/// `-q` wins over `-v`; `-v` raises to debug and `-vv` to trace.
#[must_use]
pub fn default_directive(config: &LoggingConfig, verbosity: Verbosity) -> String {
    if verbosity.quiet {
        return "error".to_string();
    }
    match verbosity.verbose {
        0 => config.level.to_lowercase(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn build_filter(config: &LoggingConfig, verbosity: Verbosity) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    let directive = default_directive(config, verbosity);
    EnvFilter::try_new(&directive)
        .map_err(|e| CodeCounterError::Logging(format!("invalid level '{directive}': {e}")))
}

/// Install the global subscriber.
///
/// # Errors
/// Returns an error if the log file cannot be opened, the filter is invalid,
/// or a subscriber is already installed.
pub fn init_tracing(
    config: &LoggingConfig,
    format: Option<LogFormat>,
    verbosity: Verbosity,
) -> Result<()> {
    let filter = build_filter(config, verbosity)?;

    let (writer, ansi) = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| CodeCounterError::FileRead {
                    path: path.clone(),
                    source,
                })?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (
            BoxMakeWriter::new(std::io::stderr),
            std::io::IsTerminal::is_terminal(&std::io::stderr()),
        ),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true);

    let installed = match format.unwrap_or(config.format) {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_ansi(ansi).try_init(),
    };
    installed.map_err(|e| CodeCounterError::Logging(e.to_string()))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
