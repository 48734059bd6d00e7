//! Configuration semantic validation.
//!
//! Runs after parsing. Custom language rules are not checked here: they are
//! validated per language by the registry so that one broken language does
//! not block the others.

use tracing_subscriber::filter::LevelFilter;

use crate::config::Config;
use crate::{CodeCounterError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the extension list is empty or holds blank entries,
/// an exclude glob is invalid, the log level is unknown, or a custom
/// language has a blank name.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scanner_section(config)?;
    validate_logging_section(config)?;
    validate_language_names(config)?;
    Ok(())
}

fn validate_scanner_section(config: &Config) -> Result<()> {
    if config.scanner.extensions.is_empty() {
        return Err(CodeCounterError::Config(
            "scanner.extensions must not be empty".to_string(),
        ));
    }

    for (i, ext) in config.scanner.extensions.iter().enumerate() {
        if ext.trim().trim_start_matches('.').is_empty() {
            return Err(CodeCounterError::Config(format!(
                "scanner.extensions[{i}] must not be blank"
            )));
        }
    }

    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| CodeCounterError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_logging_section(config: &Config) -> Result<()> {
    config
        .logging
        .level
        .parse::<LevelFilter>()
        .map_err(|_| {
            CodeCounterError::Config(format!(
                "logging.level '{}' is not one of: off, error, warn, info, debug, trace",
                config.logging.level
            ))
        })?;
    Ok(())
}

fn validate_language_names(config: &Config) -> Result<()> {
    if config.languages.keys().any(|name| name.trim().is_empty()) {
        return Err(CodeCounterError::Config(
            "languages must have a non-blank name".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
