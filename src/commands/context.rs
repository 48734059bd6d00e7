use std::fs;
use std::path::Path;

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{CodeCounterError, Result};
use crate::language::LanguageRegistry;
use crate::output::ColorMode;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from `config_path`, or from the default locations.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or
/// validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Extensions a directory run considers.
///
/// With `--language`, the files of that language; otherwise `--ext`, then
/// the configured list.
///
/// # Errors
/// Returns `UnsupportedLanguage` if `--language` names no known language.
pub fn directory_extensions(
    cli: &Cli,
    config: &Config,
    registry: &LanguageRegistry,
) -> Result<Vec<String>> {
    if let Some(language) = &cli.language {
        let entry = registry
            .get(language)
            .ok_or_else(|| CodeCounterError::UnsupportedLanguage(language.clone()))?;
        return Ok(entry.extensions.clone());
    }

    Ok(cli
        .ext
        .clone()
        .unwrap_or_else(|| config.scanner.extensions.clone()))
}

/// Configured exclude patterns followed by those given with `--exclude`.
#[must_use]
pub fn exclude_patterns(cli: &Cli, config: &Config) -> Vec<String> {
    let mut patterns = config.scanner.exclude.clone();
    patterns.extend(cli.exclude.iter().cloned());
    patterns
}

/// Write output to a file or stdout.
///
/// `quiet` only silences stdout; file writes always proceed.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
