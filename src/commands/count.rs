use std::path::Path;

use crate::batch::BatchProcessor;
use crate::cli::{Cli, Target};
use crate::config::{Config, EXTENSIONS_ENV_VAR, apply_extension_override};
use crate::error::{CodeCounterError, Result};
use crate::language::LanguageRegistry;
use crate::logging::init_tracing;
use crate::output::{ReportFormatter, ScanProgress};
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use crate::source::FsLineSource;
use crate::{EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_SUCCESS};

use super::context::{
    color_choice_to_mode, directory_extensions, exclude_patterns, load_config, write_output,
};

/// Exit code for an error that ended the run.
#[must_use]
pub const fn exit_code_for(error: &CodeCounterError) -> i32 {
    if error.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_FAILURE
    }
}

#[must_use]
pub fn run_count(cli: &Cli) -> i32 {
    match run_count_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!(kind = e.error_type(), error = ?e, "run failed");
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

fn run_count_impl(cli: &Cli) -> Result<i32> {
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    let mut config = loaded.config;
    if let Ok(raw) = std::env::var(EXTENSIONS_ENV_VAR) {
        apply_extension_override(&mut config, &raw);
    }

    init_tracing(&config.logging, cli.log_format, cli.verbosity())?;
    match &loaded.source {
        Some(path) => tracing::debug!(path = %path.display(), "configuration loaded"),
        None => tracing::debug!("using default configuration"),
    }

    let registry = LanguageRegistry::with_custom_languages(&config.languages);
    for entry in registry.all().iter().filter(|entry| !entry.is_valid()) {
        tracing::warn!(language = %entry.name, "language has invalid rules, its files will fail");
    }

    let formatter = cli.format.formatter(color_choice_to_mode(cli.color));
    let output = match cli.target() {
        Some(Target::File(path)) => count_file(cli, &registry, path, formatter.as_ref())?,
        Some(Target::Directory(root)) => {
            count_directory(cli, &config, &registry, root, formatter.as_ref())?
        }
        None => {
            return Err(CodeCounterError::Config(
                "either --file or --directory is required".to_string(),
            ));
        }
    };

    write_output(cli.output.as_deref(), &output, cli.quiet)?;
    Ok(EXIT_SUCCESS)
}

fn count_file(
    cli: &Cli,
    registry: &LanguageRegistry,
    path: &Path,
    formatter: &dyn ReportFormatter,
) -> Result<String> {
    if !path.exists() {
        return Err(CodeCounterError::PathNotFound(path.to_path_buf()));
    }
    let path = dunce::canonicalize(path).map_err(|source| CodeCounterError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let processor = BatchProcessor::new(registry, FsLineSource).with_language(cli.language.clone());
    let report = processor.process_file(&path)?;
    tracing::info!(
        elapsed_ms = report.elapsed.as_millis(),
        "single-file run complete"
    );

    formatter.format_file(&report)
}

fn count_directory(
    cli: &Cli,
    config: &Config,
    registry: &LanguageRegistry,
    root: &Path,
    formatter: &dyn ReportFormatter,
) -> Result<String> {
    let extensions = directory_extensions(cli, config, registry)?;
    let filter = GlobFilter::new(&extensions, &exclude_patterns(cli, config))?;
    let scanner = DirectoryScanner::with_gitignore(filter, cli.gitignore || config.scanner.gitignore);

    let files = scanner.scan(root)?;
    tracing::info!(root = %root.display(), files = files.len(), "counting directory");

    let progress = ScanProgress::new(files.len() as u64, cli.quiet);
    let processor = BatchProcessor::new(registry, FsLineSource).with_language(cli.language.clone());
    let report = processor.process_all(&files, &progress);

    formatter.format_batch(&report)
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
