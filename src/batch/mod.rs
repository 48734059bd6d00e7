//! Counting one file or many.
//!
//! A failure on one file in a batch is recorded against its path and the
//! remaining files are still counted.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Serialize;

use crate::counter::{LineCounts, classify};
use crate::error::{CodeCounterError, Result};
use crate::language::LanguageRegistry;
use crate::output::ScanProgress;
use crate::source::LineSource;

/// Counts for one successfully processed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: String,
    pub counts: LineCounts,
    #[serde(skip)]
    pub elapsed: Duration,
}

/// An item-level error recorded during a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub kind: &'static str,
    pub message: String,
}

impl FileFailure {
    #[must_use]
    pub fn new(path: &Path, error: &CodeCounterError) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: error.error_type(),
            message: error.to_string(),
        }
    }
}

/// Outcome of a directory run: successes and failures, each in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    /// Sum of the counts of every successful file.
    #[must_use]
    pub fn totals(&self) -> LineCounts {
        self.files.iter().map(|f| &f.counts).sum()
    }

    #[must_use]
    pub fn processed(&self) -> usize {
        self.files.len() + self.failures.len()
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Resolves a file's language, reads it and classifies its lines.
pub struct BatchProcessor<'a, S: LineSource> {
    registry: &'a LanguageRegistry,
    source: S,
    language: Option<String>,
}

impl<'a, S: LineSource> BatchProcessor<'a, S> {
    #[must_use]
    pub const fn new(registry: &'a LanguageRegistry, source: S) -> Self {
        Self {
            registry,
            source,
            language: None,
        }
    }

    /// Count every file as `language` instead of inferring it from the
    /// extension.
    #[must_use]
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    /// Count a single file.
    ///
    /// # Errors
    /// Returns `UnsupportedLanguage` if no language matches, a configuration
    /// error if the language's rules are invalid, and `FileRead` if the file
    /// cannot be read.
    pub fn process_file(&self, path: &Path) -> Result<FileReport> {
        let start = Instant::now();

        let (language, rules) = match &self.language {
            Some(id) => {
                let entry = self
                    .registry
                    .get(id)
                    .ok_or_else(|| CodeCounterError::UnsupportedLanguage(id.clone()))?;
                (entry.name.clone(), entry.rules()?)
            }
            None => {
                let (entry, rules) = self.registry.resolve_path(path)?;
                (entry.name.clone(), rules)
            }
        };

        let lines = self.source.read_lines(path)?;
        let counts = classify(&lines, &rules);
        let elapsed = start.elapsed();

        tracing::debug!(
            path = %path.display(),
            language = %language,
            total = counts.total,
            elapsed_us = elapsed.as_micros(),
            "file counted"
        );

        Ok(FileReport {
            path: path.to_path_buf(),
            language,
            counts,
            elapsed,
        })
    }

    /// Count many files in parallel.
    ///
    /// Output order follows `paths`. Failures never abort the batch.
    pub fn process_all(&self, paths: &[PathBuf], progress: &ScanProgress) -> BatchReport {
        let start = Instant::now();

        let outcomes: Vec<_> = paths
            .par_iter()
            .map(|path| {
                let outcome = self.process_file(path);
                progress.inc();
                (path, outcome)
            })
            .collect();
        progress.finish();

        let mut report = BatchReport::default();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(file) => report.files.push(file),
                Err(e) => {
                    tracing::warn!(path = %path.display(), kind = e.error_type(), error = %e, "file failed");
                    report.failures.push(FileFailure::new(path, &e));
                }
            }
        }

        tracing::info!(
            files = report.succeeded(),
            failures = report.failed(),
            elapsed_ms = start.elapsed().as_millis(),
            "batch complete"
        );
        report
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
