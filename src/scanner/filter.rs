//! Path filters applied while walking a directory.

use std::collections::HashSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CodeCounterError, Result};
use crate::language::normalize_identifier;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files by extension and rejects those matching an exclude glob.
///
/// Extensions go through the same normalisation as language identifiers,
/// so `.PY`, ` py` and `py` are one entry, and `Main.JAVA` matches `java`.
/// An empty extension set accepts every file.
pub struct GlobFilter {
    extensions: HashSet<String>,
    excludes: GlobSet,
}

impl GlobFilter {
    /// # Errors
    /// Returns `InvalidPattern` naming the first exclude glob that fails to
    /// parse.
    pub fn new(extensions: &[String], exclude_patterns: &[String]) -> Result<Self> {
        Ok(Self {
            extensions: extensions
                .iter()
                .map(|ext| normalize_identifier(ext))
                .filter(|ext| !ext.is_empty())
                .collect(),
            excludes: build_excludes(exclude_patterns)?,
        })
    }

    /// Normalised extensions this filter accepts.
    #[must_use]
    pub const fn extensions(&self) -> &HashSet<String> {
        &self.extensions
    }

    fn accepts_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(&normalize_identifier(ext)))
    }
}

fn build_excludes(patterns: &[String]) -> Result<GlobSet> {
    let invalid = |pattern: &str, source| CodeCounterError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    };

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(|e| invalid(pattern, e))?);
    }
    builder
        .build()
        .map_err(|e| invalid(&patterns.join(", "), e))
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.accepts_extension(path) && !self.excludes.is_match(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
