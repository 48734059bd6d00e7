use std::fmt;

use regex::Regex;

use crate::error::{CodeCounterError, Result};

/// A compiled matcher applied to a trimmed source line.
pub trait LinePattern: fmt::Debug + Send + Sync {
    fn is_match(&self, trimmed_line: &str) -> bool;
}

/// `LinePattern` backed by the `regex` crate.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    regex: Regex,
}

impl RegexPattern {
    /// Compile a pattern.
    ///
    /// # Errors
    /// Returns `InvalidRegex` if the pattern does not compile.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| CodeCounterError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl LinePattern for RegexPattern {
    fn is_match(&self, trimmed_line: &str) -> bool {
        self.regex.is_match(trimmed_line)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
