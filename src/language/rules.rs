use crate::error::{CodeCounterError, Result};

use super::{LinePattern, RegexPattern};

/// Delimiters of a block comment. Both sides are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLineComment {
    pub start: String,
    pub end: String,
}

impl MultiLineComment {
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Line categories that are recognised by a per-language pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Import,
    VariableDeclaration,
    FunctionDefinition,
    ClassDefinition,
}

impl PatternKind {
    /// Evaluation order used by the classifier.
    pub const ALL: [Self; 4] = [
        Self::Import,
        Self::VariableDeclaration,
        Self::FunctionDefinition,
        Self::ClassDefinition,
    ];

    const fn index(self) -> usize {
        match self {
            Self::Import => 0,
            Self::VariableDeclaration => 1,
            Self::FunctionDefinition => 2,
            Self::ClassDefinition => 3,
        }
    }
}

/// Lexical rules of one language.
///
/// A `RuleSet` can only be obtained from [`RuleSetBuilder::build`], which
/// rejects a missing single-line marker and one-sided block delimiters, so
/// every instance the classifier sees is valid.
#[derive(Debug)]
pub struct RuleSet {
    single_line_comment: String,
    multi_line_comment: Option<MultiLineComment>,
    patterns: [Option<Box<dyn LinePattern>>; 4],
}

impl RuleSet {
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    #[must_use]
    pub fn single_line_comment(&self) -> &str {
        &self.single_line_comment
    }

    #[must_use]
    pub const fn multi_line_comment(&self) -> Option<&MultiLineComment> {
        self.multi_line_comment.as_ref()
    }

    #[must_use]
    pub fn pattern(&self, kind: PatternKind) -> Option<&dyn LinePattern> {
        self.patterns[kind.index()].as_deref()
    }

    /// Whether the pattern for `kind` is defined and matches `trimmed_line`.
    #[must_use]
    pub fn matches(&self, kind: PatternKind, trimmed_line: &str) -> bool {
        self.pattern(kind)
            .is_some_and(|pattern| pattern.is_match(trimmed_line))
    }
}

#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    single_line_comment: Option<String>,
    multi_line_comment_start: Option<String>,
    multi_line_comment_end: Option<String>,
    patterns: [Option<Box<dyn LinePattern>>; 4],
    invalid_pattern: Option<CodeCounterError>,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn single_line_comment(mut self, marker: impl Into<String>) -> Self {
        self.single_line_comment = Some(marker.into());
        self
    }

    #[must_use]
    pub fn multi_line_comment(self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.multi_line_comment_start(start).multi_line_comment_end(end)
    }

    #[must_use]
    pub fn multi_line_comment_start(mut self, start: impl Into<String>) -> Self {
        self.multi_line_comment_start = Some(start.into());
        self
    }

    #[must_use]
    pub fn multi_line_comment_end(mut self, end: impl Into<String>) -> Self {
        self.multi_line_comment_end = Some(end.into());
        self
    }

    #[must_use]
    pub fn pattern(mut self, kind: PatternKind, pattern: impl LinePattern + 'static) -> Self {
        self.patterns[kind.index()] = Some(Box::new(pattern));
        self
    }

    /// Compile `regex` and install it for `kind`. A compile failure is
    /// reported by [`build`](Self::build).
    #[must_use]
    pub fn regex(mut self, kind: PatternKind, regex: &str) -> Self {
        match RegexPattern::new(regex) {
            Ok(pattern) => self.pattern(kind, pattern),
            Err(err) => {
                if self.invalid_pattern.is_none() {
                    self.invalid_pattern = Some(err);
                }
                self
            }
        }
    }

    /// Validate the collected rules.
    ///
    /// # Errors
    /// Returns a configuration error if the single-line marker is missing or
    /// empty, if only one block-comment delimiter is set, or if a pattern
    /// failed to compile.
    pub fn build(self) -> Result<RuleSet> {
        if let Some(err) = self.invalid_pattern {
            return Err(err);
        }

        let single_line_comment = self
            .single_line_comment
            .filter(|marker| !marker.is_empty())
            .ok_or_else(|| {
                CodeCounterError::Config("single-line comment marker is required".to_string())
            })?;

        let multi_line_comment =
            match (self.multi_line_comment_start, self.multi_line_comment_end) {
                (None, None) => None,
                (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                    Some(MultiLineComment { start, end })
                }
                (Some(_), Some(_)) => {
                    return Err(CodeCounterError::Config(
                        "multi-line comment delimiters must not be empty".to_string(),
                    ));
                }
                (Some(_), None) | (None, Some(_)) => {
                    return Err(CodeCounterError::Config(
                        "multi-line comment start and end must be configured together"
                            .to_string(),
                    ));
                }
            };

        Ok(RuleSet {
            single_line_comment,
            multi_line_comment,
            patterns: self.patterns,
        })
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
