use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::language::{PatternKind, RuleSet};

/// The single category a line is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCategory {
    Blank,
    Comment,
    Import,
    VariableDeclaration,
    FunctionDefinition,
    ClassDefinition,
    Code,
}

impl From<PatternKind> for LineCategory {
    fn from(kind: PatternKind) -> Self {
        match kind {
            PatternKind::Import => Self::Import,
            PatternKind::VariableDeclaration => Self::VariableDeclaration,
            PatternKind::FunctionDefinition => Self::FunctionDefinition,
            PatternKind::ClassDefinition => Self::ClassDefinition,
        }
    }
}

/// Per-category line counts of one scan, or the sum of several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    pub total: usize,
    pub blank: usize,
    pub comment: usize,
    pub import: usize,
    pub variable_declaration: usize,
    pub function_definition: usize,
    pub class_definition: usize,
    pub code: usize,
}

impl LineCounts {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            blank: 0,
            comment: 0,
            import: 0,
            variable_declaration: 0,
            function_definition: 0,
            class_definition: 0,
            code: 0,
        }
    }

    #[must_use]
    pub const fn get(&self, category: LineCategory) -> usize {
        match category {
            LineCategory::Blank => self.blank,
            LineCategory::Comment => self.comment,
            LineCategory::Import => self.import,
            LineCategory::VariableDeclaration => self.variable_declaration,
            LineCategory::FunctionDefinition => self.function_definition,
            LineCategory::ClassDefinition => self.class_definition,
            LineCategory::Code => self.code,
        }
    }

    /// Sum over all categories. Equals `total` for any single scan.
    #[must_use]
    pub const fn categorized(&self) -> usize {
        self.blank
            + self.comment
            + self.import
            + self.variable_declaration
            + self.function_definition
            + self.class_definition
            + self.code
    }

    const fn record(&mut self, category: LineCategory) {
        self.total += 1;
        let slot = match category {
            LineCategory::Blank => &mut self.blank,
            LineCategory::Comment => &mut self.comment,
            LineCategory::Import => &mut self.import,
            LineCategory::VariableDeclaration => &mut self.variable_declaration,
            LineCategory::FunctionDefinition => &mut self.function_definition,
            LineCategory::ClassDefinition => &mut self.class_definition,
            LineCategory::Code => &mut self.code,
        };
        *slot += 1;
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.blank += rhs.blank;
        self.comment += rhs.comment;
        self.import += rhs.import;
        self.variable_declaration += rhs.variable_declaration;
        self.function_definition += rhs.function_definition;
        self.class_definition += rhs.class_definition;
        self.code += rhs.code;
    }
}

impl Sum for LineCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

impl<'a> Sum<&'a Self> for LineCounts {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Mutable state of one file scan.
///
/// Lines must be fed in file order: block-comment state carries from one
/// line to the next. Nesting is not tracked.
#[derive(Debug)]
pub struct ScanState<'a> {
    rules: &'a RuleSet,
    inside_multi_line_comment: bool,
    counts: LineCounts,
}

impl<'a> ScanState<'a> {
    #[must_use]
    pub const fn new(rules: &'a RuleSet) -> Self {
        Self {
            rules,
            inside_multi_line_comment: false,
            counts: LineCounts::new(),
        }
    }

    #[must_use]
    pub const fn is_inside_multi_line_comment(&self) -> bool {
        self.inside_multi_line_comment
    }

    /// Classify the next line and record it.
    pub fn push_line(&mut self, line: &str) -> LineCategory {
        let category = self.classify_line(line.trim());
        self.counts.record(category);
        category
    }

    fn classify_line(&mut self, trimmed: &str) -> LineCategory {
        if trimmed.is_empty() {
            return LineCategory::Blank;
        }

        if let Some(block) = self.rules.multi_line_comment() {
            if !self.inside_multi_line_comment && trimmed.starts_with(block.start.as_str()) {
                // `/* x */` opens and closes on the same line
                self.inside_multi_line_comment = !trimmed.ends_with(block.end.as_str());
                return LineCategory::Comment;
            }
            if self.inside_multi_line_comment && trimmed.ends_with(block.end.as_str()) {
                self.inside_multi_line_comment = false;
                return LineCategory::Comment;
            }
        }

        if self.inside_multi_line_comment
            || trimmed.starts_with(self.rules.single_line_comment())
        {
            return LineCategory::Comment;
        }

        PatternKind::ALL
            .into_iter()
            .find(|&kind| self.rules.matches(kind, trimmed))
            .map_or(LineCategory::Code, LineCategory::from)
    }

    #[must_use]
    pub const fn finish(self) -> LineCounts {
        self.counts
    }
}

/// Classifies the lines of one file at a time against a fixed rule set.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    rules: &'a RuleSet,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn classify<I, S>(&self, lines: I) -> LineCounts
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ScanState::new(self.rules);
        for line in lines {
            state.push_line(line.as_ref());
        }
        state.finish()
    }

    /// Split `source` into lines and classify them.
    #[must_use]
    pub fn count_source(&self, source: &str) -> LineCounts {
        self.classify(super::split_lines(source))
    }
}

/// Classify an ordered sequence of lines. Every line lands in exactly one
/// category and `total` is the number of lines supplied.
#[must_use]
pub fn classify<I, S>(lines: I, rules: &RuleSet) -> LineCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LineClassifier::new(rules).classify(lines)
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
