use std::fmt::Write;

use crate::batch::{BatchReport, FileFailure, FileReport};
use crate::counter::{LineCategory, LineCounts};
use crate::error::Result;

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

const WIDTH: usize = 58;
const LABEL_WIDTH: usize = 24;
const VALUE_WIDTH: usize = WIDTH - LABEL_WIDTH - 7;

const ROWS: [(&str, LineCategory); 7] = [
    ("Blank Lines", LineCategory::Blank),
    ("Comment Lines", LineCategory::Comment),
    ("Import Lines", LineCategory::Import),
    ("Variable Declarations", LineCategory::VariableDeclaration),
    ("Function Definitions", LineCategory::FunctionDefinition),
    ("Class Definitions", LineCategory::ClassDefinition),
    ("Code Lines", LineCategory::Code),
];

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn heading(&self, out: &mut String, title: &str) {
        let title = format!(" {title} ");
        let line = format!("{title:=^WIDTH$}");
        writeln!(out, "{}", self.paint(&line, ansi::CYAN)).ok();
    }

    fn rule(out: &mut String, ch: char) {
        writeln!(out, "{}", ch.to_string().repeat(WIDTH)).ok();
    }

    fn row(out: &mut String, label: &str, value: &str) {
        writeln!(out, "| {label:<LABEL_WIDTH$} | {value:<VALUE_WIDTH$} |").ok();
    }

    fn counts_table(out: &mut String, counts: &LineCounts) {
        Self::rule(out, '-');
        Self::row(out, "Type", "Count");
        Self::rule(out, '-');
        for (label, category) in ROWS {
            Self::row(out, label, &counts.get(category).to_string());
        }
        Self::row(out, "Total Lines", &counts.total.to_string());
        Self::rule(out, '-');
    }

    fn file_section(&self, out: &mut String, report: &FileReport) {
        self.heading(out, "Results for File");
        writeln!(out, "File Path: {}", report.path.display()).ok();
        writeln!(out, "Language:  {}", report.language).ok();
        Self::counts_table(out, &report.counts);
        writeln!(out).ok();
    }

    fn errors_section(&self, out: &mut String, failures: &[FileFailure]) {
        self.heading(out, "Errors Encountered");
        for failure in failures {
            writeln!(out, "File Path: {}", failure.path.display()).ok();
            let message = format!("[{}] {}", failure.kind, failure.message);
            writeln!(out, "ERROR:     {}", self.paint(&message, ansi::RED)).ok();
            writeln!(out).ok();
        }
        Self::rule(out, '=');
        writeln!(out).ok();
    }

    fn summary_section(&self, out: &mut String, report: &BatchReport) {
        self.heading(out, "Summary of Results");
        writeln!(out, "Total Files Processed: {}", report.processed()).ok();
        let succeeded = report.succeeded().to_string();
        writeln!(
            out,
            "Successful Processing: {}",
            self.paint(&succeeded, ansi::GREEN)
        )
        .ok();
        let failed = report.failed().to_string();
        let failed = if report.has_failures() {
            self.paint(&failed, ansi::RED)
        } else {
            failed
        };
        writeln!(out, "Errors Encountered: {failed}").ok();
        writeln!(out).ok();
    }
}

impl ReportFormatter for TextFormatter {
    fn format_file(&self, report: &FileReport) -> Result<String> {
        let mut out = String::new();
        self.file_section(&mut out, report);
        Ok(out)
    }

    fn format_batch(&self, report: &BatchReport) -> Result<String> {
        let mut out = String::new();

        for file in &report.files {
            self.file_section(&mut out, file);
        }
        if report.has_failures() {
            self.errors_section(&mut out, &report.failures);
        }
        self.summary_section(&mut out, report);

        self.heading(&mut out, "Overall Totals");
        Self::counts_table(&mut out, &report.totals());

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
