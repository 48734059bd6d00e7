mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use text::{ColorMode, TextFormatter};

use crate::batch::{BatchReport, FileReport};
use crate::error::Result;

/// Renders counting results for display or export.
pub trait ReportFormatter {
    /// Format the result of single-file mode.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_file(&self, report: &FileReport) -> Result<String>;

    /// Format the result of directory mode, failures included.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_batch(&self, report: &BatchReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Formatter for this format. `color` only affects text output.
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new(color)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
