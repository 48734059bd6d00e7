use serde::Serialize;

use crate::batch::{BatchReport, FileFailure, FileReport};
use crate::counter::LineCounts;
use crate::error::Result;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct BatchOutput<'a> {
    summary: Summary,
    files: &'a [FileReport],
    errors: &'a [FileFailure],
    totals: LineCounts,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    succeeded: usize,
    failed: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format_file(&self, report: &FileReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_batch(&self, report: &BatchReport) -> Result<String> {
        let output = BatchOutput {
            summary: Summary {
                total_files: report.processed(),
                succeeded: report.succeeded(),
                failed: report.failed(),
            },
            files: &report.files,
            errors: &report.failures,
            totals: report.totals(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
