use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::logging::LogFormat;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Languages defined in configuration, keyed by display name.
    #[serde(default)]
    pub languages: IndexMap<String, CustomLanguageConfig>,
}

/// Directory-mode file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Extensions considered in directory mode.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns of files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules.
    #[serde(default)]
    pub gitignore: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
            gitignore: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default level when neither the environment nor `-v`/`-q` decide.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Append log output to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

/// Rules of a language defined in configuration. Validated into a
/// `RuleSet` when the registry is built; invalid rules only fail files of
/// that language.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub single_line_comment: Option<String>,

    #[serde(default)]
    pub multi_line_comment_start: Option<String>,

    #[serde(default)]
    pub multi_line_comment_end: Option<String>,

    #[serde(default)]
    pub import_pattern: Option<String>,

    #[serde(default)]
    pub variable_declaration_pattern: Option<String>,

    #[serde(default)]
    pub function_definition_pattern: Option<String>,

    #[serde(default)]
    pub class_definition_pattern: Option<String>,
}

fn default_extensions() -> Vec<String> {
    ["js", "ts", "py", "java"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
