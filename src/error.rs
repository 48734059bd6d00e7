use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeCounterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported language or file extension: {0}")]
    UnsupportedLanguage(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("No valid source files found in directory: {0}")]
    NoSourceFiles(PathBuf),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regular expression: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl CodeCounterError {
    /// Short, stable name of the error kind, used in item-level batch reports.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::InvalidRegex { .. } => "ConfigurationError",
            Self::UnsupportedLanguage(_) => "UnsupportedLanguageError",
            Self::FileRead { .. } | Self::Io(_) | Self::PathNotFound(_) => "IOError",
            Self::NoSourceFiles(_) => "NoSourceFiles",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::TomlParse(_) => "TomlParseError",
            Self::JsonSerialize(_) => "JsonSerializeError",
            Self::Logging(_) => "LoggingError",
        }
    }

    /// Whether this error stems from configuration rather than from the inputs.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::InvalidRegex { .. }
                | Self::InvalidPattern { .. }
                | Self::TomlParse(_)
                | Self::Logging(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CodeCounterError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
