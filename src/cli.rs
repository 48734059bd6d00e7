use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser, ValueEnum};

use crate::logging::{LogFormat, Verbosity};
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "code-counter")]
#[command(author, version, about = "Count and classify source lines by category")]
#[command(long_about = "Count blank, comment, import, variable, function, class and code \
    lines in JavaScript, TypeScript, Python and Java sources, or in languages defined \
    in the configuration file.\n\n\
    Exit codes:\n  \
    0 - Success (per-file errors in directory mode are reported, not fatal)\n  \
    1 - Missing path, unsupported language or no source files\n  \
    2 - Configuration error")]
#[command(group(ArgGroup::new("target").required(true).args(["file", "directory"])))]
pub struct Cli {
    /// Count a single file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Count every source file under a directory
    #[arg(short, long, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Language identifier or extension (e.g. javascript, ts, py).
    /// Inferred from the extension in file mode; restricts files in directory mode
    #[arg(short, long)]
    pub language: Option<String>,

    /// File extensions to count in directory mode (comma-separated, overrides config)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Honour .gitignore files in directory mode
    #[arg(long)]
    pub gitignore: bool,

    /// Output format [possible values: text, json]
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and suppress stdout output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log format (overrides config)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

/// What a run counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    File(&'a Path),
    Directory(&'a Path),
}

impl Cli {
    /// The selected target. Always `Some` for arguments accepted by the parser.
    #[must_use]
    pub fn target(&self) -> Option<Target<'_>> {
        match (&self.file, &self.directory) {
            (Some(file), None) => Some(Target::File(file)),
            (None, Some(dir)) => Some(Target::Directory(dir)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity {
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
