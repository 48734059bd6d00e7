#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the code-counter binary, isolated
/// from the caller's environment.
#[macro_export]
macro_rules! code_counter {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("code-counter"));
        cmd.env_remove("CODE_COUNTER_EXTENSIONS")
            .env_remove("CODE_COUNTER_LOG")
            .env("NO_COLOR", "1");
        cmd
    }};
}

/// JavaScript source covering every category.
///
/// blank 2, comment 3, import 1, variable 1, function 1, class 1, code 3,
/// total 12.
pub const SAMPLE_JS: &str = "// header comment
import fs from 'fs';

const PI = 3.14;
/* block
   continues */
function add(a, b) {
    return a + b;
}
class Shape {
}
";

/// Python source covering every category.
///
/// blank 2, comment 1, import 1, variable 1, function 1, class 1, code 2,
/// total 9.
pub const SAMPLE_PY: &str = "# comment
import os

x = 10
def add(a, b):
    return a + b
class Foo:
    pass
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_dir(&self, relative_path: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.code-counter.toml` at the fixture root.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".code-counter.toml", content)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Value of a `| Label | value |` table row, in order of appearance.
pub fn row_values(output: &str, label: &str) -> Vec<usize> {
    let prefix = format!("| {label} ");
    output
        .lines()
        .filter(|line| line.starts_with(&prefix))
        .filter_map(|line| line.split('|').nth(2))
        .filter_map(|value| value.trim().parse().ok())
        .collect()
}

/// Config with a Kotlin-like custom language.
pub const KOTLIN_CONFIG: &str = r#"
[scanner]
extensions = ["kt", "js"]

[languages.kotlin]
extensions = ["kt"]
single_line_comment = "//"
multi_line_comment_start = "/*"
multi_line_comment_end = "*/"
import_pattern = '^import\s+'
variable_declaration_pattern = '^(val|var)\s+\w+'
function_definition_pattern = '^fun\s+\w+'
class_definition_pattern = '^(data\s+)?class\s+\w+'
"#;
