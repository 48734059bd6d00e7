mod builtin;
mod pattern;
mod registry;
mod rules;

pub use builtin::Language;
pub use pattern::{LinePattern, RegexPattern};
pub use registry::{LanguageEntry, LanguageRegistry};
pub use rules::{MultiLineComment, PatternKind, RuleSet, RuleSetBuilder};

/// Lowercase a language name or extension and drop a leading dot.
#[must_use]
pub fn normalize_identifier(id: &str) -> String {
    id.trim().trim_start_matches('.').to_lowercase()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
