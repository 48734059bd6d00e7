use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::config::CustomLanguageConfig;
use crate::error::{CodeCounterError, Result};

use super::{Language, PatternKind, RuleSet, normalize_identifier};

/// A registered language and the outcome of validating its rules.
///
/// Invalid rules are kept rather than rejected up front so that, in
/// directory mode, only files of that language fail.
#[derive(Debug, Clone)]
pub struct LanguageEntry {
    pub name: String,
    pub extensions: Vec<String>,
    rules: std::result::Result<Arc<RuleSet>, String>,
}

impl LanguageEntry {
    fn new(name: &str, extensions: Vec<String>, rules: Result<RuleSet>) -> Self {
        Self {
            name: name.to_string(),
            extensions,
            rules: rules.map(Arc::new).map_err(describe),
        }
    }

    /// The validated rule set.
    ///
    /// # Errors
    /// Returns a configuration error if the language's rules are invalid.
    pub fn rules(&self) -> Result<Arc<RuleSet>> {
        self.rules.clone().map_err(|msg| {
            CodeCounterError::Config(format!("language '{}': {msg}", self.name))
        })
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rules.is_ok()
    }
}

fn describe(err: CodeCounterError) -> String {
    match err {
        CodeCounterError::Config(msg) => msg,
        CodeCounterError::InvalidRegex { pattern, source } => {
            format!("invalid pattern `{pattern}`: {source}")
        }
        other => other.to_string(),
    }
}

#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<LanguageEntry>,
    identifier_map: HashMap<String, usize>,
    extension_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            identifier_map: HashMap::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Register a language. Later registrations win on shared names and
    /// extensions.
    pub fn register(
        &mut self,
        name: &str,
        aliases: &[&str],
        extensions: Vec<String>,
        rules: Result<RuleSet>,
    ) {
        let idx = self.languages.len();
        let extensions: Vec<String> = extensions
            .iter()
            .map(|ext| normalize_identifier(ext))
            .collect();

        self.identifier_map.insert(normalize_identifier(name), idx);
        for alias in aliases {
            self.identifier_map.insert(normalize_identifier(alias), idx);
        }
        for ext in &extensions {
            // an older language's alias equal to this extension must not
            // shadow it in `get`
            if self
                .identifier_map
                .get(ext)
                .is_some_and(|&owner| owner != idx)
            {
                self.identifier_map.remove(ext);
            }
            self.extension_map.insert(ext.clone(), idx);
        }
        self.languages
            .push(LanguageEntry::new(name, extensions, rules));
    }

    pub fn register_builtin(&mut self, language: Language) {
        self.register(
            language.name(),
            language.identifiers(),
            language
                .extensions()
                .iter()
                .map(ToString::to_string)
                .collect(),
            language.rule_set(),
        );
    }

    /// Look up a language by name, alias or extension.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&LanguageEntry> {
        let key = normalize_identifier(language);
        self.identifier_map
            .get(&key)
            .or_else(|| self.extension_map.get(&key))
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&LanguageEntry> {
        self.extension_map
            .get(&normalize_identifier(ext))
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn get_by_path(&self, path: &Path) -> Option<&LanguageEntry> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.get_by_extension(ext))
    }

    /// Resolve a language identifier to its validated rule set.
    ///
    /// # Errors
    /// Returns `UnsupportedLanguage` for unknown identifiers and a
    /// configuration error for languages with invalid rules.
    pub fn resolve(&self, language: &str) -> Result<Arc<RuleSet>> {
        self.get(language)
            .ok_or_else(|| CodeCounterError::UnsupportedLanguage(language.to_string()))?
            .rules()
    }

    /// Resolve the rule set for a file from its extension.
    ///
    /// # Errors
    /// Same as [`resolve`](Self::resolve), keyed by the file path.
    pub fn resolve_path(&self, path: &Path) -> Result<(&LanguageEntry, Arc<RuleSet>)> {
        let entry = self
            .get_by_path(path)
            .ok_or_else(|| CodeCounterError::UnsupportedLanguage(path.display().to_string()))?;
        Ok((entry, entry.rules()?))
    }

    #[must_use]
    pub fn all(&self) -> &[LanguageEntry] {
        &self.languages
    }

    /// Built-in languages plus languages defined in configuration.
    #[must_use]
    pub fn with_custom_languages(custom: &IndexMap<String, CustomLanguageConfig>) -> Self {
        let mut registry = Self::default();

        for (name, config) in custom {
            registry.register(
                name,
                &[],
                config.extensions.clone(),
                custom_rule_set(config),
            );
        }

        registry
    }
}

fn custom_rule_set(config: &CustomLanguageConfig) -> Result<RuleSet> {
    let mut builder = RuleSet::builder();
    if let Some(marker) = &config.single_line_comment {
        builder = builder.single_line_comment(marker.as_str());
    }
    if let Some(start) = &config.multi_line_comment_start {
        builder = builder.multi_line_comment_start(start.as_str());
    }
    if let Some(end) = &config.multi_line_comment_end {
        builder = builder.multi_line_comment_end(end.as_str());
    }

    let patterns = [
        (PatternKind::Import, &config.import_pattern),
        (PatternKind::VariableDeclaration, &config.variable_declaration_pattern),
        (PatternKind::FunctionDefinition, &config.function_definition_pattern),
        (PatternKind::ClassDefinition, &config.class_definition_pattern),
    ];
    for (kind, pattern) in patterns {
        builder = match pattern {
            Some(pattern) => builder.regex(kind, pattern),
            None => builder,
        };
    }

    builder.build()
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for language in Language::ALL {
            registry.register_builtin(language);
        }
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
