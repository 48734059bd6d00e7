use crate::error::Result;

use super::{PatternKind, RuleSet};

/// Languages with built-in rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
}

struct BuiltinRules {
    single_line_comment: &'static str,
    multi_line_comment: Option<(&'static str, &'static str)>,
    import: &'static str,
    variable_declaration: &'static str,
    function_definition: &'static str,
    class_definition: &'static str,
}

const C_BLOCK: Option<(&str, &str)> = Some(("/*", "*/"));

const JAVASCRIPT: BuiltinRules = BuiltinRules {
    single_line_comment: "//",
    multi_line_comment: C_BLOCK,
    import: r#"^\s*(import|require)\s+['"\w{}*]+\s*from?\s*['"\w./\-]+"#,
    variable_declaration: r"^\s*(let|const|var)\s+[\w\s{},=\[\]]+",
    function_definition: r"^\s*(async\s*)?(function\s+)?\w+\s*\([^)]*\)\s*\{",
    class_definition: r"^\s*(export\s+)?class\s+\w+",
};

const TYPESCRIPT: BuiltinRules = BuiltinRules {
    single_line_comment: "//",
    multi_line_comment: C_BLOCK,
    import: r"^(import|require)\s+",
    variable_declaration: r"^(let|const|var|public|private|protected)\s+\w+",
    function_definition: r"^\s*(public|private|protected|static)?\s*(async\s*)?\w+\s*\([^)]*\)\s*(\{|=>)",
    class_definition: r"^\s*(export\s+)?(abstract\s+)?class\s+\w+",
};

const PYTHON: BuiltinRules = BuiltinRules {
    single_line_comment: "#",
    multi_line_comment: None,
    import: r"^\s*(import|from)\s+[\w.]+\s*(import\s+\w+)?",
    variable_declaration: r"^\s*\w+\s*=\s*.+",
    function_definition: r"^\s*def\s+\w+\s*\([^)]*\)\s*:",
    class_definition: r"^\s*class\s+\w+\s*\(?.*\)?:",
};

const JAVA: BuiltinRules = BuiltinRules {
    single_line_comment: "//",
    multi_line_comment: C_BLOCK,
    import: r"^\s*import\s+[\w.*]+;",
    variable_declaration: r"^\s*(int|float|double|char|String|boolean|List<\w+>|Map<[\w,]+>)\s+\w+",
    function_definition: r"^\s*(public|private|protected|static|final)?\s*[\w<>]+\s+\w+\s*\([^)]*\)\s*\{",
    class_definition: r"^\s*(public\s+)?(abstract\s+)?(class|interface|enum)\s+\w+",
};

impl Language {
    pub const ALL: [Self; 4] = [Self::JavaScript, Self::TypeScript, Self::Python, Self::Java];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Python => "Python",
            Self::Java => "Java",
        }
    }

    /// Identifiers accepted by `--language`, besides the extensions.
    #[must_use]
    pub const fn identifiers(self) -> &'static [&'static str] {
        match self {
            Self::JavaScript => &["javascript", "js"],
            Self::TypeScript => &["typescript", "ts"],
            Self::Python => &["python", "py"],
            Self::Java => &["java"],
        }
    }

    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::JavaScript => &["js", "mjs", "cjs", "jsx"],
            Self::TypeScript => &["ts", "mts", "cts", "tsx"],
            Self::Python => &["py", "pyi"],
            Self::Java => &["java"],
        }
    }

    /// Resolve a language name or file extension, case-insensitively.
    #[must_use]
    pub fn from_identifier(id: &str) -> Option<Self> {
        let id = super::normalize_identifier(id);
        Self::ALL.into_iter().find(|lang| {
            lang.identifiers().contains(&id.as_str()) || lang.extensions().contains(&id.as_str())
        })
    }

    const fn rules(self) -> &'static BuiltinRules {
        match self {
            Self::JavaScript => &JAVASCRIPT,
            Self::TypeScript => &TYPESCRIPT,
            Self::Python => &PYTHON,
            Self::Java => &JAVA,
        }
    }

    /// Build the validated rule set for this language.
    ///
    /// # Errors
    /// Returns an error if a built-in pattern fails to compile.
    pub fn rule_set(self) -> Result<RuleSet> {
        let rules = self.rules();
        let mut builder = RuleSet::builder()
            .single_line_comment(rules.single_line_comment)
            .regex(PatternKind::Import, rules.import)
            .regex(PatternKind::VariableDeclaration, rules.variable_declaration)
            .regex(PatternKind::FunctionDefinition, rules.function_definition)
            .regex(PatternKind::ClassDefinition, rules.class_definition);
        if let Some((start, end)) = rules.multi_line_comment {
            builder = builder.multi_line_comment(start, end);
        }
        builder.build()
    }
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
