//! Shared rule sets for counter tests.

use crate::language::{Language, PatternKind, RuleSet};

/// `//` and `/* */` comments, no category patterns.
pub fn c_style() -> RuleSet {
    RuleSet::builder()
        .single_line_comment("//")
        .multi_line_comment("/*", "*/")
        .build()
        .unwrap()
}

/// `#` comments only.
pub fn hash_style() -> RuleSet {
    RuleSet::builder().single_line_comment("#").build().unwrap()
}

/// C-style comments with all four category patterns.
pub fn c_style_with_patterns() -> RuleSet {
    RuleSet::builder()
        .single_line_comment("//")
        .multi_line_comment("/*", "*/")
        .regex(PatternKind::Import, r"^(import|require)\s+")
        .regex(PatternKind::VariableDeclaration, r"^(import|let|const|var)\s+\w+")
        .regex(PatternKind::FunctionDefinition, r"^function\s+\w+")
        .regex(PatternKind::ClassDefinition, r"^class\s+\w+")
        .build()
        .unwrap()
}

pub fn javascript() -> RuleSet {
    Language::JavaScript.rule_set().unwrap()
}
