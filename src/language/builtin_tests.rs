use super::*;

#[test]
fn every_builtin_rule_set_compiles() {
    for lang in Language::ALL {
        assert!(lang.rule_set().is_ok(), "{} rules should compile", lang.name());
    }
}

#[test]
fn identifiers_resolve_case_insensitively() {
    assert_eq!(Language::from_identifier("js"), Some(Language::JavaScript));
    assert_eq!(Language::from_identifier("TypeScript"), Some(Language::TypeScript));
    assert_eq!(Language::from_identifier("PY"), Some(Language::Python));
    assert_eq!(Language::from_identifier(".java"), Some(Language::Java));
    assert_eq!(Language::from_identifier("tsx"), Some(Language::TypeScript));
    assert_eq!(Language::from_identifier("rb"), None);
}

#[test]
fn python_has_no_block_comment() {
    let rules = Language::Python.rule_set().unwrap();
    assert_eq!(rules.single_line_comment(), "#");
    assert!(rules.multi_line_comment().is_none());
}

#[test]
fn javascript_patterns() {
    let rules = Language::JavaScript.rule_set().unwrap();
    assert!(rules.matches(PatternKind::Import, "import React from 'react';"));
    assert!(rules.matches(PatternKind::VariableDeclaration, "const x = 10;"));
    assert!(rules.matches(PatternKind::FunctionDefinition, "function add(a, b) {"));
    assert!(rules.matches(PatternKind::FunctionDefinition, "async fetchData(url) {"));
    assert!(rules.matches(PatternKind::ClassDefinition, "export class Store {"));
    assert!(!rules.matches(PatternKind::ClassDefinition, "console.log(x);"));
}

#[test]
fn typescript_patterns() {
    let rules = Language::TypeScript.rule_set().unwrap();
    assert!(rules.matches(PatternKind::Import, "import { Logger } from './logger';"));
    assert!(rules.matches(PatternKind::VariableDeclaration, "public myVariable: number = 5;"));
    assert!(rules.matches(PatternKind::FunctionDefinition, "run() {"));
    assert!(rules.matches(PatternKind::FunctionDefinition, "handler(evt) =>"));
    assert!(rules.matches(PatternKind::ClassDefinition, "export abstract class Shape {"));
}

#[test]
fn python_patterns() {
    let rules = Language::Python.rule_set().unwrap();
    assert!(rules.matches(PatternKind::Import, "from os import path"));
    assert!(rules.matches(PatternKind::VariableDeclaration, "total = 0"));
    assert!(rules.matches(PatternKind::FunctionDefinition, "def main(argv):"));
    assert!(rules.matches(PatternKind::ClassDefinition, "class Parser(Base):"));
}

#[test]
fn java_patterns() {
    let rules = Language::Java.rule_set().unwrap();
    assert!(rules.matches(PatternKind::Import, "import java.util.List;"));
    assert!(rules.matches(PatternKind::VariableDeclaration, "int count = 0;"));
    assert!(rules.matches(PatternKind::VariableDeclaration, "List<String> names;"));
    assert!(rules.matches(PatternKind::FunctionDefinition, "public void run() {"));
    assert!(rules.matches(PatternKind::ClassDefinition, "public interface Shape {"));
}
