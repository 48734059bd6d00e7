use super::*;
use crate::counter::test_fixtures::{c_style, c_style_with_patterns, hash_style, javascript};

fn assert_consistent(counts: &LineCounts, supplied: usize) {
    assert_eq!(counts.total, supplied);
    assert_eq!(counts.categorized(), counts.total);
}

#[test]
fn line_counts_default() {
    let counts = LineCounts::default();
    assert_eq!(counts, LineCounts::new());
    assert_eq!(counts.total, 0);
    assert_eq!(counts.categorized(), 0);
}

#[test]
fn classify_empty_input() {
    let rules = c_style();
    let counts = classify(Vec::<&str>::new(), &rules);

    assert_eq!(counts, LineCounts::new());
}

#[test]
fn multi_line_comment_closed_on_next_line() {
    let rules = c_style();
    let lines = [
        "/* this is a multi-line comment",
        "   it continues here */",
        "const x = 10;",
    ];
    let counts = classify(lines, &rules);

    assert_eq!(counts.comment, 2);
    assert_eq!(counts.code, 1);
    assert_eq!(counts.blank, 0);
    assert_consistent(&counts, 3);
}

#[test]
fn single_line_comment_blank_and_code() {
    let rules = c_style();
    let lines = ["// comment", "const x = 10;", "", "let y = 20;"];
    let counts = classify(lines, &rules);

    assert_eq!(counts.comment, 1);
    assert_eq!(counts.code, 2);
    assert_eq!(counts.blank, 1);
    assert_consistent(&counts, 4);
}

#[test]
fn only_multi_line_comment() {
    let rules = c_style();
    let lines = [
        "/* this is a multi-line comment",
        "   it spans multiple lines */",
    ];
    let counts = classify(lines, &rules);

    assert_eq!(counts.comment, 2);
    assert_eq!(counts.code, 0);
    assert_consistent(&counts, 2);
}

#[test]
fn multi_line_comment_with_closing_line_alone() {
    let rules = c_style();
    let lines = [
        "/* this is a multi-line comment",
        "   it continues here",
        "*/",
        "const x = 10;",
    ];
    let counts = classify(lines, &rules);

    assert_eq!(counts.comment, 3);
    assert_eq!(counts.code, 1);
    assert_consistent(&counts, 4);
}

#[test]
fn same_line_block_comment_counts_once() {
    let rules = c_style();
    let mut state = ScanState::new(&rules);

    assert_eq!(state.push_line("/* x */"), LineCategory::Comment);
    assert!(!state.is_inside_multi_line_comment());
    assert_eq!(state.push_line("let y = 1;"), LineCategory::Code);

    let counts = state.finish();
    assert_eq!(counts.comment, 1);
    assert_eq!(counts.code, 1);
}

#[test]
fn comment_span_counts_every_line_inclusive() {
    let rules = c_style();
    let lines = [
        "int a;",
        "/* begins",
        "",
        "   int b = 2;",
        "   // nested single-line marker",
        "ends */",
        "int c;",
    ];
    let counts = classify(lines, &rules);

    assert_eq!(counts.comment, 4);
    assert_eq!(counts.code, 2);
    assert_eq!(counts.blank, 1);
    assert_consistent(&counts, 7);
}

#[test]
fn blank_line_inside_comment_is_blank() {
    let rules = c_style();
    let mut state = ScanState::new(&rules);

    state.push_line("/*");
    assert_eq!(state.push_line("   "), LineCategory::Blank);
    assert!(state.is_inside_multi_line_comment());
    assert_eq!(state.push_line("*/"), LineCategory::Comment);
    assert!(!state.is_inside_multi_line_comment());
}

#[test]
fn unterminated_comment_consumes_remaining_lines() {
    let rules = c_style();
    let lines = ["let a = 1;", "/* never closed", "let b = 2;", "let c = 3;"];
    let counts = classify(lines, &rules);

    assert_eq!(counts.code, 1);
    assert_eq!(counts.comment, 3);
    assert_consistent(&counts, 4);
}

#[test]
fn nested_start_marker_does_not_deepen_state() {
    let rules = c_style();
    let lines = ["/* start", "   /* nested comment", "   end */", "const y = 20;"];
    let counts = classify(lines, &rules);

    assert_eq!(counts.comment, 3);
    assert_eq!(counts.code, 1);
    assert_consistent(&counts, 4);
}

#[test]
fn nested_start_and_end_on_one_line_closes_comment() {
    let rules = c_style();
    let mut state = ScanState::new(&rules);

    state.push_line("/* outer");
    assert_eq!(state.push_line("/* inner */"), LineCategory::Comment);
    assert!(!state.is_inside_multi_line_comment());
    assert_eq!(state.push_line("still outer? */"), LineCategory::Code);
}

#[test]
fn end_marker_outside_comment_is_not_special() {
    let rules = c_style();
    let counts = classify(["x = y */"], &rules);

    assert_eq!(counts.code, 1);
}

#[test]
fn code_before_block_start_is_code() {
    let rules = c_style();
    let mut state = ScanState::new(&rules);

    assert_eq!(state.push_line("int a; /* trailing"), LineCategory::Code);
    assert!(!state.is_inside_multi_line_comment());
}

#[test]
fn indented_markers_are_recognised() {
    let rules = c_style();
    let lines = ["    // indented", "\t/* tab", "\t*/   "];
    let counts = classify(lines, &rules);

    assert_eq!(counts.comment, 3);
}

#[test]
fn crlf_line_endings_are_trimmed() {
    let rules = c_style();
    let counts = LineClassifier::new(&rules).count_source("/* a\r\n b */\r\n\r\nx;\r\n");

    assert_eq!(counts.comment, 2);
    assert_eq!(counts.blank, 2);
    assert_eq!(counts.code, 1);
    assert_consistent(&counts, 5);
}

#[test]
fn rules_without_block_comment_ignore_c_markers() {
    let rules = hash_style();
    let lines = ["/* not a comment", "# comment", "*/"];
    let counts = classify(lines, &rules);

    assert_eq!(counts.code, 2);
    assert_eq!(counts.comment, 1);
}

#[test]
fn import_takes_priority_over_variable_declaration() {
    let rules = c_style_with_patterns();
    let counts = classify(["import thing"], &rules);

    assert_eq!(counts.import, 1);
    assert_eq!(counts.variable_declaration, 0);
}

#[test]
fn pattern_categories_in_priority_order() {
    let rules = c_style_with_patterns();
    let mut state = ScanState::new(&rules);

    assert_eq!(state.push_line("require fs"), LineCategory::Import);
    assert_eq!(state.push_line("let total = 0"), LineCategory::VariableDeclaration);
    assert_eq!(state.push_line("function run() {"), LineCategory::FunctionDefinition);
    assert_eq!(state.push_line("class Widget {"), LineCategory::ClassDefinition);
    assert_eq!(state.push_line("total += 1"), LineCategory::Code);
}

#[test]
fn comments_take_priority_over_patterns() {
    let rules = c_style_with_patterns();
    let lines = ["// import thing", "/* class Foo */", "/*", "function f() {", "*/"];
    let counts = classify(lines, &rules);

    assert_eq!(counts.comment, 5);
    assert_eq!(counts.import, 0);
    assert_eq!(counts.class_definition, 0);
    assert_eq!(counts.function_definition, 0);
}

#[test]
fn javascript_file_counts() {
    let rules = javascript();
    let source = "\
// Utility module
import fs from 'fs';

/*
 * Reads config.
 */
const path = './config.json';

function load(file) {
  return fs.readFileSync(file);
}

export class Loader {
}
";
    let counts = LineClassifier::new(&rules).count_source(source);

    assert_eq!(counts.comment, 4);
    assert_eq!(counts.import, 1);
    assert_eq!(counts.variable_declaration, 1);
    assert_eq!(counts.function_definition, 1);
    assert_eq!(counts.class_definition, 1);
    assert_eq!(counts.blank, 4);
    assert_eq!(counts.code, 3);
    assert_consistent(&counts, 15);
}

#[test]
fn classification_is_repeatable() {
    let rules = javascript();
    let lines = ["/* open", "still open", "const a = 1;", "*/", "let b = 2;"];
    let classifier = LineClassifier::new(&rules);

    let first = classifier.classify(lines);
    let second = classifier.classify(lines);

    assert_eq!(first, second);
}

#[test]
fn unterminated_comment_does_not_leak_into_next_scan() {
    let rules = c_style();
    let classifier = LineClassifier::new(&rules);

    let _ = classifier.classify(["/* never closed"]);
    let counts = classifier.classify(["int x;"]);

    assert_eq!(counts.code, 1);
    assert_eq!(counts.comment, 0);
}

#[test]
fn sum_and_categorized_hold_for_mixed_inputs() {
    let rules = javascript();
    let inputs: [&[&str]; 4] = [
        &[],
        &[""],
        &["/*", "", "*/", "// x", "import a from 'b';", "var q = 1", "z()"],
        &["/* a */ /* b", "c", "d */", "   ", "class K {}"],
    ];

    for lines in inputs {
        let counts = classify(lines.iter(), &rules);
        assert_consistent(&counts, lines.len());
    }
}

#[test]
fn line_counts_add_and_sum() {
    let rules = c_style();
    let a = classify(["// c", "x;"], &rules);
    let b = classify(["", "y;", "z;"], &rules);

    let total: LineCounts = [a, b].iter().sum();

    assert_eq!(total, a + b);
    assert_eq!(total.total, 5);
    assert_eq!(total.code, 3);
    assert_eq!(total.comment, 1);
    assert_eq!(total.blank, 1);
}

#[test]
fn get_reads_each_category() {
    let rules = c_style_with_patterns();
    let counts = classify(
        ["", "// c", "import a", "let b", "function c", "class D", "e"],
        &rules,
    );

    for category in [
        LineCategory::Blank,
        LineCategory::Comment,
        LineCategory::Import,
        LineCategory::VariableDeclaration,
        LineCategory::FunctionDefinition,
        LineCategory::ClassDefinition,
        LineCategory::Code,
    ] {
        assert_eq!(counts.get(category), 1, "{category:?}");
    }
}
