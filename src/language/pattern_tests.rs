use super::*;

#[test]
fn regex_pattern_matches_line() {
    let pattern = RegexPattern::new(r"^import\s+").unwrap();
    assert!(pattern.is_match("import os"));
    assert!(!pattern.is_match("x = 1"));
}

#[test]
fn regex_pattern_keeps_source() {
    let pattern = RegexPattern::new(r"^def\s+\w+").unwrap();
    assert_eq!(pattern.as_str(), r"^def\s+\w+");
}

#[test]
fn invalid_regex_is_rejected() {
    let err = RegexPattern::new("(let|const").unwrap_err();
    assert!(matches!(err, CodeCounterError::InvalidRegex { ref pattern, .. } if pattern == "(let|const"));
}
