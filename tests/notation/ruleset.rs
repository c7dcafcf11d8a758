//! Integration tests for ruleset sources.

use soundshift_notation::{Statement, parse_ruleset};

const SOURCE: &str = "\
// Grimm's law, abridged
S = p, t, k
F = f, θ, x

  S>F
// trailing comment
d>t/V_
";

#[test]
fn statements_in_source_order() {
    let statements = parse_ruleset(SOURCE).unwrap();
    let lines: Vec<usize> = statements.iter().map(Statement::line).collect();
    assert_eq!(lines, [2, 3, 5, 7]);

    assert!(matches!(
        &statements[1],
        Statement::Category { identifier, sounds, .. }
            if identifier == "F" && sounds == &["f", "θ", "x"]
    ));
    assert!(matches!(
        &statements[2],
        Statement::Rule { text, .. } if text == "S>F"
    ));
}

#[test]
fn empty_source() {
    assert!(parse_ruleset("").unwrap().is_empty());
    assert!(parse_ruleset("\n// nothing\n\n").unwrap().is_empty());
}

#[test]
fn bad_declaration_has_context() {
    let err = parse_ruleset("S = p\n= t, k\n").unwrap_err();
    assert!(err.is_syntax());
    let context = err.context.unwrap();
    assert_eq!(context.line, Some(2));
    assert_eq!(context.text.as_deref(), Some("= t, k"));
}
