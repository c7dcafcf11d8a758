//! Integration tests for target compilation.

use soundshift_notation::{CategoryTable, TargetCompiler};

fn categories() -> CategoryTable {
    let mut table = CategoryTable::new();
    table.add("K", &["a", "b", "c"]).unwrap();
    table.add("M", &["x", "y", "z"]).unwrap();
    table
}

#[test]
fn mixed_alternation() {
    let target = TargetCompiler::compile("K, a, b,c,d,M, e", &categories())
        .unwrap()
        .unwrap();
    assert_eq!(target.pattern().as_str(), "^((a|b|c)|a|b|c|d|(x|y|z)|e)");
}

#[test]
fn match_is_anchored_to_cursor() {
    let target = TargetCompiler::compile("M", &categories()).unwrap().unwrap();
    assert_eq!(target.match_len("yak"), Some(1));
    assert_eq!(target.match_len("kay"), None);
}

#[test]
fn first_alternative_wins() {
    let target = TargetCompiler::compile("a, ab", &CategoryTable::new())
        .unwrap()
        .unwrap();
    assert_eq!(target.match_len("abc"), Some(1));

    let target = TargetCompiler::compile("ab, a", &CategoryTable::new())
        .unwrap()
        .unwrap();
    assert_eq!(target.match_len("abc"), Some(2));
}

#[test]
fn match_len_is_in_bytes() {
    let target = TargetCompiler::compile("é", &CategoryTable::new())
        .unwrap()
        .unwrap();
    assert_eq!(target.match_len("ék"), Some(2));
}

#[test]
fn blank_and_malformed() {
    assert!(TargetCompiler::compile("", &categories()).unwrap().is_none());
    assert!(TargetCompiler::compile("a)", &categories()).unwrap_err().is_pattern());
}
