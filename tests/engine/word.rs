//! Integration tests for the word cursor.

use soundshift_engine::{CursorPolicy, Word};
use soundshift_notation::{Change, Environment};

#[test]
fn views_across_a_sweep() {
    let mut word = Word::new("pineapple").unwrap();
    let mut seen = Vec::new();
    while word.advance() {
        seen.push((
            word.before().into_owned(),
            word.remainder().to_string(),
            word.after(1).into_owned(),
        ));
    }
    assert_eq!(seen.len(), 9);
    assert_eq!(
        seen[0],
        ("#".to_string(), "pineapple".to_string(), "ineapple#".to_string())
    );
    assert_eq!(
        seen[8],
        ("#pineappl".to_string(), "e".to_string(), "#".to_string())
    );
}

#[test]
fn boundaries_survive_mutation() {
    let mut word = Word::new("ab").unwrap();
    assert!(word.advance());
    word.execute(&Change::deletion(), 1, CursorPolicy::Asymmetric);
    assert!(word.advance());
    word.execute(&Change::deletion(), 1, CursorPolicy::Asymmetric);
    assert_eq!(word.symbols(), ['#', '#']);
    assert_eq!(word.to_string(), "");
    assert!(!word.advance());
}

#[test]
fn single_symbol_word() {
    let mut word = Word::new("a").unwrap();
    assert!(word.advance());
    assert_eq!(word.remainder(), "a");
    assert!(!word.advance());
}

#[test]
fn inner_boundary_ends_the_scan() {
    let mut word = Word::new("ka#ta").unwrap();
    let mut visited = Vec::new();
    while word.advance() {
        visited.push(word.remainder().to_string());
    }
    assert_eq!(visited, ["ka#ta", "a#ta"]);

    word.rewind();
    assert_eq!(word.index(), 0);
    assert!(word.advance());
    assert_eq!(word.remainder(), "ka#ta");
}

#[test]
fn bounded_view() {
    let word = Word::new("\tkat ").unwrap();
    assert_eq!(word.bounded(), "#kat#");
    assert_eq!(word.into_string(), "kat");
}
