//! Integration tests for movement changes under both cursor policies.

use soundshift_engine::{Engine, EngineConfig};
use soundshift_foundation::ErrorKind;

fn apply(config: EngineConfig, rules: &[&str], word: &str) -> String {
    let mut engine = Engine::with_config(config);
    for rule in rules {
        engine.add_rule(rule).unwrap();
    }
    engine.apply(word).unwrap()
}

#[test]
fn rightward_metathesis() {
    assert_eq!(apply(EngineConfig::default(), &["a>@2"], "kabcd"), "kbcad");
    assert_eq!(apply(EngineConfig::symmetric(), &["a>@2"], "kabcd"), "kbcad");
}

#[test]
fn rightward_move_is_not_revisited() {
    // The moved symbol would match again if the cursor did not step past it.
    assert_eq!(apply(EngineConfig::default(), &["a>@1"], "kabc"), "kbac");
}

#[test]
fn rightward_move_clamped_at_end() {
    assert_eq!(apply(EngineConfig::default(), &["k>@9"], "kat"), "atk");
}

#[test]
fn leftward_move() {
    assert_eq!(apply(EngineConfig::default(), &["r>@-1"], "tark"), "trak");
    assert_eq!(apply(EngineConfig::symmetric(), &["r>@-1"], "tark"), "trak");
}

#[test]
fn leftward_move_clamped_at_start() {
    assert_eq!(apply(EngineConfig::default(), &["t>@-9"], "kat"), "tka");
}

#[test]
fn leftward_move_with_replacement() {
    assert_eq!(apply(EngineConfig::default(), &["h>x@-2"], "tuah"), "txua");
}

#[test]
fn policies_differ_on_growing_leftward_moves() {
    let asymmetric = EngineConfig::default().with_max_steps(200);
    let mut engine = Engine::with_config(asymmetric);
    engine.add_rule("a>aaa@-1").unwrap();
    let err = engine.apply("ka").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::LimitExceeded { limit: 200, .. }));

    assert_eq!(apply(EngineConfig::symmetric(), &["a>aaa@-1"], "ka"), "aaak");
}

#[test]
fn conditioned_movement() {
    // Move `s` after a following stop, only word-initially
    assert_eq!(apply(EngineConfig::default(), &["s>@1/#_"], "spa"), "psa");
    assert_eq!(apply(EngineConfig::default(), &["s>@1/#_"], "aspa"), "aspa");
}
