//! Integration tests for derivations.

use soundshift_engine::{DerivationFormatter, Engine, HumanFormatter};

fn engine() -> Engine {
    let mut engine = Engine::new();
    engine
        .load_ruleset(
            "\
V = a, e, i, o, u
p>b/V_V
u>o/_#
k>x
b>v/V_V
",
        )
        .unwrap();
    engine
}

#[test]
fn derive_matches_apply() {
    let engine = engine();
    for word in ["lupu", "kapa", "sun", "x"] {
        let derivation = engine.derive(word).unwrap();
        assert_eq!(derivation.output, engine.apply(word).unwrap());
    }
}

#[test]
fn derivation_records_only_changes() {
    let derivation = engine().derive("lupu").unwrap();
    assert_eq!(derivation.input, "lupu");
    assert_eq!(derivation.output, "luvo");

    let steps: Vec<(usize, &str, &str)> = derivation
        .steps
        .iter()
        .map(|s| (s.rule_index, s.before.as_str(), s.after.as_str()))
        .collect();
    assert_eq!(
        steps,
        [(0, "lupu", "lubu"), (1, "lubu", "lubo"), (3, "lubo", "luvo")]
    );
}

#[test]
fn unchanged_word() {
    let derivation = engine().derive(" st ").unwrap();
    assert!(derivation.is_unchanged());
    assert_eq!(derivation.input, "st");
    assert_eq!(derivation.output, "st");
}

#[test]
fn human_format() {
    let derivation = engine().derive("kapa").unwrap();
    let text = HumanFormatter::new().with_index().with_rule().format(&derivation);
    assert_eq!(
        text,
        "[0] p>b/V_V: kapa → kaba\n[2] k>x: kaba → xaba\n[3] b>v/V_V: xaba → xava"
    );
}

#[test]
fn derive_rejects_blank_word() {
    assert!(engine().derive("").unwrap_err().is_empty_word());
}
