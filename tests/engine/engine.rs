//! Integration tests for the engine instance.

use soundshift_engine::{Engine, EngineConfig};

fn engine(categories: &[(&str, &[&str])], rules: &[&str]) -> Engine {
    let mut engine = Engine::new();
    for (identifier, sounds) in categories {
        engine.add_category(identifier, *sounds).unwrap();
    }
    for rule in rules {
        engine.add_rule(rule).unwrap();
    }
    engine
}

// =============================================================================
// End-to-End
// =============================================================================

#[test]
fn literal_replacement() {
    assert_eq!(engine(&[], &["a>e"]).apply("cat").unwrap(), "cet");
}

#[test]
fn deletion_in_one_sweep() {
    assert_eq!(engine(&[], &["a>"]).apply("banana").unwrap(), "bnn");
}

#[test]
fn intervocalic_lenition() {
    let engine = engine(
        &[("V", &["a", "e", "i", "o", "u"]), ("S", &["p", "t", "k"])],
        &["S>h/V_V"],
    );
    assert_eq!(engine.apply("apakita").unwrap(), "ahahiha");
    assert_eq!(engine.apply("pata").unwrap(), "paha");
}

#[test]
fn exception_and_alternative() {
    // Final vowels raise, except after n where they drop
    let engine = engine(
        &[("V", &["a", "e", "o"])],
        &["V>i/_#!n_/"],
    );
    assert_eq!(engine.apply("kasa").unwrap(), "kasi");
    assert_eq!(engine.apply("kana").unwrap(), "kan");
}

#[test]
fn global_condition() {
    // Only words containing a nasal lose their final vowel
    let engine = engine(&[("N", &["m", "n"])], &["a>/_#, N"]);
    assert_eq!(engine.apply("kama").unwrap(), "kam");
    assert_eq!(engine.apply("kasa").unwrap(), "kasa");
}

#[test]
fn word_initial_prothesis() {
    let engine = engine(&[("S", &["p", "t", "k"])], &[">e/#_sS"]);
    assert_eq!(engine.apply("stella").unwrap(), "estella");
    assert_eq!(engine.apply("sella").unwrap(), "sella");
}

#[test]
fn rules_feed_each_other_in_order() {
    let engine = engine(&[("V", &["a", "i"])], &["k>g/V_V", "g>j/_i", "a>o"]);
    assert_eq!(engine.apply("akika").unwrap(), "ojigo");
}

#[test]
fn every_rule_sweeps_the_whole_word() {
    let engine = engine(
        &[("V", &["a", "e", "i", "o"]), ("S", &["p", "t"])],
        &["r>@-1", "V>e/_#", "S>b/V_V", "e>i/#_"],
    );
        assert_eq!(engine.apply("tarpo").unwrap(), "trabe");
    assert_eq!(engine.apply("ekta").unwrap(), "ikte");
}

#[test]
fn derivation_visits_every_rule() {
    let engine = engine(&[("V", &["a", "o"])], &["k>@1", "V>u/_#", "t>d"]);
    let derivation = engine.derive("akta").unwrap();
    let indices: Vec<usize> = derivation.steps.iter().map(|s| s.rule_index).collect();
    assert_eq!(indices, [0, 1, 2]);
    assert_eq!(derivation.output, "adku");
}

#[test]
fn words_longer_than_the_step_allowance() {
    let mut engine = Engine::with_config(EngineConfig::default().with_max_steps(100));
    engine.add_rule("a>e").unwrap();
    engine.add_rule("e>i/_#").unwrap();
    let word = "ba".repeat(5_000);
    let expected = format!("{}bi", "be".repeat(4_999));
    assert_eq!(engine.apply(&word).unwrap(), expected);
}

#[test]
fn multi_symbol_replacement() {
    let engine = engine(&[], &["o>uo/_#"]);
    assert_eq!(engine.apply("bono").unwrap(), "bonuo");
}

#[test]
fn multi_byte_symbols() {
    let engine = engine(&[("V", &["á", "é"])], &["V>ə", "þ>th"]);
    assert_eq!(engine.apply("þéþá").unwrap(), "thəthə");
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn unknown_identifiers_are_literal() {
    let engine = engine(&[], &["V>x"]);
    assert_eq!(engine.apply("aVe").unwrap(), "axe");
}

#[test]
fn duplicate_category_uses_first() {
    let engine = engine(&[("V", &["a"]), ("V", &["e"])], &["V>o"]);
    assert_eq!(engine.apply("ae").unwrap(), "oe");
}

#[test]
fn compile_failures_are_reported() {
    let mut engine = Engine::new();
    assert!(engine.add_category("K", &["(a"]).unwrap_err().is_pattern());
    assert!(engine.add_rule("a>b/c_d_e").unwrap_err().is_syntax());
    assert!(engine.add_rule("a>b@z").unwrap_err().is_syntax());
    assert!(engine.add_rule("a b c").unwrap_err().is_syntax());
    assert!(engine.add_rule("[>b").unwrap_err().is_pattern());
    assert!(engine.rules().is_empty());
    assert!(engine.categories().is_empty());
}

#[test]
fn blank_word_is_rejected() {
    let engine = engine(&[], &["a>e"]);
    assert!(engine.apply("").unwrap_err().is_empty_word());
    assert!(engine.apply("   ").unwrap_err().is_empty_word());
}

#[test]
fn engine_is_shareable_across_threads() {
    let shared = engine(&[], &["a>e"]);
    let engine = &shared;
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["cat", "bat", "hat"]
            .into_iter()
            .map(|word| scope.spawn(move || engine.apply(word).unwrap()))
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, ["cet", "bet", "het"]);
    });
}

// =============================================================================
// Ruleset Loading
// =============================================================================

#[test]
fn load_ruleset_then_apply() {
    let mut engine = Engine::new();
    engine
        .load_ruleset("// Lenition\nV = a, e, i, o, u\nS = p, t, k\nS>/V_V\nV>/_#\n")
        .unwrap();
    assert_eq!(engine.apply("lupata").unwrap(), "lua");
}

#[test]
fn load_ruleset_failure_keeps_engine() {
    let mut engine = Engine::new();
    engine.load_ruleset("V = a, e\nV>i\n").unwrap();

    let err = engine.load_ruleset("C = p, t\nC>b/V_\n(>x\n").unwrap_err();
    assert!(err.is_pattern());
    assert_eq!(err.context.as_ref().and_then(|c| c.line), Some(3));

    assert_eq!(engine.rules().len(), 1);
    assert_eq!(engine.categories().len(), 1);
    assert_eq!(engine.apply("pate").unwrap(), "piti");
}
