//! Property tests for rule application.

use proptest::prelude::*;
use soundshift_engine::{Engine, EngineConfig};

fn engine_with(config: EngineConfig, rule: &str) -> Engine {
    let mut engine = Engine::with_config(config);
    engine.add_category("C", &["p", "t", "k", "s"]).unwrap();
    engine.add_category("V", &["a", "e", "i"]).unwrap();
    engine.add_rule(rule).unwrap();
    engine
}

fn sorted(word: &str) -> Vec<char> {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars
}

proptest! {
    #[test]
    fn replacement_is_idempotent(word in "[a-z]{1,16}") {
        let engine = engine_with(EngineConfig::default(), "a>e");
        let once = engine.apply(&word).unwrap();
        let twice = engine.apply(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn deletion_removes_every_occurrence(word in "[a-c]{1,16}") {
        let engine = engine_with(EngineConfig::default(), "a>");
        prop_assert_eq!(engine.apply(&word).unwrap(), word.replace('a', ""));
    }

    #[test]
    fn rightward_move_relocates_one_symbol(prefix in "[b-z]{0,4}", suffix in "[b-z]{2,6}") {
        let engine = engine_with(EngineConfig::default(), "a>@2");
        let word = format!("{prefix}a{suffix}");
        let expected = format!("{prefix}{}a{}", &suffix[..2], &suffix[2..]);
        prop_assert_eq!(engine.apply(&word).unwrap(), expected);
    }

    #[test]
    fn pure_movement_terminates_and_preserves_symbols(
        word in "[aeiptks]{1,14}",
        movement in -4i32..=4,
        symmetric in any::<bool>(),
    ) {
        let config = if symmetric { EngineConfig::symmetric() } else { EngineConfig::default() };
        let engine = engine_with(config.with_max_steps(1_000), &format!("C>@{movement}"));
        let output = engine.apply(&word).unwrap();
        prop_assert_eq!(sorted(&output), sorted(&word));
    }

    #[test]
    fn symmetric_growth_terminates(word in "[aeiptks]{1,12}") {
        let engine = engine_with(EngineConfig::symmetric().with_max_steps(1_000), "a>aaa@-1");
        let output = engine.apply(&word).unwrap();
        let grown = word.chars().filter(|&c| c == 'a').count() * 2;
        prop_assert_eq!(output.chars().count(), word.chars().count() + grown);
    }

    #[test]
    fn initial_deletion_strips_every_leading_vowel(word in "[aeiptks]{1,12}") {
        let engine = engine_with(EngineConfig::default(), "V>/#_");
        let expected = word.trim_start_matches(['a', 'e', 'i']);
        prop_assert_eq!(engine.apply(&word).unwrap(), expected);
    }
}
