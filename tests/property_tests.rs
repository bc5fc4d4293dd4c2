mod common;

use common::kana_dictionary;
use proptest::prelude::*;
use std::sync::Arc;
use typestrike::matcher::{KeyOutcome, MatchEngine, NasalPolicy};
use typestrike::scoring::ScoringModel;
use typestrike::segmenter::{segment, Group};

// --- STRATEGIES ---

const UNITS: &str = "あいうえおかきくこしたちつてとなにねのやんゃょっー!X";

fn arb_phrase() -> impl Strategy<Value = String> {
    let units: Vec<char> = UNITS.chars().collect();
    prop::collection::vec(prop::sample::select(units), 1..16).prop_map(|v| v.into_iter().collect())
}

fn type_spellings(engine: &mut MatchEngine, spellings: &[String]) -> Vec<KeyOutcome> {
    spellings
        .iter()
        .flat_map(|s| s.chars().collect::<Vec<_>>())
        .map(|k| engine.consume_key(k).outcome)
        .collect()
}

proptest! {
    #[test]
    fn prop_segmentation_reconstructs_phrase(phrase in arb_phrase()) {
        let d = kana_dictionary();
        let groups = segment(&phrase, &d, d.max_key_len());
        let rebuilt: String = groups.iter().map(|g| g.source_units.as_str()).collect();
        prop_assert_eq!(rebuilt, phrase);
    }

    #[test]
    fn prop_each_group_is_the_longest_match(phrase in arb_phrase()) {
        let d = kana_dictionary();
        let units: Vec<char> = phrase.chars().collect();
        let groups = segment(&phrase, &d, d.max_key_len());

        let mut pos = 0;
        for g in &groups {
            let taken = if g.is_passthrough() { 0 } else { g.source_units.chars().count() };
            for len in (taken + 1)..=d.max_key_len() {
                if pos + len > units.len() {
                    break;
                }
                let longer: String = units[pos..pos + len].iter().collect();
                prop_assert!(d.lookup(&longer).is_none(), "{} skipped at {}", longer, pos);
            }
            pos += g.source_units.chars().count();
        }
    }

    #[test]
    fn prop_any_listed_spelling_is_accepted(phrase in arb_phrase(), pick in any::<u64>()) {
        let d = kana_dictionary();
        let groups = segment(&phrase, &d, d.max_key_len());
        let spellings: Vec<String> = groups
            .iter()
            .enumerate()
            .map(|(i, g)| g.romanizations[(pick as usize).wrapping_add(i) % g.romanizations.len()].clone())
            .collect();

        let mut engine = MatchEngine::new(groups, Arc::new(NasalPolicy::disabled()));
        let outcomes = type_spellings(&mut engine, &spellings);
        prop_assert!(!outcomes.contains(&KeyOutcome::Miss), "{:?} -> {:?}", spellings, outcomes);
        prop_assert!(engine.is_complete());
    }

    #[test]
    fn prop_canonical_spelling_survives_nasal_lookahead(phrase in arb_phrase()) {
        let d = kana_dictionary();
        let groups = segment(&phrase, &d, d.max_key_len());
        let spellings: Vec<String> = groups.iter().map(|g: &Group| g.primary().to_string()).collect();

        let mut engine = MatchEngine::new(groups, Arc::new(NasalPolicy::default()));
        let outcomes = type_spellings(&mut engine, &spellings);
        prop_assert!(!outcomes.contains(&KeyOutcome::Miss), "{:?} -> {:?}", spellings, outcomes);
        prop_assert!(engine.is_complete());
    }

    #[test]
    fn prop_miss_never_changes_match_state(
        phrase in arb_phrase(),
        keys in prop::collection::vec(prop::sample::select("aeiknostuxy-!'".chars().collect::<Vec<_>>()), 0..40)
    ) {
        let d = kana_dictionary();
        let mut engine = MatchEngine::new(segment(&phrase, &d, d.max_key_len()), Arc::new(NasalPolicy::default()));
        for k in keys {
            let before = engine.state().clone();
            let ev = engine.consume_key(k);
            if ev.outcome == KeyOutcome::Miss {
                prop_assert_eq!(engine.state(), &before);
                prop_assert!(!ev.question_complete);
            }
        }
    }

    #[test]
    fn prop_damage_is_bounded_and_monotonic(
        base in 1u32..100,
        cap in 0u32..50,
        step in 1u32..100,
        combo in 0u32..100_000
    ) {
        let m = ScoringModel::new(base, cap, step).unwrap();
        let d = m.damage(combo);
        prop_assert!(d >= base && d <= base + cap);
        prop_assert!(m.damage(combo + 1) >= d);
    }
}
