//! Matching and scoring property tests.
//!
//! - appending text to a target never loses a match
//! - query token order does not matter
//! - adding a query token never widens the match
//! - generic file names score below descriptive ones
//! - flat search results are sorted, capped and counted

use proptest::prelude::*;
use campus_search::{calculate_relevance, matches_all_tokens, search, MatchMetadata, SearchOptions};

use crate::common::{assert_sorted_by_score, make_material};

const WORDS: &[&str] = &[
    "calculo", "algebra", "fisica", "quimica", "prueba", "examen", "control", "pauta", "apuntes",
    "i1", "i2", "c3", "2022", "2023", "ii", "lineal", "integral",
];

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(WORDS.to_vec()).prop_map(str::to_string)
}

fn phrase(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..max).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// matchesAllTokens(q, t) implies matchesAllTokens(q, t + s).
    #[test]
    fn prop_match_survives_appended_text(q in phrase(4), t in phrase(6), s in phrase(4)) {
        if matches_all_tokens(&q, &t) {
            let longer = format!("{} {}", t, s);
            prop_assert!(matches_all_tokens(&q, &longer));
        }
    }

    /// The target always matches a query built from its own words, in any order.
    #[test]
    fn prop_token_order_irrelevant(words in prop::collection::vec(word(), 1..5)) {
        let target = words.join(" ");
        let mut reversed = words.clone();
        reversed.reverse();
        prop_assert!(matches_all_tokens(&reversed.join(" "), &target));
    }

    /// A longer query is at least as strict.
    #[test]
    fn prop_extra_token_narrows(q in phrase(3), extra in word(), t in phrase(6)) {
        let narrower = format!("{} {}", q, extra);
        if matches_all_tokens(&narrower, &t) {
            prop_assert!(matches_all_tokens(&q, &t));
        }
    }

    /// "Scan001 ..." is penalized against an otherwise similar descriptive title.
    #[test]
    fn prop_generic_name_scores_lower(q in word()) {
        let meta = MatchMetadata::default();
        let generic = calculate_relevance(&q, &format!("Scan001 {}", q), &meta);
        let descriptive = calculate_relevance(&q, &format!("Apuntes {}", q), &meta);
        prop_assert!(generic < descriptive, "{} >= {}", generic, descriptive);
    }

    /// An exact title match never scores below a partial one.
    #[test]
    fn prop_exact_beats_longer_title(q in phrase(3), extra in phrase(3)) {
        let meta = MatchMetadata::default();
        let exact = calculate_relevance(&q, &q, &meta);
        let longer = calculate_relevance(&q, &format!("{} {}", q, extra), &meta);
        prop_assert!(exact > longer);
    }

    /// Results are sorted, within the cap, and `total` counts every match.
    #[test]
    fn prop_flat_search_envelope(
        titles in prop::collection::vec(phrase(5), 0..30),
        q in phrase(3),
        cap in 1usize..10,
    ) {
        let records: Vec<_> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| make_material(&i.to_string(), t))
            .collect();
        let options = SearchOptions::new(["titulo"]).max_results(cap);
        let response = search(&q, &records, &options);

        prop_assert!(response.results.len() <= cap);
        prop_assert!(response.results.len() <= response.total);
        prop_assert!(response.total <= records.len());
        assert_sorted_by_score(&response.results);
        for m in &response.results {
            prop_assert!(records.iter().any(|r| r.id == m.item.id));
        }
    }
}
