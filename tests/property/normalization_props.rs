//! Normalization property tests.
//!
//! - normalize is idempotent
//! - collapse_duplicate_runs never leaves a run of three
//! - roman/arabic round-trip for standalone numerals 1..=10
//! - canonical form is always a fixed point of normalize

use proptest::prelude::*;
use campus_search::{
    arabic_to_roman, canonicalize, collapse_duplicate_runs, normalize, normalize_search_term,
    roman_to_arabic, strip_leading_zeros, Ruleset,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Titles the way students write them: accents, punctuation, codes, numerals.
fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(vec![
                "Cálculo", "ÁLGEBRA", "física", "Química", "año", "I2", "C3", "II", "iv",
                "MAT-001", "(QIM100E)", "solución", "pauta", "2023", "holaaaa", "scan001",
            ])
            .prop_map(str::to_string),
            "[a-zA-Z0-9]{1,8}",
            "[ -/_.]{1,3}",
        ],
        0..8,
    )
    .prop_map(|parts| parts.join(" "))
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![
        title_strategy(),
        "[a-zA-ZáéíóúñüÁÉÍÓÚÑÜ0-9 .,;:()_-]{0,40}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// normalize(normalize(x)) == normalize(x)
    #[test]
    fn prop_normalize_idempotent(text in any_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Normalized text is lowercase words separated by single spaces.
    #[test]
    fn prop_normalize_shape(text in any_text()) {
        let out = normalize(&text);
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        prop_assert!(out.chars().all(|c| c == ' ' || c.is_alphanumeric() || c == '_'));
    }

    /// No character repeats three times in a row after collapsing.
    #[test]
    fn prop_collapse_bound(text in any_text()) {
        let out: Vec<char> = collapse_duplicate_runs(&text).chars().collect();
        for w in out.windows(3) {
            prop_assert!(!(w[0] == w[1] && w[1] == w[2]), "run of {:?}", w[0]);
        }
    }

    /// Collapsing is idempotent.
    #[test]
    fn prop_collapse_idempotent(text in any_text()) {
        let once = collapse_duplicate_runs(&text);
        prop_assert_eq!(collapse_duplicate_runs(&once), once);
    }

    /// A leading digit run is never touched.
    #[test]
    fn prop_leading_digits_untouched(digits in "[0-9]{1,6}") {
        prop_assert_eq!(strip_leading_zeros(&digits), digits);
    }

    /// Canonical form is already normalized.
    #[test]
    fn prop_canonical_is_normalized(text in title_strategy()) {
        let canonical = canonicalize(&text, Ruleset::spanish_academic());
        prop_assert_eq!(normalize(&canonical), canonical);
    }

    /// The query envelope always holds its original and canonical forms.
    #[test]
    fn prop_query_well_formed(text in title_strategy()) {
        let query = normalize_search_term(&text);
        if text.trim().is_empty() {
            prop_assert!(query.variations.is_empty());
        } else {
            prop_assert!(query.variations.contains(&text));
            if !query.normalized.is_empty() {
                prop_assert!(query.variations.contains(&query.normalized));
            }
        }
        prop_assert!(query.variations.iter().all(|v| !v.is_empty()));
    }
}

proptest! {
    /// romanToArabic(arabicToRoman(s)) == normalize(s) for standalone 1..=10.
    #[test]
    fn prop_numeral_round_trip(n in 1u32..=10) {
        let s = n.to_string();
        prop_assert_eq!(roman_to_arabic(&arabic_to_roman(&s)), normalize(&s));
    }

    /// Same, with the numeral embedded in a title.
    #[test]
    fn prop_numeral_round_trip_in_title(
        n in 1u32..=10,
        word in prop::sample::select(vec!["calculo", "fisica", "prueba", "control", "algebra"]),
    ) {
        let s = format!("{} {}", word, n);
        prop_assert_eq!(roman_to_arabic(&arabic_to_roman(&s)), s);
    }
}
