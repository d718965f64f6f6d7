// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the text pipeline.
//!
//! Arbitrary UTF-8 through normalize, collapse, numerals and variation
//! generation. Nothing may panic, and the shape guarantees must hold.

#![no_main]

use libfuzzer_sys::fuzz_target;
use campus_search::{
    collapse_duplicate_runs, generate_variations, normalize, normalize_search_term,
    roman_to_arabic, strip_leading_zeros,
};

fuzz_target!(|text: &str| {
    let text: String = text.chars().take(500).collect();

    // INVARIANT 1: normalized text is single-spaced and trimmed
    let normalized = normalize(&text);
    assert!(!normalized.starts_with(' ') && !normalized.ends_with(' '));
    assert!(!normalized.contains("  "));

    // INVARIANT 2: no run of three survives collapsing
    let collapsed: Vec<char> = collapse_duplicate_runs(&text).chars().collect();
    for w in collapsed.windows(3) {
        assert!(!(w[0] == w[1] && w[1] == w[2]), "run survived: {:?}", w);
    }

    // INVARIANT 3: helpers never panic on odd input
    let _ = roman_to_arabic(&text);
    let _ = strip_leading_zeros(&text);

    // INVARIANT 4: no empty variation, original always present
    let variations = generate_variations(&text);
    assert!(variations.iter().all(|v| !v.trim().is_empty()));
    if !text.trim().is_empty() {
        assert!(variations.contains(&text));
    }

    // INVARIANT 5: the query envelope is consistent with its tokens
    let query = normalize_search_term(&text);
    assert_eq!(query.tokens.join(" "), query.normalized);
});
