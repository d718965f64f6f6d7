// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query variations: several canonical rewrites of one query, tried as a disjunction.
//!
//! "MAT1203", "mat-1203" and "MAT 1203" are the same course code. Instead of a
//! single edit-distance threshold we generate the plausible spellings up front
//! and accept a record if it matches *any* of them.

use std::collections::{BTreeSet, HashSet};

use super::corrections::Ruleset;
use super::normalize::{canonicalize, collapse_duplicate_runs, normalize, strip_leading_zeros};
use super::numerals::{arabic_to_roman, roman_to_arabic};

/// Generate query variations with the built-in ruleset.
pub fn generate_variations(query: &str) -> BTreeSet<String> {
    generate_variations_with(query, Ruleset::spanish_academic())
}

/// Generate the set of alternate spellings for `query`.
///
/// Always includes the raw query and its canonical form. Adds: the normalized
/// form with duplicate runs collapsed; the keyboard-corrected form; that form
/// with Roman numerals as Arabic, with Arabic as Roman, and with leading zeros
/// stripped; the corrected form without whitespace; split at letter/digit
/// boundaries; and with `-`/`_`/`.` as spaces or removed.
///
/// Splitting variants that would introduce a single-letter token the query
/// did not already have are dropped: "i2" → "i 2" would otherwise match any
/// title containing an "i" and a "2" anywhere. Lone digits are kept, so
/// "calculo2" still yields "calculo 2".
///
/// Empty strings never appear in the result. Whitespace-only input yields an
/// empty set.
pub fn generate_variations_with(query: &str, ruleset: &Ruleset) -> BTreeSet<String> {
    let mut variations = BTreeSet::new();
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return variations;
    }

    let normalized = canonicalize(query, ruleset);
    let corrected = collapse_whitespace(&ruleset.correct(&trimmed.to_lowercase()));
    let roman_as_arabic = roman_to_arabic(&corrected);

    let fixed = [
        query.to_string(),
        normalized.clone(),
        collapse_duplicate_runs(&normalize(query)),
        corrected.clone(),
        roman_as_arabic.clone(),
        arabic_to_roman(&corrected),
        strip_leading_zeros(&roman_as_arabic),
        corrected.split_whitespace().collect::<String>(),
        replace_separators(&corrected, ""),
    ];
    for candidate in fixed {
        insert_variation(&mut variations, candidate);
    }

    let known_tokens: HashSet<String> = normalized
        .split_whitespace()
        .chain(normalize(&corrected).split_whitespace())
        .map(str::to_owned)
        .collect();
    for spaced in [
        split_alnum_boundaries(&corrected),
        replace_separators(&corrected, " "),
    ] {
        if !introduces_single_letter_token(&spaced, &known_tokens) {
            insert_variation(&mut variations, spaced);
        }
    }

    variations
}

fn insert_variation(variations: &mut BTreeSet<String>, candidate: String) {
    if !candidate.trim().is_empty() {
        variations.insert(candidate);
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace `-`, `_`, `.` with `with`, then collapse whitespace.
fn replace_separators(text: &str, with: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| match c {
            '-' | '_' | '.' => with.to_string(),
            other => other.to_string(),
        })
        .collect();
    collapse_whitespace(&replaced)
}

/// Insert a space at every letter→digit and digit→letter boundary.
///
/// "mat1203" → "mat 1203", "1203mat" → "1203 mat", "qim100e" → "qim 100 e".
fn split_alnum_boundaries(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if let Some(p) = prev {
            let letter_then_digit = p.is_alphabetic() && c.is_ascii_digit();
            let digit_then_letter = p.is_ascii_digit() && c.is_alphabetic();
            if letter_then_digit || digit_then_letter {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

fn introduces_single_letter_token(candidate: &str, known: &HashSet<String>) -> bool {
    normalize(candidate).split_whitespace().any(|token| {
        let mut chars = token.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
            && !known.contains(token)
    })
}
