// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case, accent and punctuation folding, plus the small digit/letter rewrites.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::corrections::Ruleset;
use super::numerals::roman_to_arabic;

/// Normalize a string for comparison: lowercase, strip diacritics, punctuation
/// to spaces, collapse whitespace.
///
/// - "Cálculo II" → "calculo ii"
/// - "Química (QIM100E)" → "quimica qim100e"
/// - "año" → "ano" (ñ loses its tilde like any other combining mark)
///
/// # Algorithm
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Lowercase, then drop every combining mark
/// 3. Anything that is not a word character (alphanumeric or `_`) or
///    whitespace becomes a space
/// 4. Collapse whitespace runs and trim
///
/// Idempotent: the output contains only lowercase word characters separated by
/// single spaces, which every step leaves alone.
pub fn normalize(value: &str) -> String {
    let folded: String = value
        .nfd()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Collapse any character repeated three or more times in a row down to two.
///
/// "holaaaa" → "holaa", "mat0001" → "mat001". Runs of one or two are untouched,
/// so the output never contains a run of three.
pub fn collapse_duplicate_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for c in text.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run <= 2 {
            out.push(c);
        }
    }

    crate::contracts::check_no_long_runs(&out);
    out
}

/// Remove leading zeros from digit runs that follow a non-digit character.
///
/// "MAT001" → "MAT1", "sala 007" → "sala 7". A run that is all zeros keeps its
/// last digit ("MAT000" → "MAT0"), and a string that *starts* with digits is
/// left alone ("0001" stays "0001") since there is no preceding non-digit.
pub fn strip_leading_zeros(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let after_non_digit = i > 0 && !chars[i - 1].is_ascii_digit();

        if c == '0' && after_non_digit {
            // Skip zeros while another digit follows; keep the last one standing.
            let mut j = i;
            while j + 1 < chars.len() && chars[j] == '0' && chars[j + 1].is_ascii_digit() {
                j += 1;
            }
            out.push(chars[j]);
            i = j + 1;
            continue;
        }

        out.push(c);
        i += 1;
    }

    out
}

/// The full canonical pipeline used to build `SearchQuery::normalized`.
///
/// Order matters: error correction → duplicate collapse → normalize →
/// roman→arabic → leading-zero strip. Corrections run first because the table
/// is keyed on raw spellings, and numerals run after normalization so that
/// punctuation around them has already become a separator.
pub fn canonicalize(text: &str, ruleset: &Ruleset) -> String {
    let corrected = ruleset.correct(text);
    let collapsed = collapse_duplicate_runs(&corrected);
    let normalized = normalize(&collapsed);
    let arabic = roman_to_arabic(&normalized);
    strip_leading_zeros(&arabic)
}
