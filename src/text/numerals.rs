// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Roman ↔ Arabic numeral rewriting for course and evaluation numbers.
//!
//! Only the single numerals I through X are recognized, and only when they stand
//! alone as a token: bounded by the ends of the string or by a separator
//! (whitespace, `-`, `_`, `.`). Separators are preserved as-is. "XI" is not a
//! numeral here, and neither is the "i" inside "i2".

/// Roman numerals I..X and their Arabic values, as a lookup table.
pub const ROMAN_NUMERALS: [(&str, &str); 10] = [
    ("I", "1"),
    ("II", "2"),
    ("III", "3"),
    ("IV", "4"),
    ("V", "5"),
    ("VI", "6"),
    ("VII", "7"),
    ("VIII", "8"),
    ("IX", "9"),
    ("X", "10"),
];

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '.')
}

/// Rewrite every standalone token for which `lookup` has a replacement.
fn replace_tokens(text: &str, lookup: impl Fn(&str) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut start = 0;

    for (idx, c) in text.char_indices() {
        if is_separator(c) {
            push_token(&mut out, &text[start..idx], &lookup);
            out.push(c);
            start = idx + c.len_utf8();
        }
    }
    push_token(&mut out, &text[start..], &lookup);

    out
}

fn push_token(out: &mut String, token: &str, lookup: &impl Fn(&str) -> Option<&'static str>) {
    match lookup(token) {
        Some(replacement) => out.push_str(replacement),
        None => out.push_str(token),
    }
}

/// Convert standalone Roman numerals I..X to Arabic digits (case-insensitive).
///
/// "calculo ii" → "calculo 2", "Fisica-III" → "Fisica-3", "xi" → "xi".
pub fn roman_to_arabic(text: &str) -> String {
    replace_tokens(text, |token| {
        ROMAN_NUMERALS
            .iter()
            .find(|(roman, _)| roman.eq_ignore_ascii_case(token))
            .map(|(_, arabic)| *arabic)
    })
}

/// Convert standalone numbers 1..10 to uppercase Roman numerals.
///
/// "calculo 2" → "calculo II", "control_3" → "control_III", "11" → "11".
pub fn arabic_to_roman(text: &str) -> String {
    replace_tokens(text, |token| {
        ROMAN_NUMERALS
            .iter()
            .find(|(_, arabic)| *arabic == token)
            .map(|(roman, _)| *roman)
    })
}
