// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token containment: "does every query word appear somewhere in the target?"

use super::normalize::normalize;

/// Split text into normalized, non-empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text).split_whitespace().map(str::to_owned).collect()
}

/// True iff every normalized token of `query` is a substring of the normalized `target`.
///
/// Order-independent, and no token may be missing. A query with no tokens
/// matches everything; callers guard against empty queries upstream.
pub fn matches_all_tokens(query: &str, target: &str) -> bool {
    matches_tokens(&tokenize(query), &normalize(target))
}

/// [`matches_all_tokens`] for callers that already hold normalized tokens and target.
#[inline]
pub fn matches_tokens<S: AsRef<str>>(tokens: &[S], normalized_target: &str) -> bool {
    tokens
        .iter()
        .all(|token| normalized_target.contains(token.as_ref()))
}
