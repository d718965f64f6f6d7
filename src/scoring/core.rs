// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relevance score.
//!
//! Additive, higher is better, and *not* guaranteed non-negative: the generic
//! file-name penalty can push a weak match below zero.
//!
//! ```text
//! score = exact·[q == t]
//!       + word·|query words that are whole target words|
//!       + substring·[t contains q]
//!       + similarity·sim(q, t)
//!       + file_name·[is file name]
//!       + extension·[preferred extension]
//!       + generic_penalty·[t looks like "scan001"]
//!
//! sim(q, t) = 0.6·word_overlap + 0.3·(0.5 if either contains the other) + 0.1·char_overlap
//! ```
//!
//! Every constant lives in [`ScoringWeights`] so it can be tuned (and tested)
//! one at a time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::text::{normalize, Ruleset};

/// Weights for every term of the relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringWeights {
    /// Normalized query equals normalized target.
    pub exact_match: f64,
    /// Per query word that is also a whole target word.
    pub word_match: f64,
    /// Normalized target contains normalized query.
    pub substring: f64,
    /// Multiplier for the 0..1 similarity blend.
    pub similarity: f64,
    /// Match came from a file's own fields rather than its folder path.
    pub file_name_bonus: f64,
    /// Target has one of `preferred_extensions`.
    pub extension_bonus: f64,
    /// Added (so negative) when the target looks like a scanner default name.
    pub generic_name_penalty: f64,
    /// Share of word overlap in the similarity blend.
    pub word_overlap_weight: f64,
    /// Share of the containment bonus in the similarity blend.
    pub containment_weight: f64,
    /// Value of the containment term when either string contains the other.
    pub containment_bonus: f64,
    /// Share of distinct-character overlap in the similarity blend.
    pub char_overlap_weight: f64,
    /// Extensions that earn `extension_bonus`, without the dot.
    pub preferred_extensions: Vec<String>,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact_match: 100.0,
            word_match: 20.0,
            substring: 50.0,
            similarity: 30.0,
            file_name_bonus: 10.0,
            extension_bonus: 5.0,
            generic_name_penalty: -20.0,
            word_overlap_weight: 0.6,
            containment_weight: 0.3,
            containment_bonus: 0.5,
            char_overlap_weight: 0.1,
            preferred_extensions: vec!["pdf".into(), "docx".into(), "xlsx".into()],
        }
    }
}

/// Context about where the target text came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchMetadata<'a> {
    pub is_file_name: bool,
    /// File extension, with or without the leading dot.
    pub extension: Option<&'a str>,
}

impl<'a> MatchMetadata<'a> {
    pub fn file_name(extension: Option<&'a str>) -> Self {
        Self {
            is_file_name: true,
            extension,
        }
    }
}

/// Scores (query, target) pairs against a weight table and a locale ruleset.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    weights: &'a ScoringWeights,
    ruleset: &'a Ruleset,
}

impl<'a> Scorer<'a> {
    pub fn new(weights: &'a ScoringWeights, ruleset: &'a Ruleset) -> Self {
        Self { weights, ruleset }
    }

    pub fn weights(&self) -> &ScoringWeights {
        self.weights
    }

    /// Score raw strings; both sides are normalized first.
    pub fn score(&self, query: &str, target: &str, metadata: &MatchMetadata<'_>) -> f64 {
        self.score_normalized(&normalize(query), &normalize(target), metadata)
    }

    /// Score strings that are already normalized.
    pub fn score_normalized(&self, query: &str, target: &str, metadata: &MatchMetadata<'_>) -> f64 {
        let w = self.weights;
        let mut score = 0.0;

        if !query.is_empty() {
            if query == target {
                score += w.exact_match;
            }

            score += w.word_match * shared_word_count(query, target) as f64;

            if target.contains(query) {
                score += w.substring;
            }

            score += w.similarity * self.similarity(query, target);
        }

        if metadata.is_file_name {
            score += w.file_name_bonus;
        }

        if let Some(ext) = metadata.extension {
            let ext = ext.trim().trim_start_matches('.');
            if w
                .preferred_extensions
                .iter()
                .any(|preferred| preferred.trim_start_matches('.').eq_ignore_ascii_case(ext))
            {
                score += w.extension_bonus;
            }
        }

        if self.ruleset.is_generic_file_name(target) {
            score += w.generic_name_penalty;
        }

        score
    }

    /// General similarity in 0..=1 between two normalized strings.
    ///
    /// Weighted blend of word overlap, mutual containment and distinct
    /// character overlap. Empty on either side means 0.
    pub fn similarity(&self, query: &str, target: &str) -> f64 {
        if query.is_empty() || target.is_empty() {
            return 0.0;
        }
        let w = self.weights;

        let query_words = query.split_whitespace().count();
        let target_words = target.split_whitespace().count();
        let word_overlap =
            shared_word_count(query, target) as f64 / query_words.max(target_words).max(1) as f64;

        let containment = if target.contains(query) || query.contains(target) {
            w.containment_bonus
        } else {
            0.0
        };

        let query_chars: HashSet<char> = query.chars().filter(|c| !c.is_whitespace()).collect();
        let target_chars: HashSet<char> = target.chars().filter(|c| !c.is_whitespace()).collect();
        let shared_chars = query_chars.intersection(&target_chars).count();
        let char_overlap =
            shared_chars as f64 / query_chars.len().max(target_chars.len()).max(1) as f64;

        w.word_overlap_weight * word_overlap
            + w.containment_weight * containment
            + w.char_overlap_weight * char_overlap
    }
}

/// Query words (with repetition) that appear as whole words in the target.
fn shared_word_count(query: &str, target: &str) -> usize {
    let target_words: HashSet<&str> = target.split_whitespace().collect();
    query
        .split_whitespace()
        .filter(|word| target_words.contains(word))
        .count()
}

/// Score with the default weights and the built-in ruleset.
pub fn calculate_relevance(query: &str, target: &str, metadata: &MatchMetadata<'_>) -> f64 {
    static WEIGHTS: std::sync::LazyLock<ScoringWeights> =
        std::sync::LazyLock::new(ScoringWeights::default);
    Scorer::new(&WEIGHTS, Ruleset::spanish_academic()).score(query, target, metadata)
}
