// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A query's variations, normalized once and reused for every record.

use crate::scoring::{MatchMetadata, Scorer};
use crate::text::{matches_tokens, normalize};
use crate::types::SearchQuery;

#[derive(Debug, Clone)]
struct Variation {
    normalized: String,
    tokens: Vec<String>,
}

/// The variations of a [`SearchQuery`], ready for matching.
///
/// Variations that normalize to the same text are kept once; variations
/// that normalize to nothing are dropped.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    variations: Vec<Variation>,
}

impl PreparedQuery {
    pub fn new(query: &SearchQuery) -> Self {
        let mut variations: Vec<Variation> = Vec::with_capacity(query.variations.len());
        for raw in &query.variations {
            let normalized = normalize(raw);
            if normalized.is_empty() || variations.iter().any(|v| v.normalized == normalized) {
                continue;
            }
            let tokens = normalized.split_whitespace().map(str::to_owned).collect();
            variations.push(Variation { normalized, tokens });
        }
        Self { variations }
    }

    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.variations.len()
    }

    /// Does any variation have all of its tokens in the (normalized) target?
    pub fn matches(&self, target: &str) -> bool {
        self.variations
            .iter()
            .any(|v| matches_tokens(&v.tokens, target))
    }

    /// Best score among the variations that match the (normalized) target.
    ///
    /// `None` when no variation matches.
    pub fn best_score(
        &self,
        scorer: &Scorer<'_>,
        target: &str,
        metadata: &MatchMetadata<'_>,
    ) -> Option<f64> {
        self.variations
            .iter()
            .filter(|v| matches_tokens(&v.tokens, target))
            .map(|v| scorer.score_normalized(&v.normalized, target, metadata))
            .max_by(f64::total_cmp)
    }

    /// Query tokens matched by the target, counted on the variation that
    /// matches most of its own tokens. Returns (matched, out of).
    pub fn token_coverage(&self, target: &str) -> (usize, usize) {
        self.variations
            .iter()
            .map(|v| {
                let hits = v.tokens.iter().filter(|t| target.contains(t.as_str())).count();
                (hits, v.tokens.len())
            })
            .max_by(|a, b| {
                let ra = a.0 as f64 / a.1.max(1) as f64;
                let rb = b.0 as f64 / b.1.max(1) as f64;
                ra.total_cmp(&rb)
            })
            .unwrap_or((0, 0))
    }
}
