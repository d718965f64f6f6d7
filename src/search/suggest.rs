// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "Did you mean" words for searches that came back (nearly) empty.
//!
//! Best effort. Scans records that match *some but not all* query tokens and
//! offers words from them that extend one of the tokens: "calc integral" over
//! "Cálculo diferencial" suggests "calculo".

use std::collections::HashSet;

use super::flat::searchable_text;
use super::SearchEngine;
use crate::types::{Record, SearchQuery};

impl SearchEngine {
    /// Suggest up to `max_suggestions` distinct words for a raw query.
    pub fn suggest(&self, raw: &str, records: &[Record], fields: &[String]) -> Vec<String> {
        let query = self.normalize_query(raw);
        if self.is_too_short(&query) {
            return Vec::new();
        }
        self.suggest_for(&query, records, fields)
    }

    pub(crate) fn suggest_for(
        &self,
        query: &SearchQuery,
        records: &[Record],
        fields: &[String],
    ) -> Vec<String> {
        let limits = &self.config.limits;
        let tokens = &query.tokens;
        let mut seen: HashSet<String> = HashSet::new();
        let mut suggestions = Vec::new();

        if tokens.len() < 2 || limits.max_suggestions == 0 {
            return suggestions;
        }

        for record in records {
            let text = searchable_text(record, fields);
            let hits = tokens.iter().filter(|t| text.contains(t.as_str())).count();
            if hits == 0 || hits == tokens.len() {
                continue;
            }

            for word in text.split_whitespace() {
                if word.chars().count() < limits.min_suggestion_len {
                    continue;
                }
                let extends_token = tokens
                    .iter()
                    .any(|t| word != t.as_str() && word.contains(t.as_str()));
                if extends_token && seen.insert(word.to_string()) {
                    suggestions.push(word.to_string());
                    if suggestions.len() >= limits.max_suggestions {
                        return suggestions;
                    }
                }
            }
        }

        suggestions
    }
}
