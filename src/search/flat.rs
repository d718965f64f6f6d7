// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flat search over one record collection.

use tracing::{debug, trace};

use super::{PreparedQuery, SearchEngine};
use crate::contracts::{check_result_cap, check_sorted_by_score};
use crate::scoring::ranking::compare_by_score;
use crate::scoring::{MatchMetadata, Scorer};
use crate::text::normalize;
use crate::types::{Record, ScoredMatch, SearchOptions, SearchResponse};

impl SearchEngine {
    /// Search one collection.
    ///
    /// Each record's `search_fields` are joined into one text; a record
    /// matches when some query variation has all of its tokens in that text.
    /// Results are sorted by score (descending, ties in input order) and cut
    /// at `max_results`; `total` counts matches before the cut. When fewer
    /// than the suggestion threshold come back, `suggestions` holds words from
    /// records that matched only part of the query.
    ///
    /// Queries under the minimum length give an empty response, not an error.
    pub fn search(&self, raw: &str, records: &[Record], options: &SearchOptions) -> SearchResponse {
        let query = self.normalize_query(raw);
        if self.is_too_short(&query) {
            debug!(query = raw, "query too short; empty response");
            return SearchResponse::empty(&query);
        }

        let prepared = PreparedQuery::new(&query);
        let cap = self.result_cap(options.max_results);
        let (results, total) = self.rank_records(
            &prepared,
            records,
            &options.search_fields,
            options.min_relevance,
            cap,
        );

        let suggestions = if results.len() < self.config.limits.suggestion_threshold {
            self.suggest_for(&query, records, &options.search_fields)
        } else {
            Vec::new()
        };

        debug!(
            query = raw,
            normalized = %query.normalized,
            variations = prepared.len(),
            records = records.len(),
            matched = total,
            returned = results.len(),
            suggestions = suggestions.len(),
            "flat search"
        );

        SearchResponse {
            query: query.original,
            normalized: query.normalized,
            results,
            total,
            suggestions,
        }
    }

    /// Match, score, sort and cap. Returns the results and the match count
    /// before capping.
    pub(crate) fn rank_records(
        &self,
        prepared: &PreparedQuery,
        records: &[Record],
        fields: &[String],
        min_relevance: Option<f64>,
        cap: usize,
    ) -> (Vec<ScoredMatch<Record>>, usize) {
        let scorer = self.scorer();
        let mut results: Vec<ScoredMatch<Record>> = records
            .iter()
            .filter_map(|record| {
                let (score, matched_field) = score_record(&scorer, prepared, record, fields)?;
                if min_relevance.is_some_and(|min| score < min) {
                    return None;
                }
                trace!(id = %record.id, score, field = ?matched_field, "record matched");
                Some(ScoredMatch {
                    item: record.clone(),
                    score,
                    matched_field,
                    folder_path: None,
                })
            })
            .collect();

        // Stable: equal scores keep input order.
        results.sort_by(compare_by_score);
        let total = results.len();
        results.truncate(cap);

        check_sorted_by_score(&results);
        check_result_cap(&results, cap);
        (results, total)
    }
}

/// Joined text of the given fields, normalized. Missing fields are skipped.
pub(crate) fn searchable_text(record: &Record, fields: &[String]) -> String {
    let joined = fields
        .iter()
        .filter_map(|field| record.field(field))
        .collect::<Vec<_>>()
        .join(" ");
    normalize(&joined)
}

/// Best score over the joined fields, plus the single field that matched on
/// its own (if any).
fn score_record(
    scorer: &Scorer<'_>,
    prepared: &PreparedQuery,
    record: &Record,
    fields: &[String],
) -> Option<(f64, Option<String>)> {
    let text = searchable_text(record, fields);
    let score = prepared.best_score(scorer, &text, &MatchMetadata::default())?;
    let matched_field = fields
        .iter()
        .find(|field| {
            record
                .field(field)
                .is_some_and(|value| prepared.matches(&normalize(&value)))
        })
        .cloned();
    Some((score, matched_field))
}
