// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search and relevance ranking for academic records.
//!
//! Students name files and folders however they like: "Cálculo II",
//! "calculo 2", "CALCULO-ii", "calclo 2". This crate matches what they type
//! against what they stored despite typos, Roman/Arabic numeral mismatches,
//! accents, leading zeros and word order, then ranks the hits.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │    text/     │───▶│  variations  │───▶│   scoring/   │───▶│   search/    │
//! │ (normalize,  │    │ (disjunction │    │ (additive    │    │ (flat, tree, │
//! │  numerals,   │    │  of spellings│    │  relevance,  │    │  hierarchy,  │
//! │  ruleset)    │    │  per query)  │    │  7-key rank) │    │  global)     │
//! └──────────────┘    └──────────────┘    └──────────────┘    └──────────────┘
//!                                                                    ▲
//!                                              source.rs ────────────┘
//!                                        (RecordSource, FolderSource)
//! ```
//!
//! The core does no I/O and keeps no state between calls. Records come in
//! through [`source`] traits (or plain slices) and ranked envelopes go out.
//!
//! # Usage
//!
//! ```
//! use campus_search::{search, Record, SearchOptions};
//!
//! let records = vec![
//!     Record::new("1").with_field("titulo", "Prueba I2 Cálculo 2023"),
//!     Record::new("2").with_field("titulo", "examen final Calculo 2024"),
//! ];
//! let response = search("calculo i2", &records, &SearchOptions::new(["titulo"]));
//! assert_eq!(response.results.len(), 1);
//! assert_eq!(response.results[0].item.id, "1");
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod logging;
pub mod scoring;
pub mod search;
pub mod source;
pub mod testing;
pub mod text;
pub mod types;

pub use config::{CollectionSpec, LocaleConfig, SearchConfig, SearchLimits};
pub use error::{ConfigError, SourceError};
pub use scoring::ranking::{
    compare_materials, sort_materials, AcademicMetadata, EvaluationKind, RankingKey, Term,
};
pub use scoring::{calculate_relevance, MatchMetadata, Scorer, ScoringWeights};
pub use search::{FolderPath, FolderTree, PreparedQuery, SearchEngine};
pub use source::{FolderSource, IncludeFilter, JsonStore, RecordSource};
pub use text::{
    arabic_to_roman, canonicalize, collapse_duplicate_runs, correct_known_errors,
    generate_variations, matches_all_tokens, normalize, roman_to_arabic, strip_leading_zeros,
    Ruleset,
};
pub use types::{
    CollectionResults, Folder, GlobalResults, HierarchyOptions, HierarchyResults, Record,
    ScoredMatch, SearchOptions, SearchQuery, SearchResponse,
};

/// Canonicalize a raw query and expand its variations, with default settings.
pub fn normalize_search_term(raw: &str) -> SearchQuery {
    SearchEngine::shared().normalize_query(raw)
}

/// Flat search over one collection, with default settings.
pub fn search(raw: &str, records: &[Record], options: &SearchOptions) -> SearchResponse {
    SearchEngine::shared().search(raw, records, options)
}

/// Folder-scoped material search, with default settings.
pub fn search_hierarchy(
    raw: &str,
    records: &[Record],
    folders: &[Folder],
    options: &HierarchyOptions,
) -> HierarchyResults {
    SearchEngine::shared().search_hierarchy_in(raw, records, folders, options)
}
