// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search orchestration: from a raw query and a pile of records to ranked results.
//!
//! Three shapes, one pipeline:
//!
//! | Entry point                        | Input                        | Ranking           |
//! |------------------------------------|------------------------------|-------------------|
//! | [`SearchEngine::search`]           | one record collection        | score             |
//! | [`SearchEngine::search_hierarchy`] | materials + folder tree      | seven-key academic|
//! | [`SearchEngine::search_collections`]| several collections (source)| score, per group  |
//!
//! Every call canonicalizes the query once, expands it into variations, and
//! accepts a record if *any* variation has all of its tokens in the record's
//! text. The score is the best score among the variations that matched.
//!
//! Calls hold no state between them: the engine is read-only after
//! construction and can be shared across threads freely.

mod flat;
mod global;
mod hierarchy;
mod matcher;
mod suggest;
mod tree;

use std::sync::LazyLock;

pub use matcher::PreparedQuery;
pub use tree::{FolderPath, FolderTree};

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::scoring::Scorer;
use crate::text::{canonicalize, generate_variations_with, Ruleset};
use crate::types::SearchQuery;

static SHARED: LazyLock<SearchEngine> = LazyLock::new(SearchEngine::default);

/// A configured search engine: weights, limits and a compiled locale ruleset.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: SearchConfig,
    ruleset: Ruleset,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            ruleset: Ruleset::spanish_academic().clone(),
        }
    }
}

impl SearchEngine {
    /// Build an engine, compiling the config's locale rules.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        let ruleset = config.build_ruleset()?;
        Ok(Self { config, ruleset })
    }

    /// Engine with an explicit ruleset, bypassing the config's locale section.
    pub fn with_ruleset(config: SearchConfig, ruleset: Ruleset) -> Self {
        Self { config, ruleset }
    }

    /// Process-wide engine with default configuration.
    pub fn shared() -> &'static SearchEngine {
        &SHARED
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    pub fn scorer(&self) -> Scorer<'_> {
        Scorer::new(&self.config.weights, &self.ruleset)
    }

    /// Canonicalize a raw query and expand its variations.
    ///
    /// Whitespace-only input yields a query with every field empty.
    pub fn normalize_query(&self, raw: &str) -> SearchQuery {
        if raw.trim().is_empty() {
            return SearchQuery {
                original: raw.to_string(),
                ..SearchQuery::default()
            };
        }

        let normalized = canonicalize(raw, &self.ruleset);
        let tokens = normalized.split_whitespace().map(str::to_owned).collect();
        let query = SearchQuery {
            original: raw.to_string(),
            normalized,
            variations: generate_variations_with(raw, &self.ruleset),
            tokens,
        };
        crate::contracts::check_query_well_formed(&query);
        query
    }

    /// Too short to search? Counted in non-whitespace characters of the raw input.
    pub(crate) fn is_too_short(&self, query: &SearchQuery) -> bool {
        query.significant_chars() < self.config.limits.min_query_chars
    }

    pub(crate) fn result_cap(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.config.limits.default_max_results)
    }
}
