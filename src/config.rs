// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Everything tunable lives here: score weights, query and traversal limits,
//! the locale ruleset, and the collections a global search covers. Every
//! field has a default, so `{}` is a valid config file.
//!
//! ```json
//! {
//!   "weights": { "exactMatch": 120 },
//!   "limits": { "defaultMaxResults": 20 },
//!   "locale": { "corrections": { "calcuol": "cálculo" } },
//!   "collections": [{ "name": "favores", "fields": ["titulo"], "limit": 10 }]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scoring::ScoringWeights;
use crate::source::IncludeFilter;
use crate::text::{Ruleset, GENERIC_FILE_PREFIXES, SPANISH_ACADEMIC_CORRECTIONS};

/// Full engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub weights: ScoringWeights,
    pub limits: SearchLimits,
    pub locale: LocaleConfig,
    pub collections: Vec<CollectionSpec>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            limits: SearchLimits::default(),
            locale: LocaleConfig::default(),
            collections: CollectionSpec::defaults(),
        }
    }
}

impl SearchConfig {
    /// Load a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compile the locale section into a ruleset.
    pub fn build_ruleset(&self) -> Result<Ruleset, ConfigError> {
        self.locale.build_ruleset()
    }
}

/// Query, ranking and traversal limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchLimits {
    /// Queries with fewer non-whitespace characters return nothing.
    pub min_query_chars: usize,
    /// Result cap when the caller gives none.
    pub default_max_results: usize,
    /// Multiplier for matches found only in a folder path.
    pub path_weight: f64,
    /// Multiplier for matches that need path and fields together.
    pub cross_match_weight: f64,
    /// Hops before folder traversal gives up on a parent chain.
    pub max_folder_depth: usize,
    /// Suggestions are computed when fewer results than this come back.
    pub suggestion_threshold: usize,
    pub max_suggestions: usize,
    pub min_suggestion_len: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            default_max_results: 50,
            path_weight: 0.7,
            cross_match_weight: 0.85,
            max_folder_depth: 20,
            suggestion_threshold: 3,
            max_suggestions: 5,
            min_suggestion_len: 3,
        }
    }
}

/// Locale rules: keyboard corrections and generic file-name prefixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleConfig {
    /// Start from the built-in Spanish academic tables.
    pub builtin: bool,
    /// Extra misspelling → correction pairs, added to (or overriding) the built-ins.
    pub corrections: BTreeMap<String, String>,
    /// Replaces the built-in generic prefix list when set.
    pub generic_prefixes: Option<Vec<String>>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            corrections: BTreeMap::new(),
            generic_prefixes: None,
        }
    }
}

impl LocaleConfig {
    pub fn build_ruleset(&self) -> Result<Ruleset, ConfigError> {
        let builtin: &[(&str, &str)] = if self.builtin {
            SPANISH_ACADEMIC_CORRECTIONS
        } else {
            &[]
        };
        // Extras come last so they win on duplicate keys.
        let corrections = builtin.iter().copied().chain(
            self.corrections
                .iter()
                .map(|(wrong, right)| (wrong.as_str(), right.as_str())),
        );

        match &self.generic_prefixes {
            Some(prefixes) => Ruleset::new(corrections, prefixes.iter().map(String::as_str)),
            None if self.builtin => Ruleset::new(corrections, GENERIC_FILE_PREFIXES.iter().copied()),
            None => Ruleset::new(corrections, std::iter::empty()),
        }
    }
}

/// One collection covered by a global search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSpec {
    pub name: String,
    pub fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default)]
    pub filter: IncludeFilter,
}

impl CollectionSpec {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            limit: None,
            filter: IncludeFilter::All,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_filter(mut self, filter: IncludeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The platform's searchable collections.
    pub fn defaults() -> Vec<CollectionSpec> {
        vec![
            CollectionSpec::new("favores", ["titulo", "descripcion"]).with_limit(10),
            CollectionSpec::new("anuncios", ["titulo", "contenido"]).with_limit(10),
            CollectionSpec::new("marketplace", ["titulo", "descripcion", "categoria"])
                .with_limit(10),
            CollectionSpec::new("usuarios", ["nombre", "carrera"]).with_limit(10),
        ]
    }
}
