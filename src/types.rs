// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through a search.
//!
//! Records and folders are owned by an external document store; we only read
//! them. Everything else here is transient: built per search call, ranked,
//! returned, discarded.
//!
//! | Type            | Lifetime            | Purpose                                 |
//! |-----------------|---------------------|-----------------------------------------|
//! | `Record`        | external            | Any searchable entity (material, favor) |
//! | `Folder`        | external            | Node of the materials folder tree       |
//! | `SearchQuery`   | one call            | Canonical form + variations of input    |
//! | `ScoredMatch`   | one call            | Record + score + where it matched       |
//! | `SearchResponse`| returned            | Flat search envelope                    |
//! | `HierarchyResults` | returned         | Folder-scoped search envelope           |
//! | `GlobalResults` | returned            | Multi-collection envelope               |

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An externally-owned searchable entity.
///
/// A handful of structural fields are recognized by name (including the
/// Spanish keys the platform stores them under); every other key is a
/// searchable field. Missing fields read as absent and simply never match.
///
/// Structural fields are read leniently: a value of the wrong shape reads as
/// absent instead of failing the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub id: String,
    /// Folder this record lives in. Weak reference; may dangle.
    #[serde(
        default,
        alias = "carpetaId",
        deserialize_with = "lenient::id",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_folder_id: Option<String>,
    #[serde(default, alias = "destacado", deserialize_with = "lenient::flag")]
    pub pinned: bool,
    #[serde(
        default,
        alias = "anio",
        deserialize_with = "lenient::year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<i32>,
    /// Upload time, epoch milliseconds.
    #[serde(
        default,
        alias = "fechaSubida",
        deserialize_with = "lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub uploaded_at: Option<i64>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), Value::String(value.into()));
        self
    }

    pub fn in_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.parent_folder_id = Some(folder_id.into());
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn uploaded_at(mut self, millis: i64) -> Self {
        self.uploaded_at = Some(millis);
        self
    }

    /// Read a field as text.
    ///
    /// Strings come back borrowed; numbers and booleans are formatted; arrays
    /// of strings (tags) are joined with spaces. Nulls, objects and missing
    /// keys are `None`.
    pub fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.fields.get(name)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Array(items) => {
                let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(Cow::Owned(parts.join(" ")))
                }
            }
            Value::Null | Value::Object(_) => None,
        }
    }

    /// Read a field, treating anything missing as the empty string.
    pub fn field_or_empty(&self, name: &str) -> Cow<'_, str> {
        self.field(name).unwrap_or(Cow::Borrowed(""))
    }
}

/// Readers for structural fields as the document store actually writes them.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn id<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(de)? {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(de)? {
            Value::Bool(b) => b,
            Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
            Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
            _ => false,
        })
    }

    /// `2023`, `2023.0` or `"2023"`.
    pub fn year<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i32>, D::Error> {
        Ok(integer(&Value::deserialize(de)?).and_then(|n| i32::try_from(n).ok()))
    }

    /// Epoch millis as a number or numeric string, or a store timestamp object
    /// `{seconds, nanoseconds}` (also `{_seconds, _nanoseconds}`).
    pub fn timestamp<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
        let value = Value::deserialize(de)?;
        if let Value::Object(map) = &value {
            let seconds = map.get("seconds").or_else(|| map.get("_seconds"));
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(integer)
                .unwrap_or(0);
            return Ok(seconds
                .and_then(integer)
                .and_then(|s| s.checked_mul(1000))
                .and_then(|ms| ms.checked_add(nanos / 1_000_000)));
        }
        Ok(integer(&value))
    }

    fn integer(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// A node of the materials folder tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    /// Parent folder id; `None` for roots. Weak reference; may dangle or cycle.
    #[serde(
        default,
        alias = "carpetaPadreId",
        alias = "parentFolderId",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<String>,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(str::to_owned),
        }
    }
}

/// A query after canonicalization.
///
/// **Invariant**: `variations` contains `original` and, when non-empty,
/// `normalized`. Whitespace-only input yields all-empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    /// The string as typed.
    pub original: String,
    /// Canonical form (corrected, folded, numerals as digits, zeros stripped).
    pub normalized: String,
    /// Alternate spellings, tried as a disjunction. Deduplicated.
    pub variations: BTreeSet<String>,
    /// Whitespace-split tokens of `normalized`, in order.
    pub tokens: Vec<String>,
}

impl SearchQuery {
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty() && self.variations.is_empty()
    }

    /// Count of non-whitespace characters in the original input.
    pub fn significant_chars(&self) -> usize {
        self.original.chars().filter(|c| !c.is_whitespace()).count()
    }
}

/// A search hit: the item, its best score, and where the score came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch<T> {
    pub item: T,
    pub score: f64,
    /// Field that produced the best score; `None` when the match spanned fields.
    pub matched_field: Option<String>,
    /// Display path of the containing folder ("Cálculo / 2023 / Pruebas").
    pub folder_path: Option<String>,
}

/// Options for a flat search over one record collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub search_fields: Vec<String>,
    pub min_relevance: Option<f64>,
    pub max_results: Option<usize>,
}

impl SearchOptions {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_fields: fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn max_results(mut self, limit: usize) -> Self {
        self.max_results = Some(limit);
        self
    }

    pub fn min_relevance(mut self, min: f64) -> Self {
        self.min_relevance = Some(min);
        self
    }
}

/// Flat search envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub normalized: String,
    pub results: Vec<ScoredMatch<Record>>,
    /// Matches before the result cap was applied.
    pub total: usize,
    pub suggestions: Vec<String>,
}

impl SearchResponse {
    /// The well-formed "nothing found" envelope.
    pub fn empty(query: &SearchQuery) -> Self {
        Self {
            query: query.original.clone(),
            normalized: query.normalized.clone(),
            ..Self::default()
        }
    }
}

/// Options for a folder-scoped material search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HierarchyOptions {
    /// Material fields scored as direct (file) matches.
    pub search_fields: Vec<String>,
    /// Field holding the material title, used for academic ranking metadata.
    pub title_field: String,
    /// Field holding a file name or bare extension ("apuntes.pdf", "pdf").
    pub extension_field: Option<String>,
    /// Restrict results to this folder and its descendants.
    pub scope: Option<String>,
    pub max_results: Option<usize>,
    pub min_relevance: Option<f64>,
}

impl Default for HierarchyOptions {
    fn default() -> Self {
        Self {
            search_fields: vec!["titulo".to_string(), "descripcion".to_string()],
            title_field: "titulo".to_string(),
            extension_field: Some("nombreArchivo".to_string()),
            scope: None,
            max_results: None,
            min_relevance: None,
        }
    }
}

impl HierarchyOptions {
    pub fn scoped_to(mut self, folder_id: impl Into<String>) -> Self {
        self.scope = Some(folder_id.into());
        self
    }
}

/// Folder-scoped search envelope: matching folders and matching materials.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HierarchyResults {
    pub query: String,
    pub normalized: String,
    #[serde(rename = "carpetas")]
    pub folders: Vec<ScoredMatch<Folder>>,
    #[serde(rename = "materiales")]
    pub materials: Vec<ScoredMatch<Record>>,
}

impl HierarchyResults {
    pub fn empty(query: &SearchQuery) -> Self {
        Self {
            query: query.original.clone(),
            normalized: query.normalized.clone(),
            ..Self::default()
        }
    }
}

/// Results for one collection of a global search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResults {
    pub name: String,
    pub results: Vec<ScoredMatch<Record>>,
    /// Set when fetching the collection failed and its results were dropped.
    pub degraded: bool,
}

/// Global search envelope, grouped by collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalResults {
    pub query: String,
    pub normalized: String,
    pub collections: Vec<CollectionResults>,
    /// Sum of returned results across collections.
    pub total: usize,
}

impl GlobalResults {
    pub fn empty(query: &SearchQuery) -> Self {
        Self {
            query: query.original.clone(),
            normalized: query.normalized.clone(),
            ..Self::default()
        }
    }

    /// Results for a collection by name.
    pub fn collection(&self, name: &str) -> Option<&CollectionResults> {
        self.collections.iter().find(|c| c.name == name)
    }
}
