// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where records come from.
//!
//! The search core never does I/O. Callers hand it records they fetched from
//! some document store through these two traits. [`JsonStore`] is the one
//! implementation shipped here: a JSON snapshot held in memory, used by the
//! CLI and the tests.
//!
//! Snapshot layout:
//!
//! ```json
//! {
//!   "favores":    [{"id": "f1", "titulo": "Ayuda con cálculo"}],
//!   "materiales": [{"id": "m1", "titulo": "Prueba I2", "carpetaId": "c"}],
//!   "carpetas":   [{"id": "c", "nombre": "2023", "carpetaPadreId": "a"}]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::SourceError;
use crate::types::{Folder, Record};

/// Key of the folder list inside a JSON snapshot.
pub const FOLDERS_KEY: &str = "carpetas";

/// Fetches the records of one named collection.
pub trait RecordSource: Send + Sync {
    fn fetch(&self, collection: &str, filter: &IncludeFilter) -> Result<Vec<Record>, SourceError>;
}

/// Fetches the whole folder map at once.
pub trait FolderSource: Send + Sync {
    fn fetch_all_folders(&self) -> Result<Vec<Folder>, SourceError>;
}

/// Filter as written in JSON: `"*"` or `{"field": "value", ...}`.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(untagged)]
pub enum IncludeFilterValue {
    /// Match all records (represented as "*")
    All(String),
    /// Match records by field=value criteria
    Filter(BTreeMap<String, String>),
}

/// Normalized record filter.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "IncludeFilterValue", into = "IncludeFilterValue")]
pub enum IncludeFilter {
    #[default]
    All,
    Filter(BTreeMap<String, String>),
}

impl From<IncludeFilterValue> for IncludeFilter {
    fn from(val: IncludeFilterValue) -> Self {
        match val {
            IncludeFilterValue::All(_) => IncludeFilter::All,
            IncludeFilterValue::Filter(f) if f.is_empty() => IncludeFilter::All,
            IncludeFilterValue::Filter(f) => IncludeFilter::Filter(f),
        }
    }
}

impl From<IncludeFilter> for IncludeFilterValue {
    fn from(val: IncludeFilter) -> Self {
        match val {
            IncludeFilter::All => IncludeFilterValue::All("*".to_string()),
            IncludeFilter::Filter(f) => IncludeFilterValue::Filter(f),
        }
    }
}

impl IncludeFilter {
    pub fn field_equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        IncludeFilter::Filter(BTreeMap::from([(field.into(), value.into())]))
    }

    /// Check if a record matches this filter.
    ///
    /// Structural keys (`id`, `carpetaId`/`parentFolderId`) compare against
    /// the record's own fields; anything else against its searchable text.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            IncludeFilter::All => true,
            IncludeFilter::Filter(filters) => filters.iter().all(|(key, value)| match key.as_str() {
                "id" => &record.id == value,
                "carpetaId" | "parentFolderId" => record.parent_folder_id.as_ref() == Some(value),
                _ => record.field(key).as_deref() == Some(value.as_str()),
            }),
        }
    }
}

/// An in-memory snapshot of a document store.
#[derive(Debug, Clone, Default)]
pub struct JsonStore {
    collections: HashMap<String, Vec<Record>>,
    folders: Vec<Folder>,
}

impl JsonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a snapshot. Every top-level key except `carpetas` is a collection.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let root: BTreeMap<String, Value> =
            serde_json::from_str(json).map_err(|source| SourceError::Parse {
                collection: "<root>".to_string(),
                source,
            })?;

        let mut store = Self::new();
        for (name, value) in root {
            if name == FOLDERS_KEY {
                store.folders = serde_json::from_value(value).map_err(|source| {
                    SourceError::Parse {
                        collection: name.clone(),
                        source,
                    }
                })?;
            } else {
                let entries: Vec<Value> =
                    serde_json::from_value(value).map_err(|source| SourceError::Parse {
                        collection: name.clone(),
                        source,
                    })?;
                let records = parse_records(&name, entries);
                store.collections.insert(name, records);
            }
        }
        Ok(store)
    }

    pub fn with_collection(mut self, name: impl Into<String>, records: Vec<Record>) -> Self {
        self.collections.insert(name.into(), records);
        self
    }

    pub fn with_folders(mut self, folders: Vec<Folder>) -> Self {
        self.folders = folders;
        self
    }

    /// Records of a collection, unfiltered.
    pub fn records(&self, collection: &str) -> Option<&[Record]> {
        self.collections.get(collection).map(Vec::as_slice)
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Collection names, sorted.
    pub fn collection_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.collections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl RecordSource for JsonStore {
    fn fetch(&self, collection: &str, filter: &IncludeFilter) -> Result<Vec<Record>, SourceError> {
        let records = self
            .records(collection)
            .ok_or_else(|| SourceError::UnknownCollection(collection.to_string()))?;
        Ok(records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }
}

impl FolderSource for JsonStore {
    fn fetch_all_folders(&self) -> Result<Vec<Folder>, SourceError> {
        Ok(self.folders.clone())
    }
}

/// Records of one collection; entries that are not records are skipped.
fn parse_records(collection: &str, entries: Vec<Value>) -> Vec<Record> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(collection, index, error = %err, "skipping malformed record");
                None
            }
        })
        .collect()
}
