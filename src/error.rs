// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The search core itself never fails: short queries, malformed records and
//! cyclic folder graphs all degrade to well-formed (possibly empty) results.
//! Errors only exist at the edges, where records are fetched or configuration
//! is loaded.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a record or folder source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source has no collection by this name.
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),

    /// The backing file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document or record did not have the expected shape.
    #[error("invalid data in '{collection}': {source}")]
    Parse {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    /// The source is reachable but refused or failed the request.
    #[error("collection '{collection}' unavailable: {reason}")]
    Unavailable { collection: String, reason: String },
}

/// Failure loading or compiling search configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid ruleset pattern: {0}")]
    Pattern(#[from] regex::Error),
}
