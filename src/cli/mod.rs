// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the campus-search command-line interface.
//!
//! Four subcommands: `normalize` shows what the engine makes of a query,
//! `search` runs a flat search over one collection of a JSON snapshot,
//! `global` runs every configured collection, and `materials` runs the
//! folder-scoped material search.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "campus-search",
    about = "Fuzzy search and ranking over academic records",
    version
)]
pub struct Cli {
    /// JSON config file (weights, limits, locale rules, collections)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the canonical form, tokens and variations of a query
    Normalize {
        /// Text to normalize
        text: String,

        /// Print the query as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search one collection of a JSON snapshot
    Search {
        /// Snapshot file: {"<collection>": [records], "carpetas": [folders]}
        #[arg(short, long)]
        input: PathBuf,

        /// Collection to search
        #[arg(short, long)]
        collection: String,

        /// Comma-separated fields to search
        #[arg(short, long, value_delimiter = ',', default_values_t = default_fields())]
        fields: Vec<String>,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Drop results scoring below this
        #[arg(long)]
        min_relevance: Option<f64>,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search every configured collection at once
    Global {
        /// Snapshot file
        #[arg(short, long)]
        input: PathBuf,

        /// Search query
        query: String,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search materials and folders, optionally inside one folder
    Materials {
        /// Snapshot file
        #[arg(short, long)]
        input: PathBuf,

        /// Search query
        query: String,

        /// Only this folder and everything below it
        #[arg(short, long)]
        scope: Option<String>,

        /// Collection holding the materials
        #[arg(long, default_value = "materiales")]
        collection: String,

        /// Maximum number of results per list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },
}

fn default_fields() -> Vec<String> {
    vec!["titulo".to_string(), "descripcion".to_string()]
}
