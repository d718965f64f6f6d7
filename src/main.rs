// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use campus_search::{
    logging, FolderSource, FolderTree, GlobalResults, HierarchyOptions, HierarchyResults,
    IncludeFilter, JsonStore, RecordSource, ScoredMatch, SearchConfig, SearchEngine,
    SearchOptions, SearchQuery, SearchResponse,
};

mod cli;
use cli::display::{
    degraded_badge, dim, field_label, pinned_marker, row, score_value, section_bot, section_mid,
    section_top, truncate,
};
use cli::{Cli, Commands};

const TITLE_FIELDS: &[&str] = &["titulo", "nombre", "title"];

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let engine = load_engine(cli.config.as_deref())?;

    match cli.command {
        Commands::Normalize { text, json } => {
            let query = engine.normalize_query(&text);
            if json {
                print_json(&query)
            } else {
                print_query(&query);
                Ok(())
            }
        }
        Commands::Search {
            input,
            collection,
            fields,
            query,
            limit,
            min_relevance,
            json,
        } => {
            let store = load_store(&input)?;
            let records = store
                .fetch(&collection, &IncludeFilter::All)
                .with_context(|| format!("cannot search {}", input.display()))?;
            let options = SearchOptions {
                search_fields: fields,
                min_relevance,
                max_results: limit,
            };
            let response = engine.search(&query, &records, &options);
            if json {
                print_json(&response)
            } else {
                print_response(&collection, &response);
                Ok(())
            }
        }
        Commands::Global { input, query, json } => {
            let store = load_store(&input)?;
            let results = engine.search_global(&query, &store);
            if json {
                print_json(&results)
            } else {
                print_global(&results);
                Ok(())
            }
        }
        Commands::Materials {
            input,
            query,
            scope,
            collection,
            limit,
            json,
        } => {
            let store = load_store(&input)?;
            let records = store
                .fetch(&collection, &IncludeFilter::All)
                .with_context(|| format!("cannot search {}", input.display()))?;
            let tree = FolderTree::new(store.fetch_all_folders()?)
                .with_max_depth(engine.config().limits.max_folder_depth);
            let options = HierarchyOptions {
                scope,
                max_results: limit,
                ..HierarchyOptions::default()
            };
            let results = engine.search_hierarchy(&query, &records, &tree, &options);
            if json {
                print_json(&results)
            } else {
                print_hierarchy(&results);
                Ok(())
            }
        }
    }
}

fn load_engine(config: Option<&Path>) -> Result<SearchEngine> {
    let config = match config {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    SearchEngine::new(config).context("invalid locale rules in config")
}

fn load_store(path: &Path) -> Result<JsonStore> {
    JsonStore::from_path(path).with_context(|| format!("failed to load {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// HUMAN OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

fn print_query(query: &SearchQuery) {
    section_top("QUERY");
    row(&format!(" original    {}", query.original));
    row(&format!(" normalized  {}", query.normalized));
    row(&format!(" tokens      {}", query.tokens.join(" · ")));
    section_mid(&format!("VARIATIONS ({})", query.variations.len()));
    for variation in &query.variations {
        row(&format!(" {}", truncate(variation, 76)));
    }
    section_bot();
}

/// Best display title for a record: the first title-like field, else its id.
fn record_title(record: &campus_search::Record) -> String {
    TITLE_FIELDS
        .iter()
        .find_map(|field| record.field(field))
        .map(|title| title.into_owned())
        .unwrap_or_else(|| record.id.clone())
}

fn result_row(score: f64, pinned: bool, title: &str, field: Option<&str>) {
    row(&format!(
        "{} {}{} {}",
        score_value(score),
        pinned_marker(pinned),
        truncate(title, 52),
        field_label(field)
    ));
}

fn print_matches(matches: &[ScoredMatch<campus_search::Record>]) {
    for m in matches {
        result_row(
            m.score,
            m.item.pinned,
            &record_title(&m.item),
            m.matched_field.as_deref(),
        );
        if let Some(path) = &m.folder_path {
            row(&format!("           {}", dim(&truncate(path, 68))));
        }
    }
}

fn print_response(collection: &str, response: &SearchResponse) {
    section_top(&format!(
        "{} · \"{}\" · {} of {}",
        collection.to_uppercase(),
        response.query,
        response.results.len(),
        response.total
    ));
    if response.results.is_empty() {
        row(&format!(" {}", dim("no results")));
    }
    print_matches(&response.results);
    if !response.suggestions.is_empty() {
        section_mid("DID YOU MEAN");
        row(&format!(" {}", response.suggestions.join(", ")));
    }
    section_bot();
}

fn print_global(results: &GlobalResults) {
    section_top(&format!("GLOBAL · \"{}\" · {} results", results.query, results.total));
    if results.collections.is_empty() {
        row(&format!(" {}", dim("query too short")));
    }
    for group in &results.collections {
        let label = format!("{} ({})", group.name.to_uppercase(), group.results.len());
        section_mid(&label);
        if group.degraded {
            row(&format!(" {}", degraded_badge()));
        }
        print_matches(&group.results);
    }
    section_bot();
}

fn print_hierarchy(results: &HierarchyResults) {
    section_top(&format!("CARPETAS · \"{}\" · {}", results.query, results.folders.len()));
    for folder in &results.folders {
        let shown = folder.folder_path.as_deref().unwrap_or(&folder.item.name);
        result_row(folder.score, false, shown, folder.matched_field.as_deref());
    }
    section_mid(&format!("MATERIALES · {}", results.materials.len()));
    if results.materials.is_empty() {
        row(&format!(" {}", dim("no results")));
    }
    print_matches(&results.materials);
    section_bot();
}
