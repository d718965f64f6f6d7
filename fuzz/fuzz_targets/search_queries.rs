// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary queries against a fixed synthetic collection and folder tree.
//! The engine must never panic and every envelope must be well formed.

#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;
use campus_search::testing::{course_folders, synthetic_materials};
use campus_search::{FolderTree, HierarchyOptions, Record, SearchEngine, SearchOptions};

struct Fixture {
    records: Vec<Record>,
    tree: FolderTree,
}

fuzz_target!(|query: &[u8]| {
    static FIXTURE: OnceLock<Fixture> = OnceLock::new();
    let fixture = FIXTURE.get_or_init(|| Fixture {
        records: synthetic_materials(300),
        tree: FolderTree::new(course_folders()),
    });

    let query: String = String::from_utf8_lossy(query).chars().take(200).collect();
    let engine = SearchEngine::shared();

    // INVARIANT 1: flat search never panics, stays sorted and within the cap
    let options = SearchOptions::new(["titulo"]).max_results(10);
    let response = engine.search(&query, &fixture.records, &options);
    assert!(response.results.len() <= 10);
    assert!(response.results.len() <= response.total);
    for pair in response.results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(response.results.iter().all(|m| m.score.is_finite()));

    // INVARIANT 2: scoped hierarchy search only returns materials in scope
    let scoped = HierarchyOptions::default().scoped_to("a");
    let results = engine.search_hierarchy(&query, &fixture.records, &fixture.tree, &scoped);
    for m in &results.materials {
        let folder = m.item.parent_folder_id.as_deref().unwrap_or("");
        assert!(fixture.tree.contains_in_subtree("a", folder), "{} out of scope", folder);
    }
    for f in &results.folders {
        assert_ne!(f.item.id, "a");
        assert!(fixture.tree.contains_in_subtree("a", &f.item.id));
    }
});
