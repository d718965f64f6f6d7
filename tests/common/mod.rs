//! Shared test utilities and fixtures.

#![allow(dead_code)]

use campus_search::{FolderTree, HierarchyOptions, Record, ScoredMatch, SearchOptions};

// Re-export canonical test utilities from campus_search::testing
pub use campus_search::testing::{
    course_folders, make_folder, make_material, make_material_in, synthetic_materials,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// Options searching only the `titulo` field.
pub fn title_options() -> SearchOptions {
    SearchOptions::new(["titulo"])
}

/// Default hierarchy options scoped to a folder.
pub fn scoped(folder: &str) -> HierarchyOptions {
    HierarchyOptions::default().scoped_to(folder)
}

/// Folder tree `a -> b -> c` plus a sibling root `d`.
pub fn abc_tree() -> FolderTree {
    FolderTree::new(course_folders())
}

/// A pinned material.
pub fn pinned_material(id: &str, title: &str) -> Record {
    make_material(id, title).pinned(true)
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Ids of the matched items, in order.
pub fn ids(matches: &[ScoredMatch<Record>]) -> Vec<&str> {
    matches.iter().map(|m| m.item.id.as_str()).collect()
}

/// Score of the record with this id, if it matched.
pub fn score_of(matches: &[ScoredMatch<Record>], id: &str) -> Option<f64> {
    matches.iter().find(|m| m.item.id == id).map(|m| m.score)
}

/// Assert results are sorted by descending score.
pub fn assert_sorted_by_score(matches: &[ScoredMatch<Record>]) {
    for pair in matches.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results out of order: {} ({}) before {} ({})",
            pair[0].item.id,
            pair[0].score,
            pair[1].item.id,
            pair[1].score
        );
    }
}
