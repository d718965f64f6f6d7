// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search pipeline.
//!
//! Debug-mode assertions over the properties the rest of the crate relies on.
//! They compile to nothing in release builds and panic early in tests.
//!
//! | Contract                     | Property                                         |
//! |------------------------------|--------------------------------------------------|
//! | `check_no_long_runs`         | collapsed text has no run of 3+ equal chars      |
//! | `check_query_well_formed`    | variations hold the original and the canonical   |
//! | `check_sorted_by_score`      | generic results come back score-descending       |
//! | `check_result_cap`           | no result list exceeds its limit                 |
//! | `check_subtree_closed`       | every descendant's parent is in the subtree      |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// Default weight ordering: a direct field match outranks a match spread over
/// path and fields, which outranks a path-only match.
const _: () = {
    const PATH_WEIGHT: f64 = 0.7;
    const CROSS_MATCH_WEIGHT: f64 = 0.85;
    assert!(PATH_WEIGHT < CROSS_MATCH_WEIGHT);
    assert!(CROSS_MATCH_WEIGHT < 1.0);
};

use std::collections::HashSet;

use crate::search::FolderTree;
use crate::types::{ScoredMatch, SearchQuery};

// ============================================================================
// TEXT CONTRACTS
// ============================================================================

/// Check that no character repeats three or more times in a row.
#[inline]
pub fn check_no_long_runs(text: &str) {
    if cfg!(debug_assertions) {
        let mut prev = None;
        let mut run = 0usize;
        for c in text.chars() {
            if Some(c) == prev {
                run += 1;
            } else {
                prev = Some(c);
                run = 1;
            }
            debug_assert!(run < 3, "run of {:?} survived collapsing in {:?}", c, text);
        }
    }
}

/// Check the `SearchQuery` shape.
///
/// # Panics (debug builds only)
/// Panics if a non-empty query lacks its original or canonical form among
/// its variations, or if its tokens disagree with the canonical form.
#[inline]
pub fn check_query_well_formed(query: &SearchQuery) {
    if query.original.trim().is_empty() {
        debug_assert!(query.variations.is_empty(), "blank query produced variations");
        return;
    }
    debug_assert!(
        query.variations.contains(&query.original),
        "variations missing original {:?}",
        query.original
    );
    debug_assert!(
        query.normalized.is_empty() || query.variations.contains(&query.normalized),
        "variations missing canonical form {:?}",
        query.normalized
    );
    debug_assert!(
        query.variations.iter().all(|v| !v.is_empty()),
        "empty variation"
    );
    debug_assert_eq!(
        query.tokens.join(" "),
        query.normalized,
        "tokens disagree with canonical form"
    );
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that results are sorted by score, highest first.
#[inline]
pub fn check_sorted_by_score<T>(results: &[ScoredMatch<T>]) {
    debug_assert!(
        results.windows(2).all(|w| w[0].score >= w[1].score),
        "results not sorted by descending score"
    );
}

/// Check that a result list respects its cap.
#[inline]
pub fn check_result_cap<T>(results: &[ScoredMatch<T>], limit: usize) {
    debug_assert!(
        results.len() <= limit,
        "{} results exceed limit {}",
        results.len(),
        limit
    );
}

// ============================================================================
// FOLDER CONTRACTS
// ============================================================================

/// Check that a descendant set is closed under "parent of".
///
/// Every descendant's parent must be the root or another descendant.
#[inline]
pub fn check_subtree_closed(tree: &FolderTree, root: &str, descendants: &HashSet<String>) {
    if cfg!(debug_assertions) {
        for id in descendants {
            let parent = tree.get(id).and_then(|f| f.parent_id.as_deref());
            debug_assert!(
                parent == Some(root) || parent.is_some_and(|p| descendants.contains(p)),
                "descendant {:?} of {:?} has a parent outside the subtree",
                id,
                root
            );
        }
    }
}
