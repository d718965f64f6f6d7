// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Folder-scoped material search.
//!
//! A material can match on its own fields, on the folder path above it, or,
//! when neither matches alone, on both together:
//!
//! | Match kind     | Target text              | Weight | `matched_field` |
//! |----------------|--------------------------|--------|-----------------|
//! | direct         | one search field         | 1.0    | that field      |
//! | joined         | all search fields        | 1.0    | `None`          |
//! | cross          | path + all search fields | 0.85   | `None`          |
//! | path           | folder path              | 0.7    | `"path"`        |
//!
//! Direct and joined matches are scored as file names (with the extension
//! bonus), so a title hit outranks the same words found only in a folder
//! name. Joined matches are tried only when no single field matches, the
//! same way flat search reads a record. The best candidate wins. Folders match on their own name or, weighted like a path
//! match, on their full path.
//!
//! Scoping to a folder keeps materials in that folder or any descendant, and
//! folders strictly below it. Membership comes from walking child lists, not
//! from comparing path strings, so two folders that share a name never leak
//! into each other's scope.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::flat::searchable_text;
use super::{FolderTree, PreparedQuery, SearchEngine};
use crate::contracts::{check_result_cap, check_sorted_by_score};
use crate::scoring::ranking::{compare_by_score, sort_materials};
use crate::scoring::{MatchMetadata, Scorer};
use crate::text::normalize;
use crate::types::{Folder, HierarchyOptions, HierarchyResults, Record, ScoredMatch};

/// Field name reported for path-only matches.
pub const PATH_FIELD: &str = "path";
/// Field name reported for folder-name matches.
pub const FOLDER_NAME_FIELD: &str = "nombre";

impl SearchEngine {
    /// Search materials and folders together.
    ///
    /// Materials come back in academic display order (pinned, year, term,
    /// evaluation type and number, score, upload time); folders by score.
    /// Both lists are capped at `max_results` independently.
    pub fn search_hierarchy(
        &self,
        raw: &str,
        records: &[Record],
        tree: &FolderTree,
        options: &HierarchyOptions,
    ) -> HierarchyResults {
        let query = self.normalize_query(raw);
        if self.is_too_short(&query) {
            debug!(query = raw, "query too short; empty response");
            return HierarchyResults::empty(&query);
        }

        let prepared = PreparedQuery::new(&query);
        let scorer = self.scorer();
        let cap = self.result_cap(options.max_results);
        let scope = options.scope.as_deref().map(|root| Scope {
            root,
            below: tree.descendants(root),
        });

        let mut folders: Vec<ScoredMatch<Folder>> = tree
            .iter()
            .filter(|folder| scope.as_ref().map_or(true, |s| s.below.contains(&folder.id)))
            .filter_map(|folder| self.score_folder(&scorer, &prepared, tree, folder))
            .filter(|m| options.min_relevance.map_or(true, |min| m.score >= min))
            .collect();
        folders.sort_by(compare_by_score);
        folders.truncate(cap);
        check_sorted_by_score(&folders);

        let mut materials: Vec<ScoredMatch<Record>> = records
            .iter()
            .filter(|record| scope.as_ref().map_or(true, |s| s.admits(record)))
            .filter_map(|record| self.score_material(&scorer, &prepared, tree, record, options))
            .filter(|m| options.min_relevance.map_or(true, |min| m.score >= min))
            .collect();
        let matched_materials = materials.len();
        sort_materials(&mut materials, &options.title_field);
        materials.truncate(cap);
        check_result_cap(&materials, cap);

        debug!(
            query = raw,
            normalized = %query.normalized,
            scope = ?options.scope,
            folders = folders.len(),
            matched_materials,
            returned_materials = materials.len(),
            "hierarchy search"
        );

        HierarchyResults {
            query: query.original,
            normalized: query.normalized,
            folders,
            materials,
        }
    }

    /// [`search_hierarchy`](Self::search_hierarchy) over a plain folder list.
    pub fn search_hierarchy_in(
        &self,
        raw: &str,
        records: &[Record],
        folders: &[Folder],
        options: &HierarchyOptions,
    ) -> HierarchyResults {
        let tree = FolderTree::new(folders.iter().cloned())
            .with_max_depth(self.config.limits.max_folder_depth);
        self.search_hierarchy(raw, records, &tree, options)
    }

    fn score_folder(
        &self,
        scorer: &Scorer<'_>,
        prepared: &PreparedQuery,
        tree: &FolderTree,
        folder: &Folder,
    ) -> Option<ScoredMatch<Folder>> {
        let path = tree.path_to(&folder.id);
        let direct = prepared
            .best_score(scorer, &normalize(&folder.name), &MatchMetadata::default())
            .map(|score| (score, Some(FOLDER_NAME_FIELD.to_string())));
        let via_path = prepared
            .best_score(scorer, &normalize(&path.to_string()), &MatchMetadata::default())
            .map(|score| {
                (
                    score * self.config.limits.path_weight,
                    Some(PATH_FIELD.to_string()),
                )
            });

        let (score, matched_field) = best_of([direct, via_path])?;
        Some(ScoredMatch {
            item: folder.clone(),
            score,
            matched_field,
            folder_path: (!path.is_empty()).then(|| path.to_string()),
        })
    }

    fn score_material(
        &self,
        scorer: &Scorer<'_>,
        prepared: &PreparedQuery,
        tree: &FolderTree,
        record: &Record,
        options: &HierarchyOptions,
    ) -> Option<ScoredMatch<Record>> {
        let limits = &self.config.limits;
        let extension = options
            .extension_field
            .as_deref()
            .and_then(|field| record.field(field))
            .map(|value| extension_of(&value).to_string());
        let file = MatchMetadata::file_name(extension.as_deref());

        let direct = options
            .search_fields
            .iter()
            .filter_map(|field| {
                let value = record.field(field)?;
                let score = prepared.best_score(scorer, &normalize(&value), &file)?;
                Some((score, Some(field.clone())))
            })
            .max_by(|a, b| a.0.total_cmp(&b.0));

        let own_text = searchable_text(record, &options.search_fields);
        let joined = if direct.is_none() {
            prepared
                .best_score(scorer, &own_text, &file)
                .map(|score| (score, None))
        } else {
            None
        };

        let path = record
            .parent_folder_id
            .as_deref()
            .map(|id| tree.path_to(id))
            .unwrap_or_default();
        let path_text = normalize(&path.to_string());

        let via_path = prepared
            .best_score(scorer, &path_text, &MatchMetadata::default())
            .map(|score| (score * limits.path_weight, Some(PATH_FIELD.to_string())));

        // Only when neither side matches alone: the tokens are split between them.
        let own_match = direct.is_some() || joined.is_some();
        let cross = if !own_match && via_path.is_none() && !path_text.is_empty() {
            let combined = format!("{} {}", path_text, own_text);
            prepared
                .best_score(scorer, &combined, &MatchMetadata::default())
                .map(|score| (score * limits.cross_match_weight, None))
        } else {
            None
        };

        let (score, matched_field) = best_of([direct, joined, cross, via_path])?;
        trace!(id = %record.id, score, field = ?matched_field, "material matched");
        Some(ScoredMatch {
            item: record.clone(),
            score,
            matched_field,
            folder_path: (!path.is_empty()).then(|| path.to_string()),
        })
    }
}

/// Subtree restriction for one search.
struct Scope<'a> {
    root: &'a str,
    below: HashSet<String>,
}

impl Scope<'_> {
    fn admits(&self, record: &Record) -> bool {
        record
            .parent_folder_id
            .as_deref()
            .is_some_and(|id| id == self.root || self.below.contains(id))
    }
}

/// Highest-scoring candidate; earlier candidates win ties.
fn best_of<const N: usize>(
    candidates: [Option<(f64, Option<String>)>; N],
) -> Option<(f64, Option<String>)> {
    candidates.into_iter().flatten().fold(None, |best, candidate| match best {
        Some(b) if b.0 >= candidate.0 => Some(b),
        _ => Some(candidate),
    })
}

/// "apuntes.PDF" → "PDF", "pdf" → "pdf".
fn extension_of(value: &str) -> &str {
    let value = value.trim();
    value.rsplit_once('.').map_or(value, |(_, ext)| ext)
}
