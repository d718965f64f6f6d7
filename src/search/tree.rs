// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The folder tree, walked defensively.
//!
//! Parent links come from an external store edited by many hands. They can
//! dangle, and they can loop. Every walk here is iterative, remembers what it
//! has visited, and stops after `max_depth` hops, so corrupt data costs a
//! truncated path rather than a hang.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use tracing::warn;

use crate::types::Folder;

/// Default hop limit for parent-chain walks.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Folder names from the root down to a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderPath {
    /// Root first.
    pub names: Vec<String>,
    /// The walk hit a cycle or the depth limit before reaching a root.
    pub truncated: bool,
}

impl FolderPath {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// "Cálculo / 2023 / Pruebas"
impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(" / ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// Folders indexed by id, with a child list per parent.
#[derive(Debug, Clone, Default)]
pub struct FolderTree {
    /// Insertion order, for deterministic iteration.
    folders: Vec<Folder>,
    by_id: HashMap<String, usize>,
    children: HashMap<String, Vec<usize>>,
    max_depth: usize,
}

impl FolderTree {
    /// Build a tree. A repeated id keeps its first occurrence.
    pub fn new(folders: impl IntoIterator<Item = Folder>) -> Self {
        let mut tree = Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ..Self::default()
        };
        for folder in folders {
            if tree.by_id.contains_key(&folder.id) {
                continue;
            }
            let idx = tree.folders.len();
            tree.by_id.insert(folder.id.clone(), idx);
            if let Some(parent) = &folder.parent_id {
                tree.children.entry(parent.clone()).or_default().push(idx);
            }
            tree.folders.push(folder);
        }
        tree
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn get(&self, id: &str) -> Option<&Folder> {
        self.by_id.get(id).map(|&idx| &self.folders[idx])
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Folder> {
        self.folders.iter()
    }

    /// Path from the root down to `id`, inclusive.
    ///
    /// Unknown ids give an empty path. A dangling parent ends the walk as if
    /// it were a root. A cycle or more than `max_depth` hops ends it with
    /// `truncated` set, keeping the names collected so far.
    pub fn path_to(&self, id: &str) -> FolderPath {
        let mut names = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = Some(id);
        let mut truncated = false;

        while let Some(folder) = current.and_then(|id| self.get(id)) {
            if names.len() >= self.max_depth || !visited.insert(folder.id.as_str()) {
                truncated = true;
                break;
            }
            names.push(folder.name.clone());
            current = folder.parent_id.as_deref();
        }

        if truncated {
            warn!(folder = id, depth = names.len(), "folder path truncated: cyclic or too deep");
        }

        names.reverse();
        FolderPath { names, truncated }
    }

    /// Every folder below `id`, at any depth, not including `id` itself.
    ///
    /// Breadth-first over the child lists, bounded by `max_depth` levels.
    pub fn descendants(&self, id: &str) -> HashSet<String> {
        let mut found: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<(&str, usize)> = VecDeque::from([(id, 0)]);

        while let Some((parent, depth)) = queue.pop_front() {
            let Some(children) = self.children.get(parent) else {
                continue;
            };
            if depth >= self.max_depth {
                warn!(folder = id, "descendant walk hit the depth limit");
                continue;
            }
            for &idx in children {
                let child = self.folders[idx].id.as_str();
                if child != id && found.insert(child.to_string()) {
                    queue.push_back((child, depth + 1));
                }
            }
        }

        crate::contracts::check_subtree_closed(self, id, &found);
        found
    }

    /// Is `id` the folder `root` or somewhere below it?
    pub fn contains_in_subtree(&self, root: &str, id: &str) -> bool {
        id == root || self.descendants(root).contains(id)
    }
}
