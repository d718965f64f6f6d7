// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Global search: several collections at once, grouped by collection.
//!
//! Each collection is fetched and ranked on its own. A fetch failure degrades
//! that one collection to an empty, `degraded` group; the rest still come
//! back. With the `parallel` feature the collections are processed on the
//! rayon pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use super::{PreparedQuery, SearchEngine};
use crate::config::CollectionSpec;
use crate::source::RecordSource;
use crate::types::{CollectionResults, GlobalResults};

impl SearchEngine {
    /// Search every collection in `specs` through `source`.
    ///
    /// Groups come back in `specs` order. `total` is the number of results
    /// returned across all groups.
    pub fn search_collections(
        &self,
        raw: &str,
        source: &dyn RecordSource,
        specs: &[CollectionSpec],
    ) -> GlobalResults {
        let query = self.normalize_query(raw);
        if self.is_too_short(&query) {
            debug!(query = raw, "query too short; empty response");
            return GlobalResults::empty(&query);
        }

        let prepared = PreparedQuery::new(&query);
        let run = |spec: &CollectionSpec| self.search_collection(&prepared, source, spec);

        #[cfg(feature = "parallel")]
        let collections: Vec<CollectionResults> = specs.par_iter().map(run).collect();
        #[cfg(not(feature = "parallel"))]
        let collections: Vec<CollectionResults> = specs.iter().map(run).collect();

        let total = collections.iter().map(|c| c.results.len()).sum();
        debug!(
            query = raw,
            collections = collections.len(),
            degraded = collections.iter().filter(|c| c.degraded).count(),
            total,
            "global search"
        );

        GlobalResults {
            query: query.original,
            normalized: query.normalized,
            collections,
            total,
        }
    }

    /// [`search_collections`](Self::search_collections) over the configured collections.
    pub fn search_global(&self, raw: &str, source: &dyn RecordSource) -> GlobalResults {
        self.search_collections(raw, source, &self.config.collections)
    }

    fn search_collection(
        &self,
        prepared: &PreparedQuery,
        source: &dyn RecordSource,
        spec: &CollectionSpec,
    ) -> CollectionResults {
        match source.fetch(&spec.name, &spec.filter) {
            Ok(records) => {
                let cap = self.result_cap(spec.limit);
                let (results, _) = self.rank_records(prepared, &records, &spec.fields, None, cap);
                CollectionResults {
                    name: spec.name.clone(),
                    results,
                    degraded: false,
                }
            }
            Err(err) => {
                warn!(collection = %spec.name, error = %err, "collection fetch failed; returning it empty");
                CollectionResults {
                    name: spec.name.clone(),
                    results: Vec::new(),
                    degraded: true,
                }
            }
        }
    }
}
