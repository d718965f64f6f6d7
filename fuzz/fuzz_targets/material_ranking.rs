// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the academic material ordering.
//!
//! Arbitrary titles, pins, years and upload times. Sorting must be total
//! (no panics in the comparator) and pinned materials must come first.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use campus_search::{sort_materials, Record, ScoredMatch};

#[derive(Debug, Arbitrary)]
struct FuzzMaterial {
    title: String,
    pinned: bool,
    year: Option<i32>,
    uploaded_at: Option<i64>,
    score: f64,
}

fuzz_target!(|input: Vec<FuzzMaterial>| {
    let mut items: Vec<ScoredMatch<Record>> = input
        .into_iter()
        .take(64)
        .enumerate()
        .map(|(i, m)| {
            let mut item = Record::new(i.to_string())
                .with_field("titulo", m.title)
                .pinned(m.pinned);
            item.year = m.year;
            item.uploaded_at = m.uploaded_at;
            ScoredMatch {
                item,
                score: m.score,
                matched_field: None,
                folder_path: None,
            }
        })
        .collect();

    sort_materials(&mut items, "titulo");

    let first_unpinned = items.iter().position(|m| !m.item.pinned).unwrap_or(items.len());
    assert!(items[first_unpinned..].iter().all(|m| !m.item.pinned));
});
