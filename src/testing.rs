// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::error::SourceError;
use crate::source::{IncludeFilter, RecordSource};
use crate::types::{Folder, Record};

/// Create a material with a title.
pub fn make_material(id: &str, title: &str) -> Record {
    Record::new(id).with_field("titulo", title)
}

/// Create a material with a title, inside a folder.
pub fn make_material_in(id: &str, title: &str, folder: &str) -> Record {
    make_material(id, title).in_folder(folder)
}

/// Create a folder.
pub fn make_folder(id: &str, name: &str, parent: Option<&str>) -> Folder {
    Folder::new(id, name, parent)
}

/// The `Cálculo / 2023 / Pruebas` chain plus an unrelated `Física` root.
///
/// Ids: `a` → `b` → `c`, and `d`.
pub fn course_folders() -> Vec<Folder> {
    vec![
        make_folder("a", "Cálculo", None),
        make_folder("b", "2023", Some("a")),
        make_folder("c", "Pruebas", Some("b")),
        make_folder("d", "Física", None),
    ]
}

/// A few hundred plausible material titles, deterministic.
pub fn synthetic_materials(count: usize) -> Vec<Record> {
    const SUBJECTS: &[&str] = &["Cálculo", "Álgebra", "Física", "Química", "Programación"];
    const KINDS: &[&str] = &["Prueba I1", "Prueba I2", "Control C3", "Examen", "Pauta", "Apuntes"];
    (0..count)
        .map(|i| {
            let title = format!(
                "{} {} {}",
                KINDS[i % KINDS.len()],
                SUBJECTS[(i / KINDS.len()) % SUBJECTS.len()],
                2015 + (i % 10)
            );
            make_material(&format!("m{}", i), &title)
                .in_folder(["a", "b", "c", "d"][i % 4])
                .uploaded_at(1_600_000_000_000 + i as i64)
        })
        .collect()
}

/// A record source whose every fetch fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSource;

impl RecordSource for UnavailableSource {
    fn fetch(&self, collection: &str, _filter: &IncludeFilter) -> Result<Vec<Record>, SourceError> {
        Err(SourceError::Unavailable {
            collection: collection.to_string(),
            reason: "source offline".to_string(),
        })
    }
}
