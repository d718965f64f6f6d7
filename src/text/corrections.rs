// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Locale-specific rules: known keyboard errors and generic file-name prefixes.
//!
//! Both tables were sampled from Spanish academic file names and will not
//! generalize to other data sets. They are plain data handed to [`Ruleset::new`],
//! never branches in code, so another locale only needs another table.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;

/// Known misspellings and their corrections, matched as whole words,
/// case-insensitively.
///
/// No correction may contain a misspelling from this table as a whole word,
/// otherwise correcting twice would differ from correcting once.
pub const SPANISH_ACADEMIC_CORRECTIONS: &[(&str, &str)] = &[
    ("ano", "año"),
    ("anio", "año"),
    ("ejecicio", "ejercicio"),
    ("ejercico", "ejercicio"),
    ("ejrcicio", "ejercicio"),
    ("calclo", "cálculo"),
    ("calulo", "cálculo"),
    ("caluclo", "cálculo"),
    ("pruba", "prueba"),
    ("preuba", "prueba"),
    ("exmen", "examen"),
    ("examne", "examen"),
    ("contorl", "control"),
    ("solucino", "solución"),
    ("solcuion", "solución"),
    ("fisca", "física"),
    ("quimca", "química"),
    ("algebar", "álgebra"),
    ("probabilidda", "probabilidad"),
    ("semetre", "semestre"),
    ("apunets", "apuntes"),
];

/// Prefixes of camera/scanner default names ("scan001", "IMG_2041", "Documento 3").
pub const GENERIC_FILE_PREFIXES: &[&str] = &[
    "scan",
    "escaneo",
    "imagen",
    "img",
    "foto",
    "archivo",
    "documento",
    "doc",
    "captura",
];

static SPANISH_ACADEMIC: LazyLock<Ruleset> = LazyLock::new(|| {
    Ruleset::new(
        SPANISH_ACADEMIC_CORRECTIONS.iter().copied(),
        GENERIC_FILE_PREFIXES.iter().copied(),
    )
    .expect("built-in ruleset tables are valid")
});

/// A compiled set of locale rules.
#[derive(Debug, Clone)]
pub struct Ruleset {
    /// Lowercased misspelling → correction.
    corrections: HashMap<String, String>,
    /// One alternation over every misspelling; `None` when the table is empty.
    correction_pattern: Option<Regex>,
    /// Matches normalized names that start with a generic prefix followed by digits.
    generic_name_pattern: Option<Regex>,
}

impl Ruleset {
    /// Compile a ruleset from a correction table and a list of generic prefixes.
    ///
    /// Entries are escaped before they reach the regex engine, so the only
    /// failure mode is a pattern too large to compile.
    pub fn new<'a, C, P>(corrections: C, generic_prefixes: P) -> Result<Self, ConfigError>
    where
        C: IntoIterator<Item = (&'a str, &'a str)>,
        P: IntoIterator<Item = &'a str>,
    {
        let corrections: HashMap<String, String> = corrections
            .into_iter()
            .filter(|(wrong, _)| !wrong.trim().is_empty())
            .map(|(wrong, right)| (wrong.trim().to_lowercase(), right.to_lowercase()))
            .collect();

        // Longest first so "ejercico" is tried before any shorter entry it contains.
        let mut keys: Vec<&str> = corrections.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let correction_pattern = if keys.is_empty() {
            None
        } else {
            let alternation: Vec<String> = keys.iter().map(|k| regex::escape(k)).collect();
            Some(Regex::new(&format!(r"(?i)\b(?:{})\b", alternation.join("|")))?)
        };

        let prefixes: Vec<String> = generic_prefixes
            .into_iter()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .map(|p| regex::escape(&p))
            .collect();
        let generic_name_pattern = if prefixes.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(
                r"^(?:{})[\s_]*\d+",
                prefixes.join("|")
            ))?)
        };

        Ok(Self {
            corrections,
            correction_pattern,
            generic_name_pattern,
        })
    }

    /// The built-in Spanish academic ruleset.
    pub fn spanish_academic() -> &'static Ruleset {
        &SPANISH_ACADEMIC
    }

    /// Replace known misspellings with their corrections.
    ///
    /// Matching is case-insensitive and whole-word; replacements are emitted
    /// in lowercase. Text with no known misspelling comes back unchanged.
    pub fn correct(&self, text: &str) -> String {
        let Some(pattern) = &self.correction_pattern else {
            return text.to_string();
        };
        pattern
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let found = caps[0].to_lowercase();
                self.corrections
                    .get(&found)
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Does this name look like a camera/scanner default ("scan001", "img_2041")?
    ///
    /// The check runs on the normalized form, so "IMG-2041.jpg" counts too.
    pub fn is_generic_file_name(&self, name: &str) -> bool {
        let Some(pattern) = &self.generic_name_pattern else {
            return false;
        };
        pattern.is_match(&super::normalize(name))
    }

    /// Number of entries in the correction table.
    pub fn correction_count(&self) -> usize {
        self.corrections.len()
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset::spanish_academic().clone()
    }
}

/// Correct known keyboard errors with the built-in Spanish academic table.
pub fn correct_known_errors(text: &str) -> String {
    Ruleset::spanish_academic().correct(text)
}
