// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text canonicalization: everything that happens to a string before it is compared.
//!
//! Users type folder and file references inconsistently. "Cálculo II", "calculo 2",
//! "CALCULO-ii" and "calclo 2" all mean the same course. Rather than one fuzzy
//! edit-distance metric, we run a fixed pipeline of cheap, pure rewrites and then
//! try several canonical spellings of the query at once.
//!
//! ```text
//! raw ──▶ correct ──▶ collapse runs ──▶ normalize ──▶ roman→arabic ──▶ strip zeros
//!         (ruleset)   ("holaaa"→"holaa") (case, accents,  ("ii"→"2")     ("mat001"→"mat1")
//!                                         punctuation)
//! ```
//!
//! Every stage is a `&str -> String` function that can be used on its own. The
//! only locale-specific data (keyboard corrections, generic file-name prefixes)
//! lives in [`Ruleset`], so a different data set can swap it out wholesale.

mod corrections;
mod normalize;
mod numerals;
mod tokens;
mod variations;

pub use corrections::{
    correct_known_errors, Ruleset, GENERIC_FILE_PREFIXES, SPANISH_ACADEMIC_CORRECTIONS,
};
pub use normalize::{canonicalize, collapse_duplicate_runs, normalize, strip_leading_zeros};
pub use numerals::{arabic_to_roman, roman_to_arabic, ROMAN_NUMERALS};
pub use tokens::{matches_all_tokens, matches_tokens, tokenize};
pub use variations::{generate_variations, generate_variations_with};
