// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Display order for academic materials.
//!
//! Generic records sort by score alone. Materials sort by seven keys, in this
//! priority:
//!
//! 1. pinned before unpinned
//! 2. academic year, newest first
//! 3. term: first semester < second semester < summer (unknown sorts first)
//! 4. evaluation type: final exam > midterm `I#` > control `C#` > answer key > other
//! 5. evaluation number, ascending (I1 before I2)
//! 6. relevance score, descending
//! 7. upload time, newest first
//!
//! Year, term and evaluation are guessed from the title with a few regexes.
//! The keys are packed into one tuple and compared lexicographically, so each
//! rule is a single line in [`RankingKey::sort_tuple`].

use std::cmp::{Ordering, Reverse};
use std::sync::LazyLock;

use regex::Regex;

use crate::text::normalize;
use crate::types::{Record, ScoredMatch};

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2})\b").expect("year pattern"));
static FIRST_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:c1|primer semestre|semestre 1)\b").expect("first term pattern")
});
static SECOND_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:c2|segundo semestre|semestre 2)\b").expect("second term pattern")
});
static SUMMER_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:tav|verano)\b").expect("summer term pattern"));
static EVALUATION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[ic](\d+)\b").expect("evaluation number pattern"));
static FINAL_EXAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:examen|final)\b").expect("final exam pattern"));
static MIDTERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bi(\d+)\b").expect("midterm pattern"));
static CONTROL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bc(\d+)\b").expect("control pattern"));
static ANSWER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:pauta|solucion)\b").expect("answer key pattern"));

/// Academic term. Ordinal order is sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    #[default]
    Unspecified = 0,
    First = 1,
    Second = 2,
    Summer = 3,
}

/// Kind of evaluation a material belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EvaluationKind {
    FinalExam,
    Midterm,
    Control,
    AnswerKey,
    #[default]
    Other,
}

impl EvaluationKind {
    /// Sort priority; higher ranks first.
    pub fn priority(self) -> u8 {
        match self {
            EvaluationKind::FinalExam => 100,
            EvaluationKind::Midterm => 90,
            EvaluationKind::Control => 80,
            EvaluationKind::AnswerKey => 70,
            EvaluationKind::Other => 0,
        }
    }
}

/// What a material title says about where it sits in the academic calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcademicMetadata {
    pub year: Option<i32>,
    pub term: Term,
    pub evaluation: EvaluationKind,
    /// The `N` of "I2" or "C3"; 0 when the title has none.
    pub evaluation_number: u32,
}

impl AcademicMetadata {
    /// Guess metadata from a title. Matching runs on the normalized title,
    /// so case, accents and punctuation do not matter.
    pub fn extract(title: &str) -> Self {
        let title = normalize(title);

        let year = YEAR
            .captures(&title)
            .and_then(|caps| caps[1].parse().ok());

        let term = if FIRST_TERM.is_match(&title) {
            Term::First
        } else if SECOND_TERM.is_match(&title) {
            Term::Second
        } else if SUMMER_TERM.is_match(&title) {
            Term::Summer
        } else {
            Term::Unspecified
        };

        let evaluation = if FINAL_EXAM.is_match(&title) {
            EvaluationKind::FinalExam
        } else if MIDTERM.is_match(&title) {
            EvaluationKind::Midterm
        } else if CONTROL.is_match(&title) {
            EvaluationKind::Control
        } else if ANSWER_KEY.is_match(&title) {
            EvaluationKind::AnswerKey
        } else {
            EvaluationKind::Other
        };

        // The number belongs to the code that decided the kind: "I2 C1" is I2.
        let numbered_by = match evaluation {
            EvaluationKind::Midterm => &*MIDTERM,
            EvaluationKind::Control => &*CONTROL,
            _ => &*EVALUATION_NUMBER,
        };
        let evaluation_number = numbered_by
            .captures(&title)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(0);

        Self {
            year,
            term,
            evaluation,
            evaluation_number,
        }
    }
}

/// f64 with a total order, for use inside sort tuples.
#[derive(Debug, Clone, Copy)]
struct TotalF64(f64);

impl PartialEq for TotalF64 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Everything the material comparator looks at, for one scored material.
#[derive(Debug, Clone, Copy)]
pub struct RankingKey {
    pub pinned: bool,
    /// Year from the title, else the record's own year, else 0.
    pub year: i32,
    pub term: Term,
    pub evaluation_priority: u8,
    pub evaluation_number: u32,
    pub score: f64,
    /// Epoch millis; missing timestamps sort last.
    pub uploaded_at: i64,
}

type SortTuple = (
    Reverse<bool>,
    Reverse<i32>,
    Term,
    Reverse<u8>,
    u32,
    Reverse<TotalF64>,
    Reverse<i64>,
);

impl RankingKey {
    pub fn new(record: &Record, score: f64, title_field: &str) -> Self {
        let meta = AcademicMetadata::extract(&record.field_or_empty(title_field));
        Self {
            pinned: record.pinned,
            year: meta.year.or(record.year).unwrap_or(0),
            term: meta.term,
            evaluation_priority: meta.evaluation.priority(),
            evaluation_number: meta.evaluation_number,
            score,
            uploaded_at: record.uploaded_at.unwrap_or(i64::MIN),
        }
    }

    /// Ascending order of this tuple is display order.
    fn sort_tuple(&self) -> SortTuple {
        (
            Reverse(self.pinned),
            Reverse(self.year),
            self.term,
            Reverse(self.evaluation_priority),
            self.evaluation_number,
            Reverse(TotalF64(self.score)),
            Reverse(self.uploaded_at),
        )
    }
}

impl PartialEq for RankingKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankingKey {}

impl PartialOrd for RankingKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `Less` means "shows up earlier".
impl Ord for RankingKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_tuple().cmp(&other.sort_tuple())
    }
}

/// Compare two scored materials for display. `Less` means `a` shows first.
pub fn compare_materials(
    a: &ScoredMatch<Record>,
    b: &ScoredMatch<Record>,
    title_field: &str,
) -> Ordering {
    RankingKey::new(&a.item, a.score, title_field)
        .cmp(&RankingKey::new(&b.item, b.score, title_field))
}

/// Sort materials into display order, extracting each key once.
pub fn sort_materials(materials: &mut [ScoredMatch<Record>], title_field: &str) {
    materials.sort_by_cached_key(|m| RankingKey::new(&m.item, m.score, title_field));
}

/// Generic records: score descending, nothing else.
pub fn compare_by_score<T>(a: &ScoredMatch<T>, b: &ScoredMatch<T>) -> Ordering {
    b.score.total_cmp(&a.score)
}
