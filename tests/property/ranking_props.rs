//! Material ranking property tests.
//!
//! - pinned materials always come first
//! - among equally pinned materials, newer years come first
//! - sorting is a permutation and is idempotent
//! - the comparator is a total order (antisymmetric)

use std::cmp::Ordering;

use proptest::prelude::*;
use campus_search::{compare_materials, sort_materials, AcademicMetadata, Record, ScoredMatch};

const KINDS: &[&str] = &["Examen", "Prueba I1", "Prueba I2", "Control C3", "Pauta", "Apuntes", "TAV"];

fn material() -> impl Strategy<Value = ScoredMatch<Record>> {
    (
        prop::sample::select(KINDS.to_vec()),
        prop::option::of(2015i32..2026),
        any::<bool>(),
        0.0f64..200.0,
        prop::option::of(0i64..1_000_000),
        0u32..1_000_000,
    )
        .prop_map(|(kind, year, pinned, score, uploaded, id)| {
            let title = match year {
                Some(y) => format!("{} {}", kind, y),
                None => kind.to_string(),
            };
            let mut item = Record::new(format!("m{}", id)).with_field("titulo", title).pinned(pinned);
            item.uploaded_at = uploaded;
            ScoredMatch {
                item,
                score,
                matched_field: Some("titulo".to_string()),
                folder_path: None,
            }
        })
}

fn year_of(m: &ScoredMatch<Record>) -> i32 {
    AcademicMetadata::extract(&m.item.field_or_empty("titulo"))
        .year
        .or(m.item.year)
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_pinned_first(mut items in prop::collection::vec(material(), 0..40)) {
        sort_materials(&mut items, "titulo");
        let first_unpinned = items.iter().position(|m| !m.item.pinned).unwrap_or(items.len());
        prop_assert!(items[first_unpinned..].iter().all(|m| !m.item.pinned));
    }

    #[test]
    fn prop_newer_years_first(mut items in prop::collection::vec(material(), 0..40)) {
        sort_materials(&mut items, "titulo");
        for pair in items.windows(2) {
            if pair[0].item.pinned == pair[1].item.pinned {
                prop_assert!(year_of(&pair[0]) >= year_of(&pair[1]));
            }
        }
    }

    #[test]
    fn prop_sort_is_permutation_and_idempotent(items in prop::collection::vec(material(), 0..40)) {
        let mut sorted = items.clone();
        sort_materials(&mut sorted, "titulo");

        let mut before: Vec<_> = items.iter().map(|m| m.item.id.clone()).collect();
        let mut after: Vec<_> = sorted.iter().map(|m| m.item.id.clone()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);

        let mut again = sorted.clone();
        sort_materials(&mut again, "titulo");
        prop_assert_eq!(again, sorted);
    }

    #[test]
    fn prop_comparator_antisymmetric(a in material(), b in material()) {
        let ab = compare_materials(&a, &b, "titulo");
        let ba = compare_materials(&b, &a, "titulo");
        prop_assert_eq!(ab, ba.reverse());
        prop_assert_eq!(compare_materials(&a, &a, "titulo"), Ordering::Equal);
    }
}
