//! Flat search over a single collection.

use campus_search::{normalize_search_term, search, Record, SearchOptions};

use super::common::{assert_sorted_by_score, ids, make_material, score_of, title_options};

fn calculo_materials() -> Vec<Record> {
    vec![
        make_material("1", "Prueba I2 Cálculo 2023"),
        make_material("2", "examen final Calculo 2024"),
        make_material("3", "Cálculo II apuntes"),
    ]
}

// ============================================================================
// MATCHING
// ============================================================================

#[test]
fn test_every_query_token_must_appear() {
    let response = search("calculo i2", &calculo_materials(), &title_options());
    assert_eq!(ids(&response.results), vec!["1"]);
    assert_eq!(response.total, 1);
}

#[test]
fn test_i2_does_not_split_into_roman_two() {
    // "i2" is an evaluation code, not "i 2" or "II"
    let response = search("calculo i2", &calculo_materials(), &title_options());
    assert!(score_of(&response.results, "3").is_none());
}

#[test]
fn test_number_glued_to_subject_matches() {
    let records = vec![
        make_material("calc", "Cálculo 2"),
        make_material("fis", "Física 3"),
    ];
    let response = search("calculo2", &records, &title_options());
    assert_eq!(ids(&response.results), vec!["calc"]);

    let response = search("fisica3", &records, &title_options());
    assert_eq!(ids(&response.results), vec!["fis"]);
}

#[test]
fn test_course_code_does_not_match_near_miss() {
    let records = vec![make_material("q", "Química para Ingeniería (QIM100E)")];
    let response = search("ain100e", &records, &title_options());
    assert!(response.results.is_empty());

    let response = search("qim100e", &records, &title_options());
    assert_eq!(ids(&response.results), vec!["q"]);
}

#[test]
fn test_roman_and_arabic_numerals_meet() {
    let records = vec![
        make_material("roman", "Cálculo II"),
        make_material("arabic", "calculo 2"),
    ];
    for query in ["calculo ii", "calculo 2", "CÁLCULO II"] {
        let response = search(query, &records, &title_options());
        let mut found = ids(&response.results);
        found.sort();
        assert_eq!(found, vec!["arabic", "roman"], "query {:?}", query);
    }
}

#[test]
fn test_accents_and_case_ignored() {
    let records = vec![make_material("1", "ÁLGEBRA LINEAL")];
    let response = search("algebra lineal", &records, &title_options());
    assert_eq!(response.results.len(), 1);
}

#[test]
fn test_keyboard_typos_corrected() {
    let query = normalize_search_term("calclo");
    assert_eq!(query.normalized, "calculo");

    let records = vec![make_material("1", "Guía de Cálculo")];
    let response = search("calclo", &records, &title_options());
    assert_eq!(ids(&response.results), vec!["1"]);
}

#[test]
fn test_course_code_spacing_variants() {
    let records = vec![make_material("1", "Apuntes MAT1203")];
    for query in ["MAT1203", "mat-1203", "MAT 1203"] {
        let response = search(query, &records, &title_options());
        assert_eq!(ids(&response.results), vec!["1"], "query {:?}", query);
    }
}

#[test]
fn test_multiple_fields_joined() {
    let records = vec![Record::new("1")
        .with_field("titulo", "Ayuda urgente")
        .with_field("descripcion", "necesito ayuda con cálculo")];
    let options = SearchOptions::new(["titulo", "descripcion"]);
    let response = search("urgente calculo", &records, &options);
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].matched_field, None);

    let response = search("calculo", &records, &options);
    assert_eq!(response.results[0].matched_field.as_deref(), Some("descripcion"));
}

// ============================================================================
// ENVELOPE
// ============================================================================

#[test]
fn test_short_query_returns_empty_response() {
    let response = search("c", &calculo_materials(), &title_options());
    assert!(response.results.is_empty());
    assert_eq!(response.total, 0);
    assert_eq!(response.query, "c");
}

#[test]
fn test_blank_query_returns_empty_response() {
    let response = search("   ", &calculo_materials(), &title_options());
    assert!(response.results.is_empty());
}

#[test]
fn test_results_sorted_and_capped() {
    let records: Vec<_> = (0..20)
        .map(|i| make_material(&i.to_string(), &format!("Cálculo guía {}", i)))
        .collect();
    let response = search("calculo", &records, &title_options().max_results(5));
    assert_eq!(response.results.len(), 5);
    assert_eq!(response.total, 20);
    assert_sorted_by_score(&response.results);
}

#[test]
fn test_exact_title_ranks_first() {
    let records = vec![
        make_material("long", "Apuntes de cálculo integral avanzado"),
        make_material("exact", "Cálculo"),
    ];
    let response = search("calculo", &records, &title_options());
    assert_eq!(ids(&response.results), vec!["exact", "long"]);
}

#[test]
fn test_min_relevance() {
    let records = calculo_materials();
    let all = search("calculo", &records, &title_options());
    let threshold = all.results[0].score;
    let strict = search("calculo", &records, &title_options().min_relevance(threshold));
    assert!(strict.results.iter().all(|m| m.score >= threshold));
    assert!(strict.results.len() < all.results.len());
}

#[test]
fn test_suggestions_from_partial_matches() {
    let records = vec![make_material("1", "Termodinámica básica")];
    let response = search("termo avanzada", &records, &title_options());
    assert!(response.results.is_empty());
    assert_eq!(response.suggestions, vec!["termodinamica"]);
}
