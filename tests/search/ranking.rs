//! Academic display order of material results.

use campus_search::{search_hierarchy, HierarchyOptions};

use super::common::{course_folders, ids, make_material_in, pinned_material};

fn options() -> HierarchyOptions {
    HierarchyOptions::default()
}

#[test]
fn test_pinned_first_regardless_of_score() {
    let records = vec![
        make_material_in("exact", "Pauta Cálculo", "a"),
        pinned_material("pinned", "Cálculo: apuntes varios de pauta antigua").in_folder("a"),
    ];
    let results = search_hierarchy("pauta", &records, &course_folders(), &options());
    assert_eq!(ids(&results.materials), vec!["pinned", "exact"]);
    assert!(results.materials[0].score < results.materials[1].score);
}

#[test]
fn test_newer_year_before_higher_score() {
    let records = vec![
        make_material_in("old", "Prueba I1 2019", "a"),
        make_material_in("new", "Prueba I1 de cálculo, versión larga 2024", "a"),
    ];
    let results = search_hierarchy("prueba i1", &records, &course_folders(), &options());
    assert_eq!(ids(&results.materials), vec!["new", "old"]);
}

#[test]
fn test_terms_in_calendar_order_within_a_year() {
    let records = vec![
        make_material_in("summer", "Guía TAV 2023", "a"),
        make_material_in("second", "Guía segundo semestre 2023", "a"),
        make_material_in("first", "Guía primer semestre 2023", "a"),
        make_material_in("none", "Guía 2023", "a"),
    ];
    let results = search_hierarchy("guia", &records, &course_folders(), &options());
    assert_eq!(ids(&results.materials), vec!["none", "first", "second", "summer"]);
}

#[test]
fn test_evaluation_kinds_then_numbers() {
    let records = vec![
        make_material_in("pauta", "Pauta 2023", "a"),
        make_material_in("i2", "Prueba I2 2023", "a"),
        make_material_in("control", "Prueba Control C3 2023", "a"),
        make_material_in("examen", "Prueba Examen 2023", "a"),
        make_material_in("i1", "Prueba I1 2023", "a"),
    ];
    let results = search_hierarchy("2023", &records, &course_folders(), &options());
    assert_eq!(ids(&results.materials), vec!["examen", "i1", "i2", "control", "pauta"]);
}

#[test]
fn test_upload_time_breaks_ties() {
    let records = vec![
        make_material_in("older", "Apuntes", "a").uploaded_at(1_000),
        make_material_in("newer", "Apuntes", "a").uploaded_at(2_000),
        make_material_in("undated", "Apuntes", "a"),
    ];
    let results = search_hierarchy("apuntes", &records, &course_folders(), &options());
    assert_eq!(ids(&results.materials), vec!["newer", "older", "undated"]);
}

#[test]
fn test_folders_sorted_by_score_only() {
    let results = search_hierarchy("pruebas", &[], &course_folders(), &options());
    assert_eq!(results.folders.len(), 1);
    assert_eq!(results.folders[0].item.id, "c");
    assert_eq!(results.folders[0].matched_field.as_deref(), Some("nombre"));
}
