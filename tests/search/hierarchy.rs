//! Folder-scoped material search.

use campus_search::{
    search_hierarchy, Folder, HierarchyOptions, Record, SearchConfig, SearchEngine, SearchLimits,
};

use super::common::{abc_tree, course_folders, ids, make_folder, make_material_in, scoped};

fn materials() -> Vec<Record> {
    vec![
        make_material_in("deep", "Prueba I2", "c"),
        make_material_in("top", "Programa del curso", "a"),
        make_material_in("other", "Prueba I2 Física", "d"),
        make_material_in("orphan", "Prueba I2 sin carpeta", "zz"),
    ]
}

// ============================================================================
// SCOPE
// ============================================================================

#[test]
fn test_scope_reaches_nested_materials() {
    let results = search_hierarchy("prueba", &materials(), &course_folders(), &scoped("a"));
    let found = ids(&results.materials);
    assert!(found.contains(&"deep"));
    assert!(!found.contains(&"other"));
    assert!(!found.contains(&"orphan"));
}

#[test]
fn test_scope_excludes_unrelated_subtree() {
    let results = search_hierarchy("prueba", &materials(), &course_folders(), &scoped("d"));
    assert_eq!(ids(&results.materials), vec!["other"]);
}

#[test]
fn test_scope_includes_root_materials() {
    let results = search_hierarchy("programa", &materials(), &course_folders(), &scoped("a"));
    assert_eq!(ids(&results.materials), vec!["top"]);
}

#[test]
fn test_unscoped_search_sees_everything() {
    let results = search_hierarchy("prueba i2", &materials(), &course_folders(), &HierarchyOptions::default());
    assert_eq!(results.materials.len(), 3);
}

#[test]
fn test_scoped_folders_are_strict_descendants() {
    let results = search_hierarchy("calculo", &[], &course_folders(), &scoped("a"));
    // "Cálculo" itself is the scope root, its children match through the path
    let folder_ids: Vec<&str> = results.folders.iter().map(|f| f.item.id.as_str()).collect();
    assert!(!folder_ids.contains(&"a"));
    assert!(folder_ids.contains(&"b"));
    assert!(folder_ids.contains(&"c"));
}

#[test]
fn test_same_folder_name_in_two_subtrees() {
    let folders = vec![
        make_folder("a", "Cálculo", None),
        make_folder("p1", "Pruebas", Some("a")),
        make_folder("d", "Física", None),
        make_folder("p2", "Pruebas", Some("d")),
    ];
    let records = vec![
        make_material_in("m1", "Control 1", "p1"),
        make_material_in("m2", "Control 1", "p2"),
    ];
    let results = search_hierarchy("control", &records, &folders, &scoped("d"));
    assert_eq!(ids(&results.materials), vec!["m2"]);
}

// ============================================================================
// MATCH KINDS
// ============================================================================

#[test]
fn test_direct_match_reports_field() {
    let results = search_hierarchy("prueba", &materials(), &course_folders(), &scoped("a"));
    let deep = &results.materials[0];
    assert_eq!(deep.item.id, "deep");
    assert_eq!(deep.matched_field.as_deref(), Some("titulo"));
    assert_eq!(deep.folder_path.as_deref(), Some("Cálculo / 2023 / Pruebas"));
}

#[test]
fn test_path_only_match() {
    let records = vec![make_material_in("m", "I2", "c")];
    let results = search_hierarchy("calculo", &records, &course_folders(), &HierarchyOptions::default());
    assert_eq!(results.materials.len(), 1);
    assert_eq!(results.materials[0].matched_field.as_deref(), Some("path"));
}

#[test]
fn test_cross_match_spans_path_and_title() {
    let records = vec![make_material_in("m", "Prueba I2", "c")];
    let results = search_hierarchy("calculo i2", &records, &course_folders(), &HierarchyOptions::default());
    assert_eq!(results.materials.len(), 1);
    assert_eq!(results.materials[0].matched_field, None);
}

#[test]
fn test_direct_outranks_path() {
    let folders = vec![make_folder("a", "Cálculo Pruebas", None)];
    let records = vec![
        make_material_in("path", "Apuntes", "a"),
        make_material_in("direct", "Cálculo pruebas", "a"),
    ];
    let results =
        search_hierarchy("calculo pruebas", &records, &folders, &HierarchyOptions::default());

    assert_eq!(ids(&results.materials), vec!["direct", "path"]);
    assert!(results.materials[0].score > results.materials[1].score);
    assert_eq!(results.materials[1].matched_field.as_deref(), Some("path"));
}

#[test]
fn test_fields_joined_like_flat_search() {
    let material = Record::new("m")
        .with_field("titulo", "Guía de ejercicios")
        .with_field("descripcion", "Cálculo integral");
    let dangling = material.clone().in_folder("missing");
    let flat = campus_search::search(
        "guia integral",
        std::slice::from_ref(&material),
        &campus_search::SearchOptions::new(["titulo", "descripcion"]),
    );
    assert_eq!(flat.results.len(), 1);

    let options = HierarchyOptions::default();
    for record in [material, dangling] {
        let results = search_hierarchy("guia integral", &[record], &course_folders(), &options);
        assert_eq!(results.materials.len(), 1);
        assert_eq!(results.materials[0].matched_field, None);
    }
}

// ============================================================================
// TREE HAZARDS
// ============================================================================

#[test]
fn test_cyclic_folders_terminate() {
    let folders = vec![
        Folder::new("x", "Uno", Some("y")),
        Folder::new("y", "Dos", Some("x")),
    ];
    let records = vec![make_material_in("m", "Prueba", "x")];
    let results = search_hierarchy("prueba", &records, &folders, &scoped("x"));
    assert_eq!(ids(&results.materials), vec!["m"]);
}

#[test]
fn test_depth_limit_from_config() {
    let mut folders = vec![Folder::new("f0", "Raiz", None)];
    for i in 1..30 {
        let parent = format!("f{}", i - 1);
        folders.push(Folder::new(format!("f{}", i), format!("Nivel {}", i), Some(parent.as_str())));
    }
    let records = vec![make_material_in("m", "Prueba", "f29")];
    let config = SearchConfig {
        limits: SearchLimits {
            max_folder_depth: 5,
            ..SearchLimits::default()
        },
        ..SearchConfig::default()
    };
    let engine = SearchEngine::new(config).unwrap();
    let results = engine.search_hierarchy_in("prueba", &records, &folders, &HierarchyOptions::default());
    assert_eq!(results.materials.len(), 1);
    let path = results.materials[0].folder_path.as_deref().unwrap();
    assert!(!path.contains("Raiz"), "path should be truncated: {}", path);
}

#[test]
fn test_abc_tree_descendants() {
    let tree = abc_tree();
    let below = tree.descendants("a");
    assert!(below.contains("b") && below.contains("c"));
    assert!(!below.contains("a") && !below.contains("d"));
}
