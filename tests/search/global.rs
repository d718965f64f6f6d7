//! Global search across collections of a JSON snapshot.

use std::io::Write;

use campus_search::testing::UnavailableSource;
use campus_search::{CollectionSpec, IncludeFilter, JsonStore, SearchConfig, SearchEngine};
use tempfile::NamedTempFile;

use super::common::ids;

const SNAPSHOT: &str = r#"{
    "favores": [
        {"id": "f1", "titulo": "Ayuda con Cálculo II", "descripcion": "antes de la I2", "estado": "abierto"},
        {"id": "f2", "titulo": "Regalo apuntes", "descripcion": "cálculo y álgebra", "estado": "cerrado"}
    ],
    "anuncios": [
        {"id": "a1", "titulo": "Ayudantía de cálculo", "contenido": "sala B12"}
    ],
    "marketplace": [
        {"id": "p1", "titulo": "Vendo libro", "descripcion": "Stewart", "categoria": "Cálculo"}
    ],
    "usuarios": [
        {"id": "u1", "nombre": "Ana Pérez", "carrera": "Ingeniería Civil"}
    ]
}"#;

fn snapshot_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_collections_from_file() {
    let file = snapshot_file();
    let store = JsonStore::from_path(file.path()).unwrap();
    let results = SearchEngine::shared().search_global("calculo", &store);

    let names: Vec<&str> = results.collections.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["favores", "anuncios", "marketplace", "usuarios"]);

    let mut favores = ids(&results.collection("favores").unwrap().results);
    favores.sort();
    assert_eq!(favores, vec!["f1", "f2"]);
    assert_eq!(ids(&results.collection("anuncios").unwrap().results), vec!["a1"]);
    assert_eq!(ids(&results.collection("marketplace").unwrap().results), vec!["p1"]);
    assert!(results.collection("usuarios").unwrap().results.is_empty());
    assert_eq!(results.total, 4);
    assert!(results.collections.iter().all(|c| !c.degraded));
}

#[test]
fn test_collection_filter_applies() {
    let store = JsonStore::from_json(SNAPSHOT).unwrap();
    let specs = vec![CollectionSpec::new("favores", ["titulo", "descripcion"])
        .with_filter(IncludeFilter::field_equals("estado", "abierto"))];
    let results = SearchEngine::shared().search_collections("calculo", &store, &specs);
    assert_eq!(ids(&results.collection("favores").unwrap().results), vec!["f1"]);
}

#[test]
fn test_missing_collection_degrades_alone() {
    let store = JsonStore::from_json(SNAPSHOT).unwrap();
    let specs = vec![
        CollectionSpec::new("anuncios", ["titulo"]),
        CollectionSpec::new("eventos", ["titulo"]),
    ];
    let results = SearchEngine::shared().search_collections("calculo", &store, &specs);
    assert!(results.collection("eventos").unwrap().degraded);
    assert_eq!(results.collection("anuncios").unwrap().results.len(), 1);
    assert_eq!(results.total, 1);
}

#[test]
fn test_unavailable_source_still_answers() {
    let results = SearchEngine::shared().search_global("calculo", &UnavailableSource);
    assert_eq!(results.total, 0);
    assert_eq!(results.collections.len(), 4);
    assert!(results.collections.iter().all(|c| c.degraded && c.results.is_empty()));
}

#[test]
fn test_per_collection_limit_from_config() {
    let config = SearchConfig::from_json(
        r#"{"collections": [{"name": "favores", "fields": ["titulo", "descripcion"], "limit": 1}]}"#,
    )
    .unwrap();
    let engine = SearchEngine::new(config).unwrap();
    let store = JsonStore::from_json(SNAPSHOT).unwrap();
    let results = engine.search_global("calculo", &store);
    assert_eq!(results.collections.len(), 1);
    assert_eq!(results.collection("favores").unwrap().results.len(), 1);
}

#[test]
fn test_malformed_snapshot_is_an_error() {
    assert!(JsonStore::from_json(r#"{"favores": 3}"#).is_err());
    assert!(JsonStore::from_json("not json").is_err());
}
