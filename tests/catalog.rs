//! Catalog loading: endpoint payload decoding, the raw dataset file, and the
//! worker round trip that serves dataset loads.

use std::io::Write;

use dexplorer::catalog::{decode_collection, CatalogSource, JsonCatalog};
use dexplorer::worker::{CatalogWorker, WorkerMessage, WorkerResponse};
use dexplorer::DexError;
use tempfile::NamedTempFile;

const DATASET: &str = r##"[
  {
    "#": 1, "Name": "Bulbasaur", "Type 1": "Grass", "Type 2": "Poison",
    "HP": 45, "Attack": 49, "Defense": 49, "Sp. Atk": 65, "Sp. Def": 65,
    "Speed": 45, "Generation": 1, "Legendary": false,
    "height": 0.7, "weight": 6.9, "base_experience": 64,
    "sprites": "{'normal': 'bulbasaur.png', 'animated': 'bulbasaur.gif'}"
  },
  {
    "#": 4, "Name": "Charmander", "Type 1": "Fire", "Type 2": "Normal",
    "HP": 39, "Attack": 52, "Defense": 43, "Sp. Atk": 60, "Sp. Def": 50,
    "Speed": 65, "Generation": 1, "Legendary": false,
    "sprites": "not a sprite dict"
  },
  {
    "#": 150, "Name": "Mewtwo", "Type 1": "Psychic", "Type 2": "",
    "HP": 106, "Attack": 110, "Defense": 90, "Sp. Atk": 154, "Sp. Def": 90,
    "Speed": 130, "Generation": 1, "Legendary": true
  }
]"##;

fn dataset_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn dataset_rows_become_records() {
    let file = dataset_file(DATASET);
    let catalog = JsonCatalog::open(file.path()).unwrap();
    let records = catalog.load_all().unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "Bulbasaur");
    assert_eq!(records[0].type2.as_deref(), Some("Poison"));
    assert_eq!(records[0].sprites.detail_url(), "bulbasaur.gif");
    assert_eq!(records[0].sprites.list_url(), "bulbasaur.png");
    assert!((records[0].weight - 6.9).abs() < f64::EPSILON);
    assert!(records[2].legendary);
}

#[test]
fn normal_and_blank_secondary_types_are_dropped() {
    let file = dataset_file(DATASET);
    let records = JsonCatalog::open(file.path()).unwrap().load_all().unwrap();

    assert!(records[1].type2.is_none());
    assert!(records[2].type2.is_none());
}

#[test]
fn unparsable_sprite_text_yields_empty_urls() {
    let file = dataset_file(DATASET);
    let charmander = JsonCatalog::open(file.path()).unwrap().get_by_id(4).unwrap().unwrap();

    assert_eq!(charmander.name, "Charmander");
    assert_eq!(charmander.sprites.list_url(), "");
    assert_eq!(charmander.sprites.detail_url(), "");
}

#[test]
fn lookup_of_a_missing_id_is_none() {
    let file = dataset_file(DATASET);
    let catalog = JsonCatalog::open(file.path()).unwrap();
    assert!(catalog.get_by_id(999).unwrap().is_none());
}

#[test]
fn missing_dataset_is_an_io_error() {
    let err = JsonCatalog::open("/nonexistent/pokemon.json").unwrap_err();
    assert!(matches!(err, DexError::Io(_)));
}

#[test]
fn malformed_dataset_is_a_catalog_error() {
    let file = dataset_file(r#"{"not": "a list"}"#);
    let err = JsonCatalog::open(file.path()).unwrap_err();
    assert!(matches!(err, DexError::Catalog(_)));
}

#[test]
fn collection_payload_decodes_in_order() {
    let body = br#"[
        {"id": 7, "name": "Squirtle", "type1": "Water", "type2": null,
         "hp": 44, "attack": 48, "defense": 65, "sp_atk": 50, "sp_def": 64, "speed": 43,
         "sprites": {"normal": "s.png", "animated": ""}},
        {"id": 1, "name": "Bulbasaur", "type1": "Grass", "type2": "Poison",
         "hp": 45, "attack": 49, "defense": 49, "sp_atk": 65, "sp_def": 65, "speed": 45,
         "sprites": "{'normal': 'b.png', 'animated': 'b.gif'}"}
    ]"#;

    let records = decode_collection(200, body).unwrap();
    let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![7, 1]);
    assert_eq!(records[0].sprites.detail_url(), "s.png");
    assert_eq!(records[1].sprites.detail_url(), "b.gif");
}

#[test]
fn unusable_later_records_are_skipped() {
    let body = br#"[
        {"id": 1, "name": "Bulbasaur", "type1": "Grass",
         "hp": 45, "attack": 49, "defense": 49, "sp_atk": 65, "sp_def": 65, "speed": 45},
        {"id": 2, "type1": "Grass", "hp": 60},
        {"id": 3, "name": "", "type1": "Grass"},
        "not a record"
    ]"#;

    let records = decode_collection(200, body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Bulbasaur");
}

#[test]
fn null_numeric_fields_read_as_zero() {
    let body = br#"[
        {"id": 25, "name": "Pikachu", "type1": "Electric", "hp": 35,
         "base_experience": null, "height": null, "legendary": null, "speed": null}
    ]"#;

    let records = decode_collection(200, body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].hp, 35);
    assert_eq!(records[0].base_experience, 0);
    assert_eq!(records[0].speed, 0);
    assert!(!records[0].legendary);
}

#[test]
fn payload_must_be_a_list() {
    let err = decode_collection(200, br#"{"id": 1, "name": "Bulbasaur"}"#).unwrap_err();
    assert!(matches!(err, DexError::InvalidPayload(_)));

    let err = decode_collection(200, b"<html>").unwrap_err();
    assert!(matches!(err, DexError::InvalidPayload(_)));
}

#[test]
fn first_record_needs_name_and_id() {
    let nameless = br#"[{"id": 1, "name": "", "type1": "Grass",
        "hp": 1, "attack": 1, "defense": 1, "sp_atk": 1, "sp_def": 1, "speed": 1}]"#;
    assert!(matches!(
        decode_collection(200, nameless),
        Err(DexError::InvalidPayload(_))
    ));

    let idless = br#"[{"name": "Bulbasaur", "type1": "Grass"}]"#;
    assert!(matches!(
        decode_collection(200, idless),
        Err(DexError::InvalidPayload(_))
    ));
}

#[test]
fn error_status_is_reported() {
    let err = decode_collection(503, b"").unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! Status: 503");
}

#[test]
fn worker_serves_dataset_loads() {
    let file = dataset_file(DATASET);
    let mut worker = CatalogWorker::default();

    let response = worker.handle_message(WorkerMessage::LoadCatalog {
        path: file.path().to_path_buf(),
        trace_context: None,
    });

    let WorkerResponse::CatalogLoaded { records } = response else {
        panic!("expected records, got {response:?}");
    };
    assert_eq!(records.len(), 3);
}

#[test]
fn worker_reports_load_failures() {
    let mut worker = CatalogWorker::default();
    let response = worker.handle_message(WorkerMessage::LoadCatalog {
        path: "/nonexistent/pokemon.json".into(),
        trace_context: None,
    });

    let WorkerResponse::Error { message } = response else {
        panic!("expected an error, got {response:?}");
    };
    assert!(message.starts_with("Error loading data:"));
}

#[test]
fn worker_payloads_round_trip_as_json() {
    let file = dataset_file(DATASET);
    let mut worker = CatalogWorker::default();

    let request = serde_json::to_string(&WorkerMessage::LoadCatalog {
        path: file.path().to_path_buf(),
        trace_context: None,
    })
    .unwrap();

    let reply = worker.handle_payload(&request).unwrap();
    let response: WorkerResponse = serde_json::from_str(&reply).unwrap();
    assert!(matches!(response, WorkerResponse::CatalogLoaded { records } if records.len() == 3));

    assert!(worker.handle_payload("not json").is_none());
}
