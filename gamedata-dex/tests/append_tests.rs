//! Integration tests for the dataset append round trip
//!
//! Exercises read → append → write against a real file, the way the binary
//! runs, using the shared reader and writer.

use std::fs;
use std::path::Path;

use gamedata_common::fetch::read_json_file;
use gamedata_common::output::write_json_pretty;
use gamedata_dex::model::PokemonRecord;
use gamedata_dex::pipeline::append_gen2;

fn seed_dataset(path: &Path) {
    let gen1 = vec![PokemonRecord {
        id: 25,
        name: "Pikachu".to_string(),
        german_name: "Pikachu".to_string(),
        region: "Kanto".to_string(),
        image_url: None,
    }];
    write_json_pretty(path, &gen1).unwrap();
}

fn run_append(path: &Path) -> usize {
    let existing: Vec<PokemonRecord> = read_json_file(path).unwrap();
    let outcome = append_gen2(existing);
    write_json_pretty(path, &outcome.records).unwrap();
    outcome.added
}

#[test]
fn test_append_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pokemon.json");
    seed_dataset(&path);

    let added = run_append(&path);
    assert_eq!(added, 100);

    let records: Vec<PokemonRecord> = read_json_file(&path).unwrap();
    assert_eq!(records.len(), 101);
    assert_eq!(records[0].name, "Pikachu");

    let ho_oh = records.iter().find(|p| p.id == 250).unwrap();
    assert_eq!(
        ho_oh.image_url.as_deref(),
        Some("https://img.pokemondb.net/artwork/large/ho-oh.jpg")
    );
}

#[test]
fn test_second_run_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pokemon.json");
    seed_dataset(&path);

    run_append(&path);
    let first = fs::read_to_string(&path).unwrap();

    let added = run_append(&path);
    assert_eq!(added, 0);

    let second = fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_camel_case_keys_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pokemon.json");
    seed_dataset(&path);

    run_append(&path);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"germanName\""));
    assert!(content.contains("\"imageUrl\""));
    assert!(!content.contains("\"german_name\""));
}

#[test]
fn test_missing_dataset_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pokemon.json");

    let result: gamedata_common::Result<Vec<PokemonRecord>> = read_json_file(&path);
    assert!(result.is_err());
}
