//! Integration tests for the JSON output writer
//!
//! Verifies the on-disk contract the games rely on:
//! - 2-space indentation
//! - non-ASCII characters written verbatim (not \u escaped)
//! - atomic replace (no .tmp residue, previous content fully replaced)

use std::fs;

use serde::Serialize;

use gamedata_common::output::write_json_pretty;

#[derive(Serialize)]
struct Entry {
    id: String,
    country_de: String,
}

fn sample_entries() -> Vec<Entry> {
    vec![
        Entry {
            id: "AT".to_string(),
            country_de: "Österreich".to_string(),
        },
        Entry {
            id: "CI".to_string(),
            country_de: "Elfenbeinküste".to_string(),
        },
    ]
}

#[test]
fn test_two_space_indentation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geo.json");

    write_json_pretty(&path, &sample_entries()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("[\n  {\n    \"id\""), "unexpected layout:\n{}", content);
}

#[test]
fn test_non_ascii_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geo.json");

    write_json_pretty(&path, &sample_entries()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Österreich"));
    assert!(content.contains("Elfenbeinküste"));
    assert!(!content.contains("\\u"), "non-ASCII must not be escaped");
}

#[test]
fn test_no_tmp_residue() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geo.json");

    write_json_pretty(&path, &sample_entries()).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["geo.json".to_string()]);
}

#[test]
fn test_overwrite_replaces_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geo.json");

    write_json_pretty(&path, &sample_entries()).unwrap();
    let first = fs::read_to_string(&path).unwrap();

    let smaller = vec![Entry {
        id: "CH".to_string(),
        country_de: "Schweiz".to_string(),
    }];
    write_json_pretty(&path, &smaller).unwrap();

    let second = fs::read_to_string(&path).unwrap();
    assert_ne!(first, second);
    assert!(second.contains("Schweiz"));
    assert!(!second.contains("Österreich"), "old content must be gone");
}

#[test]
fn test_creates_missing_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("geo.json");

    write_json_pretty(&path, &sample_entries()).unwrap();
    assert!(path.exists());
}
