//! File-backed key-value store.

use std::fs;
use zoneboard::storage::{FileStore, KeyValueStore};

#[test]
fn test_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("store.json");

    let store = FileStore::open(&path).unwrap();
    store.set("polygons", r#"["0,0 1,0 0,1"]"#).unwrap();
    store.set("workZoneScale", "2").unwrap();
    store.remove("workZoneScale").unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(
        reopened.get("polygons").unwrap().as_deref(),
        Some(r#"["0,0 1,0 0,1"]"#)
    );
    assert_eq!(reopened.get("workZoneScale").unwrap(), None);
}

#[test]
fn test_malformed_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "[1, 2, 3").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("polygons").unwrap(), None);

    // The next write replaces the broken file
    store.set("polygons", "[]").unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["polygons"], "[]");
}

#[test]
fn test_no_temp_files_left_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    let store = FileStore::open(&path).unwrap();
    for i in 0..5 {
        store.set("k", &i.to_string()).unwrap();
    }

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
