// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

fn set(ids: &[u64]) -> BTreeSet<u64> {
    ids.iter().copied().collect()
}

#[test]
fn save_then_load_returns_same_set() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");

    for ids in [set(&[]), set(&[1]), set(&[1_234_567, 42, 7, 1_000_000])] {
        save_snapshot(&path, &ids).unwrap();
        assert_eq!(load_snapshot(&path).unwrap(), ids);
    }
}

#[test]
fn saved_file_is_ascending_json_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");

    save_snapshot(&path, &set(&[30, 10, 20])).unwrap();

    let parsed: Vec<u64> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, vec![10, 20, 30]);
}

#[test]
fn save_replaces_previous_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");

    save_snapshot(&path, &set(&[1, 2, 3])).unwrap();
    save_snapshot(&path, &set(&[4])).unwrap();

    assert_eq!(load_snapshot(&path).unwrap(), set(&[4]));
}

#[test]
fn load_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = load_snapshot(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::SnapshotRead { .. }));
}

#[test]
fn load_malformed_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(&path, r#"{"bugs": [1, 2]}"#).unwrap();

    let err = load_snapshot(&path).unwrap_err();
    assert!(matches!(err, Error::SnapshotRead { .. }));
}

#[test]
fn load_rejects_negative_numbers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(&path, "[1, -2]").unwrap();

    assert!(load_snapshot(&path).is_err());
}

#[test]
fn save_into_missing_directory_is_write_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("snapshot.json");

    let err = save_snapshot(&path, &set(&[1])).unwrap_err();
    assert!(matches!(err, Error::SnapshotWrite { .. }));
}

#[test]
fn file_store_delegates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    let store = FileSnapshotStore;

    store.save(&path, &set(&[5, 6])).unwrap();
    assert_eq!(store.load(&path).unwrap(), set(&[5, 6]));
}
