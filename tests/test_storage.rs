//! Integration tests for address book persistence.

mod fixtures;

use contact_book::storage::{BookSnapshot, SNAPSHOT_VERSION};
use contact_book::{AddressBook, BookStore, JsonFileStore, MemoryStore, StorageError};
use fixtures::*;
use std::fs;

#[test]
fn test_json_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("addressbook.json"));

    let book = sample_book();
    store.save(&book).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, book);
    assert_eq!(loaded.to_string(), book.to_string());
}

#[test]
fn test_json_store_missing_file_is_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("never-saved.json"));
    assert_eq!(store.load().unwrap(), AddressBook::new());
}

#[test]
fn test_json_store_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("addressbook.json"));

    store.save(&sample_book()).unwrap();

    let mut smaller = store.load().unwrap();
    smaller.delete("Alice").unwrap();
    store.save(&smaller).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.find("Alice").is_none());
}

#[test]
fn test_json_store_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    let store = JsonFileStore::new(&path);

    let book = AddressBook::from_contacts([sample_contact("Alice", &["0501234567"])]).unwrap();
    store.save(&book).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["version"], SNAPSHOT_VERSION);
    assert_eq!(json["contacts"][0]["name"], "Alice");
    assert_eq!(json["contacts"][0]["phones"][0], "0501234567");
}

#[test]
fn test_json_store_rejects_duplicate_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(
        &path,
        r#"{"version":1,"contacts":[{"name":"Alice","phones":[]},{"name":"Alice","phones":[]}]}"#,
    )
    .unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::Corrupt(_)));
}

#[test]
fn test_json_store_rejects_invalid_birthday() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(
        &path,
        r#"{"version":1,"contacts":[{"name":"Alice","birthday":"1990-11-05"}]}"#,
    )
    .unwrap();

    assert!(matches!(
        JsonFileStore::new(&path).load(),
        Err(StorageError::Json(_))
    ));
}

#[test]
fn test_memory_store_matches_json_store() {
    let store = MemoryStore::new();
    let book = sample_book();
    store.save(&book).unwrap();
    assert_eq!(store.load().unwrap(), book);
}

#[test]
fn test_snapshot_preserves_phone_order_and_duplicates() {
    let book = sample_book();
    let snapshot = BookSnapshot::capture(&book);
    let bob = &snapshot.contacts[1];
    assert_eq!(bob.phones().len(), 2);
    assert_eq!(snapshot.restore().unwrap(), book);
}
