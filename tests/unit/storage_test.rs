//! Unit tests for the bookmark storage implementations.
//!
//! `MemoryStorage` and the SQLite-backed `LocalStorage` must behave the same;
//! the shared cases run against both.

use std::sync::Arc;

use tempfile::TempDir;

use shelfmark::database::Database;
use shelfmark::managers::bookmark_storage::{BookmarkStorageTrait, MemoryStorage};
use shelfmark::managers::local_storage::LocalStorage;
use shelfmark::types::errors::StorageError;

fn local() -> LocalStorage {
    let db = Arc::new(Database::open_in_memory().expect("open_in_memory failed"));
    LocalStorage::new(db, "bookmarks")
}

fn exercise_crud<S: BookmarkStorageTrait>(mut storage: S) {
    assert!(storage.fetch().unwrap().is_empty());
    assert_eq!(storage.fetch_last().unwrap(), None);

    storage.insert("https://a.com").unwrap();
    storage.insert("https://b.com").unwrap();
    storage.insert("https://c.com").unwrap();
    assert_eq!(storage.fetch_last().unwrap().as_deref(), Some("https://c.com"));

    storage.update(1, "https://bb.com").unwrap();
    assert_eq!(
        storage.fetch().unwrap(),
        vec!["https://a.com", "https://bb.com", "https://c.com"]
    );

    storage.delete(0).unwrap();
    assert_eq!(storage.fetch().unwrap(), vec!["https://bb.com", "https://c.com"]);

    let err = storage.delete(5).unwrap_err();
    assert!(matches!(err, StorageError::PositionOutOfRange { position: 5, len: 2 }));
    let err = storage.update(2, "https://z.com").unwrap_err();
    assert!(matches!(err, StorageError::PositionOutOfRange { position: 2, len: 2 }));
}

#[test]
fn test_memory_storage_crud() {
    exercise_crud(MemoryStorage::new());
}

#[test]
fn test_local_storage_crud() {
    exercise_crud(local());
}

#[test]
fn test_memory_storage_with_bookmarks() {
    let storage = MemoryStorage::with_bookmarks(["https://a.com", "https://b.com"]);
    assert_eq!(storage.len(), 2);
    assert!(!storage.is_empty());
    assert_eq!(storage.fetch_last().unwrap().as_deref(), Some("https://b.com"));
}

#[test]
fn test_local_storage_keys_are_isolated() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut work = LocalStorage::new(db.clone(), "work");
    let home = LocalStorage::new(db, "home");

    work.insert("https://a.com").unwrap();
    assert_eq!(work.key(), "work");
    assert_eq!(work.fetch().unwrap().len(), 1);
    assert!(home.fetch().unwrap().is_empty());
}

#[test]
fn test_local_storage_persists_across_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bookmarks.db");

    {
        let db = Arc::new(Database::open(&path).unwrap());
        let mut storage = LocalStorage::new(db, "bookmarks");
        storage.insert("https://a.com").unwrap();
        storage.insert("https://b.com").unwrap();
    }

    let db = Arc::new(Database::open(&path).unwrap());
    let storage = LocalStorage::new(db, "bookmarks");
    assert_eq!(storage.fetch().unwrap(), vec!["https://a.com", "https://b.com"]);
}

#[test]
fn test_local_storage_stores_json_array() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut storage = LocalStorage::new(db.clone(), "bookmarks");
    storage.insert("https://a.com").unwrap();

    let raw: String = db
        .connection()
        .query_row("SELECT value FROM kv_store WHERE key = 'bookmarks'", [], |row| row.get(0))
        .unwrap();
    assert_eq!(raw, r#"["https://a.com"]"#);
}

#[test]
fn test_local_storage_corrupt_value_is_serialization_error() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    db.connection()
        .execute("INSERT INTO kv_store (key, value) VALUES ('bookmarks', 'not json')", [])
        .unwrap();
    let storage = LocalStorage::new(db, "bookmarks");
    assert!(matches!(
        storage.fetch().unwrap_err(),
        StorageError::SerializationError(_)
    ));
}
