//! SQLite-backed bookmark storage.
//!
//! Mirrors browser `localStorage`: the whole collection is one JSON array
//! stored under a single key in the `kv_store` table. Every mutation is a
//! read-modify-write of that array.

use std::sync::Arc;

use log::debug;
use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::managers::bookmark_storage::{delete_in, update_in, BookmarkStorageTrait};
use crate::types::errors::StorageError;

/// Bookmark storage persisted in the application database.
pub struct LocalStorage {
    db: Arc<Database>,
    key: String,
}

impl LocalStorage {
    /// Creates storage that keeps the collection under `key`.
    pub fn new(db: Arc<Database>, key: &str) -> Self {
        Self {
            db,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads and decodes the stored array. A missing key is an empty collection.
    fn read(&self) -> Result<Vec<String>, StorageError> {
        let raw: Option<String> = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn write(&self, bookmarks: &[String]) -> Result<(), StorageError> {
        let json = serde_json::to_string(bookmarks)?;
        self.db.connection().execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![self.key, json],
        )?;
        debug!("local storage '{}': wrote {} bookmarks", self.key, bookmarks.len());
        Ok(())
    }
}

impl BookmarkStorageTrait for LocalStorage {
    fn fetch(&self) -> Result<Vec<String>, StorageError> {
        self.read()
    }

    fn fetch_last(&self) -> Result<Option<String>, StorageError> {
        Ok(self.read()?.pop())
    }

    fn insert(&mut self, url: &str) -> Result<(), StorageError> {
        let mut bookmarks = self.read()?;
        bookmarks.push(url.to_string());
        self.write(&bookmarks)
    }

    fn update(&mut self, position: usize, url: &str) -> Result<(), StorageError> {
        let mut bookmarks = self.read()?;
        update_in(&mut bookmarks, position, url)?;
        self.write(&bookmarks)
    }

    fn delete(&mut self, position: usize) -> Result<(), StorageError> {
        let mut bookmarks = self.read()?;
        delete_in(&mut bookmarks, position)?;
        self.write(&bookmarks)
    }
}
