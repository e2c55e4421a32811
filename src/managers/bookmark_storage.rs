//! Bookmark storage contract.
//!
//! The collection is an ordered list of URL strings addressed by position.
//! Positions are only valid until the next insert or delete.

use log::debug;

use crate::types::errors::StorageError;

/// Trait defining the storage operations the controller relies on.
pub trait BookmarkStorageTrait {
    /// Snapshot of the full collection in insertion order.
    fn fetch(&self) -> Result<Vec<String>, StorageError>;
    /// The most recently inserted bookmark, if any.
    fn fetch_last(&self) -> Result<Option<String>, StorageError>;
    fn insert(&mut self, url: &str) -> Result<(), StorageError>;
    fn update(&mut self, position: usize, url: &str) -> Result<(), StorageError>;
    fn delete(&mut self, position: usize) -> Result<(), StorageError>;
}

/// Replaces the bookmark at `position` inside an in-memory collection.
pub(crate) fn update_in(bookmarks: &mut [String], position: usize, url: &str) -> Result<(), StorageError> {
    let len = bookmarks.len();
    let slot = bookmarks
        .get_mut(position)
        .ok_or(StorageError::PositionOutOfRange { position, len })?;
    *slot = url.to_string();
    Ok(())
}

/// Removes the bookmark at `position`, shifting later bookmarks down by one.
pub(crate) fn delete_in(bookmarks: &mut Vec<String>, position: usize) -> Result<(), StorageError> {
    if position >= bookmarks.len() {
        return Err(StorageError::PositionOutOfRange {
            position,
            len: bookmarks.len(),
        });
    }
    bookmarks.remove(position);
    Ok(())
}

/// Vec-backed storage for tests and the console demo.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    bookmarks: Vec<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with `urls` in order.
    pub fn with_bookmarks<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bookmarks: urls.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}

impl BookmarkStorageTrait for MemoryStorage {
    fn fetch(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.bookmarks.clone())
    }

    fn fetch_last(&self) -> Result<Option<String>, StorageError> {
        Ok(self.bookmarks.last().cloned())
    }

    fn insert(&mut self, url: &str) -> Result<(), StorageError> {
        debug!("memory storage: insert at {}", self.bookmarks.len());
        self.bookmarks.push(url.to_string());
        Ok(())
    }

    fn update(&mut self, position: usize, url: &str) -> Result<(), StorageError> {
        update_in(&mut self.bookmarks, position, url)
    }

    fn delete(&mut self, position: usize) -> Result<(), StorageError> {
        delete_in(&mut self.bookmarks, position)
    }
}
