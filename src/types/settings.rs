use serde::{Deserialize, Serialize};

/// Default number of bookmarks shown per index page.
pub const DEFAULT_PER_PAGE: usize = 20;

/// Persisted application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Bookmarks per index page. Must be at least 1.
    pub per_page: usize,
    /// Key under which the bookmark collection is stored.
    pub storage_key: String,
    /// File name of the SQLite database inside the data directory.
    pub database_file: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            storage_key: "bookmarks".to_string(),
            database_file: "shelfmark.db".to_string(),
        }
    }
}
