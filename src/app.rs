//! App Core for Shelfmark.
//!
//! Holds the database, the settings engine and the controller, and manages
//! startup and shutdown.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use log::{info, warn};

use crate::controller::AppController;
use crate::database::Database;
use crate::managers::local_storage::LocalStorage;
use crate::platform;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::AppError;
use crate::types::route::Route;
use crate::types::settings::AppSettings;

pub struct App {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    pub controller: AppController<LocalStorage>,
}

impl App {
    /// Opens the database at `db_path` using settings from the platform
    /// config directory.
    pub fn new(db_path: &str) -> Result<Self, AppError> {
        Self::with_settings(db_path, SettingsEngine::new(None))
    }

    /// Opens the database at `db_path` with an explicit settings engine.
    ///
    /// Unreadable settings are logged and replaced by defaults.
    pub fn with_settings(db_path: &str, mut settings_engine: SettingsEngine) -> Result<Self, AppError> {
        let settings = load_or_default(&mut settings_engine);
        let db = Arc::new(Database::open(db_path)?);
        let storage = LocalStorage::new(db.clone(), &settings.storage_key);
        let controller = AppController::new(storage, settings.per_page);

        Ok(Self {
            db,
            settings_engine,
            controller,
        })
    }

    /// Opens the database named in the settings inside the platform data directory.
    pub fn open_default() -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(None);
        let settings = load_or_default(&mut settings_engine);
        let db_path = default_db_path(&settings)?;
        Self::with_settings(&db_path.to_string_lossy(), settings_engine)
    }

    /// Renders the initial view, the index page at page 1.
    pub fn startup(&mut self) -> Result<(), AppError> {
        info!(
            "starting with {} bookmarks per page",
            self.controller.per_page()
        );
        self.controller.navigate(Route::default())?;
        Ok(())
    }

    /// Updates a setting and applies it to the running controller.
    pub fn set_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), AppError> {
        self.settings_engine.set_value(key, value)?;
        let per_page = self.settings_engine.get_settings().per_page;
        if per_page != self.controller.per_page() {
            self.controller.set_per_page(per_page)?;
        }
        Ok(())
    }

    pub fn shutdown(&mut self) {
        info!("shutting down at {}", self.controller.route());
    }
}

fn load_or_default(engine: &mut SettingsEngine) -> AppSettings {
    match engine.load() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("using default settings: {}", e);
            AppSettings::default()
        }
    }
}

/// Database location inside the platform data directory, created if missing.
pub fn default_db_path(settings: &AppSettings) -> Result<PathBuf, AppError> {
    let dir = platform::get_data_dir();
    fs::create_dir_all(&dir)
        .map_err(|e| AppError::Database(format!("Failed to create data directory: {}", e)))?;
    Ok(dir.join(&settings.database_file))
}
