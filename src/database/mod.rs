//! Shelfmark database layer.
//!
//! Provides SQLite connection management and schema migrations.
//!
//! # Usage
//!
//! ```no_run
//! use shelfmark::database::Database;
//!
//! let db = Database::open("shelfmark.db").expect("failed to open database");
//! let conn = db.connection();
//! # let _ = conn;
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
