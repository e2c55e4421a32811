// Shelfmark shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod page;
pub mod route;
pub mod settings;
