//! Shelfmark: a paginated bookmark manager driven by a location hash.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod components;
pub mod controller;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
