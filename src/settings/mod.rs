//! Settings module
//!
//! Persisted endpoint configuration and the last-used subject identifier.
//!
//! # Overview
//!
//! The settings module provides:
//! - `Settings` / `EndpointSettings` - The persisted JSON document
//! - `SettingsStore` - File-based persistence with atomic writes

mod store;
mod types;

pub use store::SettingsStore;
pub use types::{EndpointSettings, Settings, DEFAULT_ORIGIN};

#[cfg(test)]
mod store_tests;
