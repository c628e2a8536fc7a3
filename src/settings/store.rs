//! Settings store implementation
//!
//! Provides file-based settings persistence with atomic writes.

use super::types::{EndpointSettings, Settings};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Directory under the platform config dir
const APP_DIR: &str = "reply-scout";

/// Settings file name
const FILE_NAME: &str = "settings.json";

/// Store for persisting and loading settings
#[derive(Debug)]
pub struct SettingsStore {
    /// Path to the settings file
    path: PathBuf,
    /// Current settings (cached)
    settings: Arc<RwLock<Settings>>,
}

impl SettingsStore {
    /// Create a store for the given path, starting from defaults
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            settings: Arc::new(RwLock::new(Settings::new())),
        }
    }

    /// Create an in-memory store (no file persistence)
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            settings: Arc::new(RwLock::new(Settings::new())),
        }
    }

    /// Create a store with the given settings, not backed by a file
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            path: PathBuf::new(),
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    /// Default settings file location
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::settings("Could not determine the config directory"))?;
        Ok(dir.join(APP_DIR).join(FILE_NAME))
    }

    /// Create a store from a file, loading existing settings if present
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self::new(path);
        store.load().await?;
        Ok(store)
    }

    /// Load settings from file
    pub async fn load(&self) -> Result<()> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(());
        }

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::Settings {
                message: format!("Failed to read settings file: {e}"),
            })?;

        let loaded = parse(&contents)?;
        *self.settings.write().await = loaded;

        Ok(())
    }

    /// Save current settings to file
    pub async fn save(&self) -> Result<()> {
        if self.is_in_memory() {
            return Ok(());
        }

        let contents = {
            let settings = self.settings.read().await;
            serde_json::to_string_pretty(&*settings).map_err(|e| Error::Settings {
                message: format!("Failed to serialize settings: {e}"),
            })?
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Error::Settings {
                        message: format!("Failed to create settings directory: {e}"),
                    })?;
            }
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents)
            .await
            .map_err(|e| Error::Settings {
                message: format!("Failed to write settings file: {e}"),
            })?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Error::Settings {
                message: format!("Failed to rename settings file: {e}"),
            })?;

        Ok(())
    }

    /// Snapshot of the current settings
    pub async fn settings(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Replace the endpoint configuration and save
    pub async fn set_endpoint(&self, endpoint: EndpointSettings) -> Result<()> {
        self.settings.write().await.endpoint = endpoint.normalized();
        self.save().await
    }

    /// Apply an arbitrary update, validate, and save
    pub async fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Settings),
    {
        {
            let mut settings = self.settings.write().await;
            let mut updated = settings.clone();
            f(&mut updated);
            updated.endpoint = updated.endpoint.normalized();
            updated.validate()?;
            *settings = updated;
        }
        self.save().await
    }

    /// Last subject identifier a query was started for
    pub async fn last_subject_id(&self) -> Option<String> {
        self.settings.read().await.last_subject_id.clone()
    }

    /// Remember the subject identifier of a query and save
    pub async fn remember_subject(&self, subject_id: &str) -> Result<()> {
        {
            let mut settings = self.settings.write().await;
            if settings.last_subject_id.as_deref() == Some(subject_id) {
                return Ok(());
            }
            settings.last_subject_id = Some(subject_id.to_string());
        }
        self.save().await
    }

    /// Get the settings file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if using in-memory mode
    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str().is_empty()
    }
}

impl Clone for SettingsStore {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            settings: Arc::clone(&self.settings),
        }
    }
}

fn parse(contents: &str) -> Result<Settings> {
    let settings: Settings = serde_json::from_str(contents).map_err(|e| Error::Settings {
        message: format!("Failed to parse settings file: {e}"),
    })?;
    settings.validate()?;
    Ok(settings)
}
