//! Settings types
//!
//! These types are serialized to JSON and persisted between runs.

use crate::error::{Error, Result};
use crate::types::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Origin requests resolve against when none is configured
pub const DEFAULT_ORIGIN: &str = "http://localhost";

/// Where the comment-history endpoint lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSettings {
    /// Upstream host. Persisted for reference only: requests always go
    /// through `origin` so the local reverse proxy can intercept them.
    #[serde(default)]
    pub host: String,

    /// Endpoint path, e.g. "/v1/replies"
    #[serde(default)]
    pub path: String,

    /// Origin the path is resolved against
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            host: String::new(),
            path: String::new(),
            origin: default_origin(),
        }
    }
}

impl EndpointSettings {
    /// Create endpoint settings for a path on the default origin
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the origin
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Clean up user input: no trailing slash on host, leading slash on path
    #[must_use]
    pub fn normalized(self) -> Self {
        let host = self.host.trim().trim_end_matches('/').to_string();
        let path = self.path.trim();
        let path = if path.is_empty() || path.starts_with('/') || path.contains("://") {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let origin = self.origin.trim().trim_end_matches('/').to_string();
        let origin = if origin.is_empty() {
            default_origin()
        } else {
            origin
        };

        Self { host, path, origin }
    }

    /// Whether a path has been configured
    pub fn is_configured(&self) -> bool {
        !self.path.trim().is_empty()
    }
}

/// Complete persisted settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub endpoint: EndpointSettings,

    /// Records requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout in seconds; no timeout when absent
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Subject identifier of the most recent query
    #[serde(default)]
    pub last_subject_id: Option<String>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: EndpointSettings::default(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: None,
            last_subject_id: None,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Check values that would make every request fail
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be greater than 0"));
        }
        if self.timeout_secs == Some(0) {
            return Err(Error::invalid_value(
                "timeout_secs",
                "must be greater than 0 when set",
            ));
        }
        Ok(())
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
