//! Error types for Reply Scout
//!
//! `Error` covers everything outside the page state machine (settings,
//! URLs, the HTTP client). `FetchError` is the human-readable rendering of
//! a failed page fetch and is what a session exposes as its last error.

use thiserror::Error;

/// The main error type for Reply Scout
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Settings Errors
    // ============================================================================
    #[error("Settings error: {message}")]
    Settings { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a settings error
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }

    /// Check if this error means the endpoint configuration needs fixing
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::MissingConfigField { .. }
                | Error::InvalidConfigValue { .. }
                | Error::InvalidUrl(_)
        )
    }
}

/// Result type alias for Reply Scout
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

// ============================================================================
// Fetch Errors
// ============================================================================

/// Why a page could not be turned into records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Missing endpoint path or subject identifier; no request was sent
    #[error("{message}")]
    Configuration { message: String },

    /// Non-2xx HTTP status
    #[error("API error: HTTP {status}: {body_preview}")]
    Transport { status: u16, body_preview: String },

    /// Body was not the expected JSON envelope
    #[error("Malformed response: {reason}")]
    Malformed { reason: String, markup: bool },

    /// Well-formed envelope without a records list
    #[error("{message}")]
    ServerReported { message: String, code: Option<i64> },

    /// The request never produced an HTTP response
    #[error("Request failed: {message}")]
    Unreachable { message: String },
}

impl FetchError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the operator should be pointed at the endpoint settings
    pub fn suggests_reconfiguration(&self) -> bool {
        match self {
            FetchError::Configuration { .. } => true,
            FetchError::Malformed { markup, .. } => *markup,
            _ => false,
        }
    }
}
