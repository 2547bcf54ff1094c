//! User settings for theology-enroll
//!
//! Holds the submission endpoint, the optional request timeout, the support
//! contact shown when a submission fails, and the default log filter.

use serde::{Deserialize, Serialize};

use super::paths::EnrollPaths;
use crate::error::EnrollError;

/// Spreadsheet script endpoint receiving the registrations
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbx6JyT6sHqkghFVwYHxIFsrErY1VlT5FtEBCcsSHXfkYJgfbs5ujyzNxBl5l54xmtc1HQ/exec";

/// User settings for theology-enroll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Endpoint the registration is sent to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds; `None` keeps the HTTP client default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Who to contact when the registration could not be sent
    #[serde(default = "default_support_contact")]
    pub support_contact: String,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_support_contact() -> String {
    "Contate Rodrigo Lima em 84 98153-0203.".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            endpoint: default_endpoint(),
            request_timeout_secs: None,
            support_contact: default_support_contact(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &EnrollPaths) -> Result<Self, EnrollError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                EnrollError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                EnrollError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EnrollPaths) -> Result<(), EnrollError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            EnrollError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            EnrollError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Replace the endpoint when a CLI/env override was given
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }
}
