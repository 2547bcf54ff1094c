//! Path management for theology-enroll
//!
//! Provides XDG-compliant path resolution for the settings file and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `THEOLOGY_ENROLL_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/theology-enroll` or `~/.config/theology-enroll`
//! 3. Windows: `%APPDATA%\theology-enroll`

use std::path::PathBuf;

use crate::error::EnrollError;

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "THEOLOGY_ENROLL_DIR";

/// Manages all paths used by theology-enroll
#[derive(Debug, Clone)]
pub struct EnrollPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl EnrollPaths {
    /// Create a new EnrollPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, EnrollError> {
        let base_dir = if let Ok(custom) = std::env::var(BASE_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create EnrollPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/theology-enroll/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the log directory (~/.config/theology-enroll/logs/)
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Name of the log file inside [`Self::log_dir`]
    pub fn log_file_name(&self) -> &'static str {
        "enroll.log"
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), EnrollError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EnrollError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| EnrollError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EnrollError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                EnrollError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("theology-enroll"))
}

/// Resolve the default base directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EnrollError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EnrollError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("theology-enroll"))
}
