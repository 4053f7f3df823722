//! Path management for beerus
//!
//! ## Path Resolution Order
//!
//! 1. `BEERUS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/beerus` or `~/.config/beerus`
//! 3. Windows: `%APPDATA%\beerus`

use std::path::{Path, PathBuf};

use crate::error::BeerusError;

/// Manages the paths used by beerus
#[derive(Debug, Clone)]
pub struct BeerusPaths {
    /// Base directory for beerus configuration and data
    base_dir: PathBuf,
    /// Explicit settings file, overriding `<base>/config.json`
    settings_override: Option<PathBuf>,
}

impl BeerusPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BeerusError> {
        let base_dir = if let Ok(custom) = std::env::var("BEERUS_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self {
            base_dir,
            settings_override: None,
        })
    }

    /// Create BeerusPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            settings_override: None,
        }
    }

    /// Use an explicit settings file instead of `<base>/config.json`
    pub fn with_settings_file(mut self, path: PathBuf) -> Self {
        self.settings_override = Some(path);
        self
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.settings_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join("config.json"))
    }

    /// Directory that relative paths inside the settings file are resolved against
    pub fn settings_dir(&self) -> PathBuf {
        self.settings_file()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.base_dir.clone())
    }

    /// Default location of the bill store
    pub fn default_database_file(&self) -> PathBuf {
        self.base_dir.join("bills.db")
    }

    /// Ensure the base directory and the settings file's directory exist
    pub fn ensure_directories(&self) -> Result<(), BeerusError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BeerusError::Io(format!("Failed to create base directory: {}", e)))?;

        let settings_dir = self.settings_dir();
        if !settings_dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&settings_dir).map_err(|e| {
                BeerusError::Io(format!("Failed to create settings directory: {}", e))
            })?;
        }

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BeerusError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                BeerusError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("beerus"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BeerusError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BeerusError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("beerus"))
}
