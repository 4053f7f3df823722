//! User settings for beerus
//!
//! The settings file is a flat JSON object. The only key most users touch is
//! `database_path`, which locates the bill store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::BeerusPaths;
use crate::error::BeerusError;

/// User settings for beerus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Location of the SQLite bill store. Relative paths are resolved
    /// against the directory holding the settings file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Length of the default `--from` window, in days before today
    #[serde(default = "default_range_days")]
    pub default_range_days: u32,

    /// Width of terminal bar charts, in cells
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

/// Longest accepted default window, about a thousand years
pub const MAX_RANGE_DAYS: u32 = 366_000;

fn default_range_days() -> u32 {
    30
}

fn default_chart_width() -> usize {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            database_path: None,
            currency_symbol: default_currency(),
            default_range_days: default_range_days(),
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BeerusPaths) -> Result<Self, BeerusError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BeerusError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BeerusError::Config(format!(
                    "Failed to parse settings file {}: {}",
                    settings_path.display(),
                    e
                ))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - `init` decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BeerusPaths) -> Result<(), BeerusError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BeerusError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BeerusError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the bill store location
    pub fn database_path(&self, paths: &BeerusPaths) -> PathBuf {
        match &self.database_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => paths.settings_dir().join(path),
            None => paths.default_database_file(),
        }
    }

    fn validate(&self) -> Result<(), BeerusError> {
        if let Some(path) = &self.database_path {
            if path.as_os_str().is_empty() {
                return Err(BeerusError::Config("database_path must not be empty".into()));
            }
        }
        if self.default_range_days > MAX_RANGE_DAYS {
            return Err(BeerusError::Config(format!(
                "default_range_days must be at most {} (got {})",
                MAX_RANGE_DAYS, self.default_range_days
            )));
        }
        if self.chart_width == 0 {
            return Err(BeerusError::Config("chart_width must be at least 1".into()));
        }
        Ok(())
    }
}
