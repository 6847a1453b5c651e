//! User settings for assetdesk
//!
//! Manages export preferences: default format, download directory and the
//! date format used when normalizing record dates.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::DeskPaths;
use crate::error::DeskError;
use crate::export::{ExportFormat, ExportOptions};

/// User settings for assetdesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Format used when `--format` is not given
    #[serde(default)]
    pub default_format: ExportFormat,

    /// Directory exports are written to; `None` means the platform Downloads folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,

    /// Date format preference (strftime format) for locale date strings
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_format: ExportFormat::default(),
            download_dir: None,
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &DeskPaths) -> Result<Self, DeskError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| DeskError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DeskError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DeskPaths) -> Result<(), DeskError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DeskError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DeskError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the directory downloads are written to
    pub fn download_dir(&self, paths: &DeskPaths) -> PathBuf {
        self.download_dir
            .clone()
            .unwrap_or_else(|| paths.default_download_dir())
    }

    /// Projection options derived from these settings
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            date_format: self.date_format.clone(),
        }
    }
}
