//! Path management for assetdesk
//!
//! ## Path Resolution Order
//!
//! 1. `ASSETDESK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/assetdesk` on Linux, `~/Library/Application Support/assetdesk`
//!    on macOS, `%APPDATA%\assetdesk` on Windows)

use std::path::PathBuf;

use directories::{ProjectDirs, UserDirs};

use crate::error::DeskError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ASSETDESK_DATA_DIR";

/// Manages all paths used by assetdesk
#[derive(Debug, Clone)]
pub struct DeskPaths {
    /// Base directory for settings and default exports
    base_dir: PathBuf,
}

impl DeskPaths {
    /// Create a new DeskPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, DeskError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "assetdesk")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    DeskError::Config("Could not determine a home directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create DeskPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Fallback export directory inside the base directory
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Resolve where downloads land when no directory is configured.
    ///
    /// Prefers the user's Downloads folder, falling back to [`Self::exports_dir`].
    /// The env override pins everything under the base directory.
    pub fn default_download_dir(&self) -> PathBuf {
        if std::env::var_os(DATA_DIR_ENV).is_some() {
            return self.exports_dir();
        }

        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
            .unwrap_or_else(|| self.exports_dir())
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DeskError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DeskError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if assetdesk has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.exports_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DeskPaths::with_base_dir(temp_dir.path().join("nested").join("desk"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(!paths.is_initialized());
    }
}
