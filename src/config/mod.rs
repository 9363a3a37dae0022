//! User configuration loaded from the platform config directory

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PawTrackError, Result};

/// Minimum username length used when the config does not say otherwise
pub const DEFAULT_USERNAME_MIN_LENGTH: usize = 3;

/// Asset directory used when the config does not say otherwise
pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the bundled images
    pub asset_dir: PathBuf,
    /// Minimum number of characters in a new account's username
    pub username_min_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            username_min_length: DEFAULT_USERNAME_MIN_LENGTH,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "pawtrack", "paw-track")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location, falling back to defaults
    /// when no file exists
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_init(&path),
            None => Ok(Self::default()),
        }
    }

    /// Like [`AppConfig::load_from`], but writes the defaults out when the
    /// file does not exist yet so there is something to edit
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Self::default();
        match config.save_to(path) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default config"),
            Err(e) => tracing::warn!("could not write default config: {}", e),
        }
        Ok(config)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| PawTrackError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config.sanitized())
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| PawTrackError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }

    /// A username must be at least one character long whatever the file says
    fn sanitized(mut self) -> Self {
        self.username_min_length = self.username_min_length.max(1);
        self
    }
}
