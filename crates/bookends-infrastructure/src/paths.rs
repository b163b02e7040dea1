//! Unified path management for bookends files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/bookends/          # Config directory
//! ├── config.toml              # Application configuration
//! ├── theme.toml               # Light/dark application theme
//! └── logs/                    # Application logs
//!     └── bookends.log.YYYY-MM-DD
//!
//! ~/.local/share/bookends/     # Data directory (overridable)
//! └── media/                   # One record per journal
//!     └── <journal_id>.toml
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "bookends";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform directory could not be determined.
    HomeDirNotFound,
    /// Journal id cannot be used as a file name.
    InvalidKey(String),
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
            PathError::InvalidKey(key) => write!(f, "Invalid storage key: '{}'", key),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for bookends_core::BookendsError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::HomeDirNotFound => Self::config(err.to_string()),
            PathError::InvalidKey(_) => Self::data_access(err.to_string()),
        }
    }
}

/// Path resolution for bookends.
///
/// `data_dir_override` comes from `[storage] data_dir` in the config file.
#[derive(Debug, Clone, Default)]
pub struct BookendsPaths {
    data_dir_override: Option<PathBuf>,
}

impl BookendsPaths {
    pub fn new(data_dir_override: Option<PathBuf>) -> Self {
        Self { data_dir_override }
    }

    /// Returns the bookends configuration directory (e.g. `~/.config/bookends/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the data directory, honouring the configured override.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(dir) = &self.data_dir_override {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn theme_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("theme.toml"))
    }

    pub fn media_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("media"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }

    /// Where exported themes go when no directory is configured.
    ///
    /// Falls back to the config directory on systems without a download dir.
    pub fn default_export_dir(&self) -> Result<PathBuf, PathError> {
        match dirs::download_dir() {
            Some(dir) => Ok(dir),
            None => self.config_dir(),
        }
    }
}

/// Checks that a journal id is usable as a single file name component.
pub fn validate_key(key: &str) -> Result<(), PathError> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\', '\0']);
    if valid {
        Ok(())
    } else {
        Err(PathError::InvalidKey(key.to_string()))
    }
}
