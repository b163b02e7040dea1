//! Configuration service implementation.
//!
//! Loads `AppConfig` from the configuration file (`~/.config/bookends/config.toml`).

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use bookends_core::config::AppConfig;
use bookends_core::error::Result;

use crate::paths::BookendsPaths;

/// Configuration service that loads and caches the application config.
///
/// A missing file yields defaults. An unreadable or invalid file is logged
/// and also yields defaults, so a broken config never blocks startup.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform config file.
    pub fn new() -> Self {
        let path = BookendsPaths::default().config_file().ok();
        Self::with_path(path)
    }

    /// Creates a service reading a specific file (for testing and `--config`).
    pub fn with_path(path: Option<PathBuf>) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("[ConfigService] Using default config: {}", e);
                AppConfig::default()
            }
        };

        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = Some(loaded.clone());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = None;
    }

    /// Path resolution honouring `[storage] data_dir`.
    pub fn paths(&self) -> BookendsPaths {
        BookendsPaths::new(self.get_config().storage.data_dir)
    }

    fn load_config(&self) -> Result<AppConfig> {
        let Some(path) = &self.path else {
            return Ok(AppConfig::default());
        };
        if !path.exists() {
            tracing::debug!("[ConfigService] No config at {}", path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(Some(temp_dir.path().join("config.toml")));

        assert_eq!(service.get_config(), AppConfig::default());
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[logging\nlevel = ").unwrap();

        let service = ConfigService::with_path(Some(path));
        assert_eq!(service.get_config(), AppConfig::default());
    }

    #[test]
    fn test_loads_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let service = ConfigService::with_path(Some(path.clone()));
        assert_eq!(service.get_config().logging.level, "debug");

        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(service.get_config().logging.level, "debug");

        service.invalidate_cache();
        assert_eq!(service.get_config().logging.level, "warn");
    }

    #[test]
    fn test_paths_use_data_dir_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\ndata_dir = \"/srv/journals\"\n").unwrap();

        let service = ConfigService::with_path(Some(path));
        assert_eq!(
            service.paths().media_dir().unwrap(),
            PathBuf::from("/srv/journals/media")
        );
    }
}
