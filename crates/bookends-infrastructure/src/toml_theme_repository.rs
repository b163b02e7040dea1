//! Theme repository implementation.
//!
//! The light/dark pair is stored as app settings in a single TOML file with
//! `[light]` and `[dark]` tables.
//!
//! File location: `{config_dir}/theme.toml`

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use bookends_core::BookendsError;
use bookends_core::appearance::ThemePair;
use bookends_core::error::Result;
use bookends_core::theme::ThemeRepository;

use crate::paths::BookendsPaths;
use crate::storage::{AtomicTomlFile, StorageError};

const ENTITY: &str = "Theme";
const KEY: &str = "app";

/// File-based theme repository.
#[derive(Clone)]
pub struct TomlThemeRepository {
    file: Arc<AtomicTomlFile<ThemePair>>,
}

impl TomlThemeRepository {
    pub fn new(paths: &BookendsPaths) -> Result<Self> {
        Ok(Self::with_path(paths.theme_file()?))
    }

    /// Creates a repository backed by a specific file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
        }
    }

    async fn blocking<R, F>(&self, op: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(&AtomicTomlFile<ThemePair>) -> std::result::Result<R, StorageError>
            + Send
            + 'static,
    {
        let file = Arc::clone(&self.file);
        tokio::task::spawn_blocking(move || op(&file).map_err(|e| e.into_domain(ENTITY, KEY)))
            .await
            .map_err(|e| BookendsError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl ThemeRepository for TomlThemeRepository {
    async fn get(&self) -> Result<Option<ThemePair>> {
        self.blocking(|file| file.load()).await
    }

    async fn create(&self, pair: &ThemePair) -> Result<()> {
        let pair = pair.clone();
        self.blocking(move |file| file.create(&pair)).await?;
        tracing::info!("[ThemeRepository] Created theme settings");
        Ok(())
    }

    async fn update(&self, pair: &ThemePair) -> Result<()> {
        let pair = pair.clone();
        self.blocking(move |file| file.replace(&pair)).await?;
        tracing::info!("[ThemeRepository] Updated theme settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookends_core::appearance::{Draft, DraftField, Variant};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlThemeRepository::with_path(temp_dir.path().join("theme.toml"));

        assert!(repo.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.toml");
        let repo = TomlThemeRepository::with_path(path.clone());

        let pair = ThemePair::default();
        repo.upsert(&pair).await.unwrap();

        let dark = pair.dark.set(DraftField::WallpaperEnabled, true).unwrap();
        let changed = pair.with_variant(Variant::Dark, dark);
        repo.upsert(&changed).await.unwrap();

        assert_eq!(repo.get().await.unwrap(), Some(changed));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("[light]"));
        assert!(content.contains("[dark]"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_fault() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.toml");
        std::fs::write(&path, "[light]\nprimaryColor = 12\n").unwrap();
        let repo = TomlThemeRepository::with_path(path);

        assert!(repo.get().await.unwrap_err().is_persistence_fault());
    }
}
