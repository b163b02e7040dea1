//! Media repository implementation.
//!
//! Stores one TOML file per journal.
//!
//! File location: `{data_dir}/media/{journal_id}.toml`

use async_trait::async_trait;
use std::path::PathBuf;

use bookends_core::BookendsError;
use bookends_core::error::Result;
use bookends_core::media::{Media, MediaRepository};

use crate::paths::{BookendsPaths, validate_key};
use crate::storage::{AtomicTomlFile, StorageError};

const ENTITY: &str = "Media";

/// File-based media repository.
#[derive(Debug, Clone)]
pub struct TomlMediaRepository {
    base_dir: PathBuf,
}

impl TomlMediaRepository {
    /// Creates a repository under the resolved media directory.
    pub fn new(paths: &BookendsPaths) -> Result<Self> {
        Ok(Self {
            base_dir: paths.media_dir()?,
        })
    }

    /// Creates a repository with a custom base path (for testing).
    pub fn with_base_path(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn file(&self, journal_id: &str) -> Result<AtomicTomlFile<Media>> {
        validate_key(journal_id)?;
        Ok(AtomicTomlFile::new(
            self.base_dir.join(format!("{}.toml", journal_id)),
        ))
    }

    /// Runs a blocking storage operation off the async executor.
    async fn blocking<R, F>(&self, journal_id: &str, op: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(AtomicTomlFile<Media>) -> std::result::Result<R, StorageError> + Send + 'static,
    {
        let file = self.file(journal_id)?;
        let id = journal_id.to_string();
        tokio::task::spawn_blocking(move || op(file).map_err(|e| e.into_domain(ENTITY, &id)))
            .await
            .map_err(|e| BookendsError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl MediaRepository for TomlMediaRepository {
    async fn get(&self, journal_id: &str) -> Result<Option<Media>> {
        let media = self.blocking(journal_id, |file| file.load()).await?;
        tracing::debug!(
            "[MediaRepository] get({}) -> {}",
            journal_id,
            if media.is_some() { "found" } else { "none" }
        );
        Ok(media)
    }

    async fn create(&self, media: &Media) -> Result<()> {
        let record = media.clone();
        self.blocking(&media.journal_id, move |file| file.create(&record))
            .await?;
        tracing::info!("[MediaRepository] Created media for journal {}", media.journal_id);
        Ok(())
    }

    async fn update(&self, media: &Media) -> Result<()> {
        let record = media.clone();
        self.blocking(&media.journal_id, move |file| file.replace(&record))
            .await?;
        tracing::info!("[MediaRepository] Updated media for journal {}", media.journal_id);
        Ok(())
    }
}
