//! Media repository trait.

use async_trait::async_trait;

use super::model::Media;
use crate::error::Result;

/// Persistence boundary for journal media records, keyed by journal id.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// Fetches the record for a journal. `Ok(None)` means no record yet.
    async fn get(&self, journal_id: &str) -> Result<Option<Media>>;

    /// Stores a new record. Fails with `AlreadyExists` if one is present.
    async fn create(&self, media: &Media) -> Result<()>;

    /// Replaces an existing record. Fails with `NotFound` if none exists.
    async fn update(&self, media: &Media) -> Result<()>;
}
