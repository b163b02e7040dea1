//! Theme repository trait.

use async_trait::async_trait;

use crate::appearance::ThemePair;
use crate::error::Result;

/// Persistence boundary for the application-wide theme pair.
///
/// There is a single record, so no key is passed.
#[async_trait]
pub trait ThemeRepository: Send + Sync {
    /// Fetches the stored pair. `Ok(None)` means nothing saved yet.
    async fn get(&self) -> Result<Option<ThemePair>>;

    /// Stores the pair for the first time. Fails with `AlreadyExists` if present.
    async fn create(&self, pair: &ThemePair) -> Result<()>;

    /// Replaces the stored pair. Fails with `NotFound` if nothing is stored.
    async fn update(&self, pair: &ThemePair) -> Result<()>;

    /// Updates the stored pair, creating it when missing.
    async fn upsert(&self, pair: &ThemePair) -> Result<()> {
        match self.update(pair).await {
            Err(e) if e.is_not_found() => self.create(pair).await,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookendsError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryThemeRepository {
        stored: Mutex<Option<ThemePair>>,
        creates: Mutex<usize>,
    }

    #[async_trait]
    impl ThemeRepository for MemoryThemeRepository {
        async fn get(&self) -> Result<Option<ThemePair>> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn create(&self, pair: &ThemePair) -> Result<()> {
            let mut stored = self.stored.lock().unwrap();
            if stored.is_some() {
                return Err(BookendsError::already_exists("Theme", "app"));
            }
            *stored = Some(pair.clone());
            *self.creates.lock().unwrap() += 1;
            Ok(())
        }

        async fn update(&self, pair: &ThemePair) -> Result<()> {
            let mut stored = self.stored.lock().unwrap();
            match stored.as_mut() {
                Some(existing) => {
                    *existing = pair.clone();
                    Ok(())
                }
                None => Err(BookendsError::not_found("Theme", "app")),
            }
        }
    }

    #[tokio::test]
    async fn test_upsert_creates_then_updates() {
        let repo = MemoryThemeRepository::default();
        let pair = ThemePair::default();

        repo.upsert(&pair).await.unwrap();
        assert_eq!(*repo.creates.lock().unwrap(), 1);

        let mut changed = pair.clone();
        changed.dark.font_title = "Lora".to_string();
        repo.upsert(&changed).await.unwrap();

        assert_eq!(*repo.creates.lock().unwrap(), 1);
        assert_eq!(repo.get().await.unwrap(), Some(changed));
    }
}
