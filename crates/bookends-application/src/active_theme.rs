//! The application-wide theme that the rest of the UI renders from.

use std::sync::Arc;

use bookends_core::appearance::{ThemeDraft, ThemePair};
use bookends_core::theme::{LiveThemeConsumer, ThemeRepository};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Holds the live theme pair and notifies subscribers when it changes.
pub struct ActiveTheme {
    sender: watch::Sender<ThemePair>,
}

impl ActiveTheme {
    pub fn new(initial: ThemePair) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn current(&self) -> ThemePair {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemePair> {
        self.sender.subscribe()
    }

    /// Writes every change to `repository` until this theme is dropped.
    ///
    /// Bursts of changes collapse to the latest pair; a failed write is
    /// logged and the next change retries.
    pub fn spawn_persistence(&self, repository: Arc<dyn ThemeRepository>) -> JoinHandle<()> {
        let mut receiver = self.sender.subscribe();
        tokio::spawn(async move {
            while receiver.changed().await.is_ok() {
                let pair = receiver.borrow_and_update().clone();
                match repository.upsert(&pair).await {
                    Ok(()) => tracing::debug!("[ActiveTheme] Theme persisted"),
                    Err(e) => tracing::error!("[ActiveTheme] Failed to persist theme: {}", e),
                }
            }
            tracing::debug!("[ActiveTheme] Persistence task stopped");
        })
    }
}

impl Default for ActiveTheme {
    fn default() -> Self {
        Self::new(ThemePair::default())
    }
}

impl LiveThemeConsumer for ActiveTheme {
    fn apply(&self, light: &ThemeDraft, dark: &ThemeDraft) {
        self.sender.send_if_modified(|pair| {
            if pair.light == *light && pair.dark == *dark {
                return false;
            }
            pair.light = light.clone();
            pair.dark = dark.clone();
            true
        });
    }
}
