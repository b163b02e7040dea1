//! Application theme editing session.

use std::path::Path;
use std::sync::Arc;

use bookends_core::BookendsError;
use bookends_core::appearance::{
    Draft, DraftField, FieldValue, IMAGE_FILTER, ImagePicker, ThemeDraft, ThemePair, Variant,
};
use bookends_core::error::Result;
use bookends_core::history::ThemeHistory;
use bookends_core::theme::{DEFAULT_EXPORT_FILE_NAME, LiveThemeConsumer, ThemeFileSink, ThemeRepository};

use super::SessionPhase;

/// Detached fetch for a [`ThemeEditingSession`].
pub struct ThemeLoader {
    repository: Arc<dyn ThemeRepository>,
}

impl ThemeLoader {
    /// Fetches the stored pair, falling back to the default pair when
    /// nothing is stored or the store fails.
    pub async fn fetch(self) -> ThemePair {
        match self.repository.get().await {
            Ok(Some(pair)) => pair,
            Ok(None) => {
                tracing::debug!("[ThemeSession] No stored theme, using defaults");
                ThemePair::default()
            }
            Err(e) => {
                tracing::error!("[ThemeSession] Failed to fetch theme: {}", e);
                ThemePair::default()
            }
        }
    }
}

/// Edits the light and dark theme together with one undo/redo timeline.
///
/// Every accepted change (edit, undo, redo, import) is pushed to the live
/// consumer straight away; there is no separate save step.
pub struct ThemeEditingSession {
    repository: Arc<dyn ThemeRepository>,
    consumer: Arc<dyn LiveThemeConsumer>,
    history: ThemeHistory,
    phase: SessionPhase,
}

impl ThemeEditingSession {
    /// Creates a session in the `Loading` phase.
    pub fn new(repository: Arc<dyn ThemeRepository>, consumer: Arc<dyn LiveThemeConsumer>) -> Self {
        Self {
            repository,
            consumer,
            history: ThemeHistory::new(ThemePair::default()),
            phase: SessionPhase::Loading,
        }
    }

    /// Creates a session and loads it.
    pub async fn open(
        repository: Arc<dyn ThemeRepository>,
        consumer: Arc<dyn LiveThemeConsumer>,
    ) -> Self {
        let mut session = Self::new(repository, consumer);
        session.load().await;
        session
    }

    pub fn loader(&self) -> ThemeLoader {
        ThemeLoader {
            repository: Arc::clone(&self.repository),
        }
    }

    /// Installs a fetched pair as the only history entry and moves to `Ready`.
    ///
    /// Returns false (and drops the pair) if the session is already closed.
    pub fn finish_load(&mut self, pair: ThemePair) -> bool {
        if self.phase.is_closed() {
            tracing::debug!("[ThemeSession] Discarding load result for closed session");
            return false;
        }
        self.history.reset(pair);
        self.phase = SessionPhase::Ready;
        true
    }

    pub async fn load(&mut self) {
        let pair = self.loader().fetch().await;
        self.finish_load(pair);
    }

    /// Re-bases the session on an externally changed theme.
    ///
    /// History collapses to the new pair; nothing is propagated since the
    /// change came from the consumer side.
    pub fn reload(&mut self, pair: ThemePair) {
        if self.phase.is_closed() {
            return;
        }
        tracing::debug!("[ThemeSession] Reloaded from external theme");
        self.history.reset(pair);
        self.phase = SessionPhase::Ready;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The live pair.
    pub fn current(&self) -> &ThemePair {
        self.history.current()
    }

    pub fn light(&self) -> &ThemeDraft {
        &self.current().light
    }

    pub fn dark(&self) -> &ThemeDraft {
        &self.current().dark
    }

    pub fn can_undo(&self) -> bool {
        self.phase.is_ready() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.phase.is_ready() && self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    /// Changes one field of one variant, propagates and records the result.
    pub fn edit(
        &mut self,
        variant: Variant,
        field: DraftField,
        value: impl Into<FieldValue>,
    ) -> Result<()> {
        self.phase.ensure_ready("edit")?;
        let draft = self.current().variant(variant).set(field, value)?;
        let next = self.current().with_variant(variant, draft);
        tracing::debug!("[ThemeSession] {} {} edited", variant, field);
        self.accept(next);
        Ok(())
    }

    /// Steps back one change. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.phase.is_ready() {
            return false;
        }
        let Some(pair) = self.history.undo().cloned() else {
            return false;
        };
        self.propagate(&pair);
        true
    }

    /// Steps forward one change. Returns false if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.phase.is_ready() {
            return false;
        }
        let Some(pair) = self.history.redo().cloned() else {
            return false;
        };
        self.propagate(&pair);
        true
    }

    /// Lets the user pick a wallpaper for `variant`.
    ///
    /// Returns true if a file was chosen; cancelling changes nothing.
    pub async fn choose_wallpaper(
        &mut self,
        variant: Variant,
        picker: &dyn ImagePicker,
    ) -> Result<bool> {
        self.phase.ensure_ready("choose a wallpaper")?;
        match picker.pick(&IMAGE_FILTER).await? {
            Some(path) => {
                self.edit(variant, DraftField::WallpaperImage, path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The current pair as a pretty-printed JSON document.
    pub fn export_document(&self) -> Result<String> {
        self.current().to_document()
    }

    /// Offers the current pair to the user as `theme.json`.
    pub async fn export(&self, sink: &dyn ThemeFileSink) -> Result<String> {
        self.export_as(sink, DEFAULT_EXPORT_FILE_NAME).await
    }

    pub async fn export_as(&self, sink: &dyn ThemeFileSink, file_name: &str) -> Result<String> {
        let document = self.export_document()?;
        sink.offer(file_name, &document).await
    }

    /// Replaces both variants with the content of a theme document.
    ///
    /// The document is validated as a whole; on `MalformedImport` nothing
    /// changes. A successful import is undoable like an edit.
    pub fn import(&mut self, document: &str) -> Result<()> {
        self.phase.ensure_ready("import")?;
        let pair = ThemePair::from_document(document).inspect_err(|e| {
            tracing::warn!("[ThemeSession] Rejected theme import: {}", e);
        })?;
        tracing::info!("[ThemeSession] Imported theme");
        self.accept(pair);
        Ok(())
    }

    /// Reads a theme document from disk and imports it.
    pub async fn import_file(&mut self, path: &Path) -> Result<()> {
        self.phase.ensure_ready("import")?;
        let document = tokio::fs::read_to_string(path).await.map_err(|e| {
            BookendsError::io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.import(&document)
    }

    /// Ends the session. Edits were already propagated live.
    pub fn close(&mut self) {
        self.phase = SessionPhase::Closed;
    }

    fn accept(&mut self, pair: ThemePair) {
        self.propagate(&pair);
        self.history.record(pair);
    }

    fn propagate(&self, pair: &ThemePair) {
        self.consumer.apply(&pair.light, &pair.dark);
    }
}
