//! Journal customization session.

use std::sync::Arc;

use bookends_core::appearance::{Draft, DraftField, FieldValue, IMAGE_FILTER, ImagePicker, MediaDraft};
use bookends_core::error::Result;
use bookends_core::media::{Media, MediaRepository};

use super::SessionPhase;

/// How a save reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Created,
    Updated,
}

/// Detached fetch for a [`MediaCustomizationSession`].
pub struct MediaLoader {
    journal_id: String,
    repository: Arc<dyn MediaRepository>,
}

impl MediaLoader {
    /// Fetches the journal's record as a draft.
    ///
    /// Never fails: a missing record and a store fault both produce the
    /// default draft (the fault is logged).
    pub async fn fetch(self) -> MediaDraft {
        match self.repository.get(&self.journal_id).await {
            Ok(Some(media)) => media.to_draft(),
            Ok(None) => {
                tracing::debug!(
                    "[MediaSession] No media for journal {}, using defaults",
                    self.journal_id
                );
                MediaDraft::default()
            }
            Err(e) => {
                tracing::error!(
                    "[MediaSession] Failed to fetch media for journal {}: {}",
                    self.journal_id,
                    e
                );
                MediaDraft::default()
            }
        }
    }
}

/// Edits the customization of one journal.
///
/// Edits only touch the local draft. Nothing reaches the store until
/// [`save`](Self::save); closing without saving discards the edits.
pub struct MediaCustomizationSession {
    journal_id: String,
    repository: Arc<dyn MediaRepository>,
    draft: MediaDraft,
    phase: SessionPhase,
}

impl MediaCustomizationSession {
    /// Creates a session in the `Loading` phase.
    pub fn new(journal_id: impl Into<String>, repository: Arc<dyn MediaRepository>) -> Self {
        Self {
            journal_id: journal_id.into(),
            repository,
            draft: MediaDraft::default(),
            phase: SessionPhase::Loading,
        }
    }

    /// Creates a session and loads it.
    pub async fn open(journal_id: impl Into<String>, repository: Arc<dyn MediaRepository>) -> Self {
        let mut session = Self::new(journal_id, repository);
        session.load().await;
        session
    }

    pub fn loader(&self) -> MediaLoader {
        MediaLoader {
            journal_id: self.journal_id.clone(),
            repository: Arc::clone(&self.repository),
        }
    }

    /// Installs a fetched draft and moves to `Ready`.
    ///
    /// Returns false (and drops the draft) if the session is already closed.
    pub fn finish_load(&mut self, draft: MediaDraft) -> bool {
        if self.phase.is_closed() {
            tracing::debug!(
                "[MediaSession] Discarding load result for closed session {}",
                self.journal_id
            );
            return false;
        }
        self.draft = draft;
        self.phase = SessionPhase::Ready;
        true
    }

    pub async fn load(&mut self) {
        let draft = self.loader().fetch().await;
        self.finish_load(draft);
    }

    pub fn journal_id(&self) -> &str {
        &self.journal_id
    }

    pub fn draft(&self) -> &MediaDraft {
        &self.draft
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Replaces one field of the local draft.
    pub fn edit(&mut self, field: DraftField, value: impl Into<FieldValue>) -> Result<()> {
        self.phase.ensure_ready("edit")?;
        self.draft = self.draft.set(field, value)?;
        Ok(())
    }

    /// Lets the user pick a wallpaper image.
    ///
    /// Returns true if a file was chosen; cancelling leaves the draft as is.
    pub async fn choose_wallpaper(&mut self, picker: &dyn ImagePicker) -> Result<bool> {
        self.phase.ensure_ready("choose a wallpaper")?;
        match picker.pick(&IMAGE_FILTER).await? {
            Some(path) => {
                self.edit(DraftField::WallpaperImage, path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Writes the draft to the store.
    ///
    /// Re-fetches the record to choose between update and create, and falls
    /// back to create if the update reports the record gone.
    pub async fn save(&self) -> Result<SaveKind> {
        self.phase.ensure_ready("save")?;
        let media = Media::from_draft(self.journal_id.clone(), &self.draft);

        let existing = self.repository.get(&self.journal_id).await?;
        if existing.is_some() {
            match self.repository.update(&media).await {
                Ok(()) => {
                    tracing::info!("[MediaSession] Media updated for journal {}", self.journal_id);
                    return Ok(SaveKind::Updated);
                }
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }

        self.repository.create(&media).await?;
        tracing::info!("[MediaSession] Media created for journal {}", self.journal_id);
        Ok(SaveKind::Created)
    }

    /// Saves, then closes regardless of the outcome.
    pub async fn save_and_close(&mut self) -> Result<SaveKind> {
        let outcome = self.save().await;
        if let Err(e) = &outcome {
            tracing::error!(
                "[MediaSession] Failed to save media for journal {}: {}",
                self.journal_id,
                e
            );
        }
        self.close();
        outcome
    }

    /// Ends the session. Unsaved edits are dropped.
    pub fn close(&mut self) {
        self.phase = SessionPhase::Closed;
    }
}
