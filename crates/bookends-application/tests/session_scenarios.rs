//! End-to-end behaviour of the editing sessions against in-memory stores.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bookends_application::{ActiveTheme, MediaCustomizationSession, SaveKind, ThemeEditingSession};
use bookends_core::BookendsError;
use bookends_core::appearance::{DraftField, MediaDraft, ThemeDraft, ThemePair, Variant};
use bookends_core::error::Result;
use bookends_core::media::{Media, MediaRepository};
use bookends_core::theme::{LiveThemeConsumer, ThemeFileSink, ThemeRepository};

#[derive(Default)]
struct MemoryMediaRepository {
    records: Mutex<Vec<Media>>,
    created: Mutex<Vec<Media>>,
}

#[async_trait]
impl MediaRepository for MemoryMediaRepository {
    async fn get(&self, journal_id: &str) -> Result<Option<Media>> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|m| m.journal_id == journal_id).cloned())
    }

    async fn create(&self, media: &Media) -> Result<()> {
        self.created.lock().unwrap().push(media.clone());
        self.records.lock().unwrap().push(media.clone());
        Ok(())
    }

    async fn update(&self, media: &Media) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|m| m.journal_id == media.journal_id) {
            Some(existing) => {
                *existing = media.clone();
                Ok(())
            }
            None => Err(BookendsError::not_found("Media", media.journal_id.clone())),
        }
    }
}

#[derive(Default)]
struct MemoryThemeRepository {
    stored: Mutex<Option<ThemePair>>,
}

#[async_trait]
impl ThemeRepository for MemoryThemeRepository {
    async fn get(&self) -> Result<Option<ThemePair>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn create(&self, pair: &ThemePair) -> Result<()> {
        *self.stored.lock().unwrap() = Some(pair.clone());
        Ok(())
    }

    async fn update(&self, pair: &ThemePair) -> Result<()> {
        let mut stored = self.stored.lock().unwrap();
        if stored.is_none() {
            return Err(BookendsError::not_found("Theme", "app"));
        }
        *stored = Some(pair.clone());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingConsumer {
    applied: Mutex<Vec<(ThemeDraft, ThemeDraft)>>,
}

impl LiveThemeConsumer for RecordingConsumer {
    fn apply(&self, light: &ThemeDraft, dark: &ThemeDraft) {
        self.applied
            .lock()
            .unwrap()
            .push((light.clone(), dark.clone()));
    }
}

#[derive(Default)]
struct CapturingSink {
    offered: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl ThemeFileSink for CapturingSink {
    async fn offer(&self, file_name: &str, contents: &str) -> Result<String> {
        self.offered
            .lock()
            .unwrap()
            .push((file_name.to_string(), contents.to_string()));
        Ok(format!("/downloads/{}", file_name))
    }
}

async fn theme_session() -> (ThemeEditingSession, Arc<RecordingConsumer>) {
    let consumer = Arc::new(RecordingConsumer::default());
    let session =
        ThemeEditingSession::open(Arc::new(MemoryThemeRepository::default()), consumer.clone())
            .await;
    (session, consumer)
}

#[tokio::test]
async fn test_first_save_creates_record_with_defaults() {
    let repo = Arc::new(MemoryMediaRepository::default());
    let mut session = MediaCustomizationSession::open("j1", repo.clone()).await;
    assert_eq!(*session.draft(), MediaDraft::default());
    assert!(repo.created.lock().unwrap().is_empty());

    session.edit(DraftField::FontTitle, "Georgia").unwrap();
    assert_eq!(session.save_and_close().await.unwrap(), SaveKind::Created);

    let created = repo.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    let expected = Media {
        journal_id: "j1".to_string(),
        font_title: "Georgia".to_string(),
        ..Media::from_draft("j1", &Default::default())
    };
    assert_eq!(created[0], expected);
    assert!(!created[0].custom_enabled);
    assert!(created[0].wallpaper_image.is_empty());
}

#[tokio::test]
async fn test_second_session_updates_instead_of_creating() {
    let repo = Arc::new(MemoryMediaRepository::default());

    let mut first = MediaCustomizationSession::open("j1", repo.clone()).await;
    first.edit(DraftField::CustomEnabled, true).unwrap();
    first.save_and_close().await.unwrap();

    let mut second = MediaCustomizationSession::open("j1", repo.clone()).await;
    assert!(second.draft().custom_enabled);
    second.edit(DraftField::TextColor, "#222222").unwrap();
    assert_eq!(second.save_and_close().await.unwrap(), SaveKind::Updated);

    assert_eq!(repo.created.lock().unwrap().len(), 1);
    assert_eq!(repo.records.lock().unwrap()[0].text_color, "#222222");
}

#[tokio::test]
async fn test_undoing_every_edit_restores_the_initial_pair() {
    let (mut session, _consumer) = theme_session().await;
    let initial = session.current().clone();

    session.edit(Variant::Light, DraftField::PrimaryColor, "#111111").unwrap();
    session.edit(Variant::Dark, DraftField::FontBody, "Lora").unwrap();
    session.edit(Variant::Light, DraftField::WallpaperEnabled, true).unwrap();
    session.edit(Variant::Dark, DraftField::AccentColor, "#00ff00").unwrap();

    for _ in 0..4 {
        assert!(session.undo());
    }
    assert!(!session.undo());
    assert_eq!(*session.current(), initial);
}

#[tokio::test]
async fn test_new_edit_discards_redo_branch() {
    let (mut session, _consumer) = theme_session().await;

    session.edit(Variant::Light, DraftField::FontTitle, "Georgia").unwrap();
    session.undo();
    session.edit(Variant::Dark, DraftField::SecondaryColor, "#3a3a3a").unwrap();
    let before = session.current().clone();

    assert!(!session.can_redo());
    assert!(!session.redo());
    assert_eq!(*session.current(), before);
    assert_eq!(session.history_len(), 2);
    assert_eq!(session.light().font_title, "Arial");
    assert_eq!(session.dark().secondary_color, "#3a3a3a");
}

#[tokio::test]
async fn test_undo_propagates_previous_value() {
    let (mut session, consumer) = theme_session().await;

    session.edit(Variant::Light, DraftField::PrimaryColor, "#111111").unwrap();
    session.edit(Variant::Light, DraftField::PrimaryColor, "#222222").unwrap();
    session.undo();

    let applied = consumer.applied.lock().unwrap();
    let (light, _) = applied.last().unwrap();
    assert_eq!(light.primary_color, "#111111");
}

#[tokio::test]
async fn test_export_then_import_round_trips() {
    let (mut source, _) = theme_session().await;
    source.edit(Variant::Dark, DraftField::WallpaperImage, "/walls/night.png").unwrap();
    source.edit(Variant::Light, DraftField::TextColor, "#123456").unwrap();

    let sink = CapturingSink::default();
    let location = source.export(&sink).await.unwrap();
    assert_eq!(location, "/downloads/theme.json");
    let (file_name, document) = sink.offered.lock().unwrap()[0].clone();
    assert_eq!(file_name, "theme.json");

    let (mut target, consumer) = theme_session().await;
    target.import(&document).unwrap();

    assert_eq!(target.current(), source.current());
    let applied = consumer.applied.lock().unwrap();
    assert_eq!(applied.last().unwrap().1.wallpaper_image, "/walls/night.png");
}

#[tokio::test]
async fn test_import_missing_variant_leaves_state_untouched() {
    let (mut session, consumer) = theme_session().await;
    session.edit(Variant::Light, DraftField::FontBody, "Lora").unwrap();
    let before = session.current().clone();
    let len = session.history_len();

    let light = light_only_document(&before.light);
    let err = session.import(&light).unwrap_err();

    assert!(err.is_malformed_import());
    assert_eq!(*session.current(), before);
    assert_eq!(session.history_len(), len);
    assert_eq!(consumer.applied.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_import_without_accent_uses_variant_defaults() {
    let (mut session, _) = theme_session().await;
    let mut pair = ThemePair::default();
    pair.light.font_title = "Georgia".to_string();
    let mut document: serde_json::Value =
        serde_json::from_str(&pair.to_document().unwrap()).unwrap();
    for variant in ["light", "dark"] {
        document[variant].as_object_mut().unwrap().remove("accentColor");
    }

    session.import(&document.to_string()).unwrap();

    assert_eq!(*session.current(), pair);
    assert!(session.can_undo());
}

#[tokio::test]
async fn test_import_file_reads_document_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("theme.json");
    let mut pair = ThemePair::default();
    pair.dark.font_title = "Merriweather".to_string();
    std::fs::write(&path, pair.to_document().unwrap()).unwrap();

    let (mut session, _) = theme_session().await;
    session.import_file(&path).await.unwrap();
    assert_eq!(session.dark().font_title, "Merriweather");

    let missing = session.import_file(&dir.path().join("nope.json")).await;
    assert!(missing.unwrap_err().is_persistence_fault());
}

#[tokio::test]
async fn test_session_drives_active_theme_persistence() {
    let repo = Arc::new(MemoryThemeRepository::default());
    let active = Arc::new(ActiveTheme::default());
    let handle = active.spawn_persistence(repo.clone());

    let mut session = ThemeEditingSession::open(repo.clone(), active.clone()).await;
    session.edit(Variant::Dark, DraftField::PrimaryColor, "#000000").unwrap();
    session.close();
    assert_eq!(active.current().dark.primary_color, "#000000");

    drop(session);
    drop(Arc::into_inner(active));
    handle.await.unwrap();

    let stored = repo.stored.lock().unwrap().clone().unwrap();
    assert_eq!(stored.dark.primary_color, "#000000");
}

fn light_only_document(light: &ThemeDraft) -> String {
    serde_json::json!({ "light": light }).to_string()
}
