//! Media record domain model.

use serde::{Deserialize, Serialize};

use crate::appearance::{
    DEFAULT_FONT_BODY, DEFAULT_FONT_TITLE, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR,
    DEFAULT_TEXT_COLOR, MediaDraft,
};

/// Stored customization for one journal.
///
/// Text fields may be empty in records written by older clients; an empty
/// value means "use the default" when the record is turned into a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Media {
    pub journal_id: String,
    #[serde(default)]
    pub custom_enabled: bool,
    #[serde(default)]
    pub wallpaper_image: String,
    #[serde(default)]
    pub wallpaper_enabled: bool,
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub secondary_color: String,
    #[serde(default)]
    pub text_color: String,
    #[serde(default)]
    pub font_title: String,
    #[serde(default)]
    pub font_body: String,
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

impl Media {
    /// Builds the record for `journal_id` from a draft.
    pub fn from_draft(journal_id: impl Into<String>, draft: &MediaDraft) -> Self {
        Self {
            journal_id: journal_id.into(),
            custom_enabled: draft.custom_enabled,
            wallpaper_image: draft.wallpaper_image.clone(),
            wallpaper_enabled: draft.wallpaper_enabled,
            primary_color: draft.primary_color.clone(),
            secondary_color: draft.secondary_color.clone(),
            text_color: draft.text_color.clone(),
            font_title: draft.font_title.clone(),
            font_body: draft.font_body.clone(),
        }
    }

    /// Turns the record into a fully populated draft.
    pub fn to_draft(&self) -> MediaDraft {
        MediaDraft {
            primary_color: or_default(&self.primary_color, DEFAULT_PRIMARY_COLOR),
            secondary_color: or_default(&self.secondary_color, DEFAULT_SECONDARY_COLOR),
            text_color: or_default(&self.text_color, DEFAULT_TEXT_COLOR),
            font_title: or_default(&self.font_title, DEFAULT_FONT_TITLE),
            font_body: or_default(&self.font_body, DEFAULT_FONT_BODY),
            wallpaper_image: self.wallpaper_image.clone(),
            wallpaper_enabled: self.wallpaper_enabled,
            custom_enabled: self.custom_enabled,
        }
    }
}
