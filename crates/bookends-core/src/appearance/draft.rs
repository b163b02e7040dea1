//! Configuration drafts.
//!
//! A draft is the in-memory value being edited for one theme variant or one
//! journal. Every field is always populated; edits go through [`Draft::set`],
//! which returns a new draft and leaves the receiver untouched.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::field::{DraftField, FieldValue};
use crate::error::{BookendsError, Result};

pub const DEFAULT_FONT_TITLE: &str = "Arial";
pub const DEFAULT_FONT_BODY: &str = "Roboto";
pub const DEFAULT_PRIMARY_COLOR: &str = "#ffffff";
pub const DEFAULT_SECONDARY_COLOR: &str = "#f0f0f0";
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Common behaviour of theme and media drafts.
pub trait Draft: Clone + PartialEq + Default + Serialize + DeserializeOwned {
    /// Short name used in errors and logs.
    const KIND: &'static str;

    /// The fields this draft carries, in display order.
    const FIELDS: &'static [DraftField];

    /// Reads a field. Returns `None` for fields this draft does not carry.
    fn get(&self, field: DraftField) -> Option<FieldValue>;

    /// Writes a field in place.
    fn assign(&mut self, field: DraftField, value: FieldValue) -> Result<()>;

    /// Returns a copy of this draft with one field replaced.
    ///
    /// Fails with `UnknownField` when the field is not part of this draft
    /// and with `FieldType` when the value kind does not match.
    fn set(&self, field: DraftField, value: impl Into<FieldValue>) -> Result<Self> {
        let mut next = self.clone();
        next.assign(field, value.into())?;
        Ok(next)
    }

    /// Like [`Draft::set`], addressing the field by its canonical name.
    fn set_named(&self, name: &str, value: impl Into<FieldValue>) -> Result<Self> {
        let field = DraftField::parse(name, Self::KIND)?;
        self.set(field, value)
    }

    /// Iterates over `(field, value)` pairs in display order.
    fn entries(&self) -> Vec<(DraftField, FieldValue)> {
        Self::FIELDS
            .iter()
            .filter_map(|&field| self.get(field).map(|value| (field, value)))
            .collect()
    }
}

fn unknown<D: Draft>(field: DraftField) -> BookendsError {
    BookendsError::UnknownField {
        field: field.to_string(),
        draft: D::KIND,
    }
}

// ============================================================================
// Theme draft
// ============================================================================

/// One variant (light or dark) of the application theme.
///
/// Serialized with the canonical field names; all fields are required
/// when deserializing so an imported document either carries a complete
/// variant or is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDraft {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub font_title: String,
    pub font_body: String,
    pub wallpaper_image: String,
    pub wallpaper_enabled: bool,
}

impl ThemeDraft {
    /// Default light variant.
    pub fn light() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            accent_color: "#f4b860".to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            font_title: DEFAULT_FONT_TITLE.to_string(),
            font_body: DEFAULT_FONT_BODY.to_string(),
            wallpaper_image: String::new(),
            wallpaper_enabled: false,
        }
    }

    /// Default dark variant.
    pub fn dark() -> Self {
        Self {
            primary_color: "#1e1e1e".to_string(),
            secondary_color: "#2b2b2b".to_string(),
            accent_color: "#c98a2b".to_string(),
            text_color: "#f5f5f5".to_string(),
            ..Self::light()
        }
    }
}

impl Default for ThemeDraft {
    fn default() -> Self {
        Self::light()
    }
}

impl Draft for ThemeDraft {
    const KIND: &'static str = "theme";

    const FIELDS: &'static [DraftField] = &[
        DraftField::PrimaryColor,
        DraftField::SecondaryColor,
        DraftField::AccentColor,
        DraftField::TextColor,
        DraftField::FontTitle,
        DraftField::FontBody,
        DraftField::WallpaperImage,
        DraftField::WallpaperEnabled,
    ];

    fn get(&self, field: DraftField) -> Option<FieldValue> {
        let value: FieldValue = match field {
            DraftField::PrimaryColor => self.primary_color.clone().into(),
            DraftField::SecondaryColor => self.secondary_color.clone().into(),
            DraftField::AccentColor => self.accent_color.clone().into(),
            DraftField::TextColor => self.text_color.clone().into(),
            DraftField::FontTitle => self.font_title.clone().into(),
            DraftField::FontBody => self.font_body.clone().into(),
            DraftField::WallpaperImage => self.wallpaper_image.clone().into(),
            DraftField::WallpaperEnabled => self.wallpaper_enabled.into(),
            DraftField::CustomEnabled => return None,
        };
        Some(value)
    }

    fn assign(&mut self, field: DraftField, value: FieldValue) -> Result<()> {
        match field {
            DraftField::PrimaryColor => self.primary_color = value.into_text(field)?,
            DraftField::SecondaryColor => self.secondary_color = value.into_text(field)?,
            DraftField::AccentColor => self.accent_color = value.into_text(field)?,
            DraftField::TextColor => self.text_color = value.into_text(field)?,
            DraftField::FontTitle => self.font_title = value.into_text(field)?,
            DraftField::FontBody => self.font_body = value.into_text(field)?,
            DraftField::WallpaperImage => self.wallpaper_image = value.into_text(field)?,
            DraftField::WallpaperEnabled => self.wallpaper_enabled = value.into_flag(field)?,
            DraftField::CustomEnabled => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

// ============================================================================
// Media draft
// ============================================================================

/// Per-journal customization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDraft {
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
    pub font_title: String,
    pub font_body: String,
    pub wallpaper_image: String,
    pub wallpaper_enabled: bool,
    /// Whether the journal uses its customization at all.
    pub custom_enabled: bool,
}

impl Default for MediaDraft {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            font_title: DEFAULT_FONT_TITLE.to_string(),
            font_body: DEFAULT_FONT_BODY.to_string(),
            wallpaper_image: String::new(),
            wallpaper_enabled: false,
            custom_enabled: false,
        }
    }
}

impl Draft for MediaDraft {
    const KIND: &'static str = "media";

    const FIELDS: &'static [DraftField] = &[
        DraftField::CustomEnabled,
        DraftField::FontTitle,
        DraftField::FontBody,
        DraftField::PrimaryColor,
        DraftField::SecondaryColor,
        DraftField::TextColor,
        DraftField::WallpaperImage,
        DraftField::WallpaperEnabled,
    ];

    fn get(&self, field: DraftField) -> Option<FieldValue> {
        let value: FieldValue = match field {
            DraftField::PrimaryColor => self.primary_color.clone().into(),
            DraftField::SecondaryColor => self.secondary_color.clone().into(),
            DraftField::TextColor => self.text_color.clone().into(),
            DraftField::FontTitle => self.font_title.clone().into(),
            DraftField::FontBody => self.font_body.clone().into(),
            DraftField::WallpaperImage => self.wallpaper_image.clone().into(),
            DraftField::WallpaperEnabled => self.wallpaper_enabled.into(),
            DraftField::CustomEnabled => self.custom_enabled.into(),
            DraftField::AccentColor => return None,
        };
        Some(value)
    }

    fn assign(&mut self, field: DraftField, value: FieldValue) -> Result<()> {
        match field {
            DraftField::PrimaryColor => self.primary_color = value.into_text(field)?,
            DraftField::SecondaryColor => self.secondary_color = value.into_text(field)?,
            DraftField::TextColor => self.text_color = value.into_text(field)?,
            DraftField::FontTitle => self.font_title = value.into_text(field)?,
            DraftField::FontBody => self.font_body = value.into_text(field)?,
            DraftField::WallpaperImage => self.wallpaper_image = value.into_text(field)?,
            DraftField::WallpaperEnabled => self.wallpaper_enabled = value.into_flag(field)?,
            DraftField::CustomEnabled => self.custom_enabled = value.into_flag(field)?,
            DraftField::AccentColor => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}
