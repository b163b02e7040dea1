//! The light/dark theme pair and its JSON document form.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::draft::ThemeDraft;
use crate::error::{BookendsError, Result};

/// One of the two theme variants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Variant {
    Light,
    Dark,
}

/// Both theme variants, edited and exported together.
///
/// The serialized form is the theme interchange document:
///
/// ```json
/// { "light": { "primaryColor": "#ffffff", ... }, "dark": { ... } }
/// ```
///
/// `accentColor` may be left out of either variant; it then takes that
/// variant's default accent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ThemeDocument")]
pub struct ThemePair {
    pub light: ThemeDraft,
    pub dark: ThemeDraft,
}

/// Wire form of [`ThemePair`] accepted on read.
#[derive(Deserialize)]
struct ThemeDocument {
    light: VariantDocument,
    dark: VariantDocument,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariantDocument {
    primary_color: String,
    secondary_color: String,
    #[serde(default)]
    accent_color: Option<String>,
    text_color: String,
    font_title: String,
    font_body: String,
    wallpaper_image: String,
    wallpaper_enabled: bool,
}

impl VariantDocument {
    fn into_draft(self, defaults: ThemeDraft) -> ThemeDraft {
        ThemeDraft {
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            accent_color: self.accent_color.unwrap_or(defaults.accent_color),
            text_color: self.text_color,
            font_title: self.font_title,
            font_body: self.font_body,
            wallpaper_image: self.wallpaper_image,
            wallpaper_enabled: self.wallpaper_enabled,
        }
    }
}

impl From<ThemeDocument> for ThemePair {
    fn from(document: ThemeDocument) -> Self {
        Self {
            light: document.light.into_draft(ThemeDraft::light()),
            dark: document.dark.into_draft(ThemeDraft::dark()),
        }
    }
}

impl Default for ThemePair {
    fn default() -> Self {
        Self {
            light: ThemeDraft::light(),
            dark: ThemeDraft::dark(),
        }
    }
}

impl ThemePair {
    pub fn new(light: ThemeDraft, dark: ThemeDraft) -> Self {
        Self { light, dark }
    }

    pub fn variant(&self, variant: Variant) -> &ThemeDraft {
        match variant {
            Variant::Light => &self.light,
            Variant::Dark => &self.dark,
        }
    }

    /// Returns a copy of this pair with `variant` replaced.
    pub fn with_variant(&self, variant: Variant, draft: ThemeDraft) -> Self {
        match variant {
            Variant::Light => Self::new(draft, self.dark.clone()),
            Variant::Dark => Self::new(self.light.clone(), draft),
        }
    }

    /// Serializes the pair as a pretty-printed JSON document.
    pub fn to_document(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a theme document.
    ///
    /// Anything that is not valid JSON, lacks either variant key, or leaves
    /// out a required field of a variant is rejected as a whole with
    /// `MalformedImport`. A missing `accentColor` falls back to the
    /// variant's default accent.
    pub fn from_document(document: &str) -> Result<Self> {
        serde_json::from_str(document).map_err(|e| BookendsError::malformed_import(e.to_string()))
    }
}
