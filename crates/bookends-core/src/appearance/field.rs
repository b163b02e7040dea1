//! Draft field names and values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{BookendsError, Result};

/// The fixed set of field names a draft can carry.
///
/// The string form is the canonical camelCase name used in exported
/// theme documents (`primaryColor`, `wallpaperEnabled`, ...).
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
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DraftField {
    PrimaryColor,
    SecondaryColor,
    /// Theme drafts only.
    AccentColor,
    TextColor,
    FontTitle,
    FontBody,
    WallpaperImage,
    WallpaperEnabled,
    /// Media drafts only.
    CustomEnabled,
}

/// What kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Hex encoded RGB, e.g. `#ffffff`.
    Color,
    /// Font family name.
    Font,
    /// File path or URL, possibly empty.
    Path,
    Flag,
}

impl DraftField {
    /// Parses a canonical field name.
    ///
    /// `draft` names the draft the caller is addressing and only shows up
    /// in the error.
    pub fn parse(name: &str, draft: &'static str) -> Result<Self> {
        Self::from_str(name).map_err(|_| BookendsError::UnknownField {
            field: name.to_string(),
            draft,
        })
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::PrimaryColor | Self::SecondaryColor | Self::AccentColor | Self::TextColor => {
                FieldKind::Color
            }
            Self::FontTitle | Self::FontBody => FieldKind::Font,
            Self::WallpaperImage => FieldKind::Path,
            Self::WallpaperEnabled | Self::CustomEnabled => FieldKind::Flag,
        }
    }

    pub fn is_flag(self) -> bool {
        self.kind() == FieldKind::Flag
    }
}

/// A value assigned to a draft field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    /// Parses user input for `field`.
    ///
    /// Flag fields accept `true/false`, `on/off`, `yes/no` and `1/0`;
    /// every other field takes the input verbatim.
    pub fn parse_for(field: DraftField, raw: &str) -> Result<Self> {
        if !field.is_flag() {
            return Ok(Self::Text(raw.to_string()));
        }

        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(Self::Flag(true)),
            "false" | "off" | "no" | "0" => Ok(Self::Flag(false)),
            _ => Err(BookendsError::FieldType {
                field: field.to_string(),
                expected: "boolean",
            }),
        }
    }

    pub(crate) fn into_text(self, field: DraftField) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Flag(_) => Err(BookendsError::FieldType {
                field: field.to_string(),
                expected: "text",
            }),
        }
    }

    pub(crate) fn into_flag(self, field: DraftField) -> Result<bool> {
        match self {
            Self::Flag(flag) => Ok(flag),
            Self::Text(_) => Err(BookendsError::FieldType {
                field: field.to_string(),
                expected: "boolean",
            }),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{}", flag),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        assert_eq!(DraftField::PrimaryColor.as_ref(), "primaryColor");
        assert_eq!(DraftField::WallpaperEnabled.to_string(), "wallpaperEnabled");
        assert_eq!(
            DraftField::parse("fontTitle", "theme").unwrap(),
            DraftField::FontTitle
        );
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = DraftField::parse("borderColor", "theme").unwrap_err();
        assert_eq!(
            err,
            BookendsError::UnknownField {
                field: "borderColor".to_string(),
                draft: "theme",
            }
        );
    }

    #[test]
    fn test_parse_flag_value() {
        assert_eq!(
            FieldValue::parse_for(DraftField::WallpaperEnabled, "on").unwrap(),
            FieldValue::Flag(true)
        );
        assert_eq!(
            FieldValue::parse_for(DraftField::CustomEnabled, "0").unwrap(),
            FieldValue::Flag(false)
        );
        assert!(FieldValue::parse_for(DraftField::CustomEnabled, "maybe").is_err());
    }

    #[test]
    fn test_parse_text_value_is_verbatim() {
        assert_eq!(
            FieldValue::parse_for(DraftField::FontBody, " Georgia ").unwrap(),
            FieldValue::Text(" Georgia ".to_string())
        );
    }
}
