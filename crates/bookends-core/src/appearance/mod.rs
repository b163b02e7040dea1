//! Appearance domain: drafts, fields and the theme document.
//!
//! # Module Structure
//!
//! - `field`: field names and values
//! - `draft`: `ThemeDraft` / `MediaDraft` and the `Draft` trait
//! - `pair`: light/dark `ThemePair` and the JSON interchange document
//! - `picker`: wallpaper file filter and picker trait

mod draft;
mod field;
mod pair;
mod picker;

pub use draft::{
    DEFAULT_FONT_BODY, DEFAULT_FONT_TITLE, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR,
    DEFAULT_TEXT_COLOR, Draft, MediaDraft, ThemeDraft,
};
pub use field::{DraftField, FieldKind, FieldValue};
pub use pair::{ThemePair, Variant};
pub use picker::{FileFilter, IMAGE_FILTER, ImagePicker};
