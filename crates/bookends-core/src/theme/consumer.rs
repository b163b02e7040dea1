//! Live theme consumer trait.

use crate::appearance::ThemeDraft;

/// Receives the current theme pair whenever the editor accepts a change.
///
/// Called for edits, undo, redo and import alike. Implementations must be
/// idempotent and only update presentation.
pub trait LiveThemeConsumer: Send + Sync {
    fn apply(&self, light: &ThemeDraft, dark: &ThemeDraft);
}
