//! Linear undo/redo history.
//!
//! The theme editor keeps one timeline for both variants: an edit to either
//! side records a whole [`ThemePair`](crate::appearance::ThemePair), so undo
//! always steps back exactly one accepted change regardless of which variant
//! it touched.

use crate::appearance::ThemePair;

/// History of theme pairs edited in one settings session.
pub type ThemeHistory = HistoryStack<ThemePair>;

/// An ordered list of snapshots plus a cursor at the live one.
///
/// Invariant: the stack is never empty and `index < entries.len()`.
/// There is no depth limit.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStack<T> {
    entries: Vec<T>,
    index: usize,
}

impl<T: Clone> HistoryStack<T> {
    /// Starts a history whose only entry is `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &T {
        &self.entries[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: a history always holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Appends a snapshot after the cursor.
    ///
    /// Everything past the cursor (the redo branch) is dropped first.
    pub fn record(&mut self, snapshot: T) {
        self.entries.truncate(self.index + 1);
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;
    }

    /// Moves the cursor back one step. `None` when already at the start.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Moves the cursor forward one step. `None` when already at the end.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    /// Replaces the whole history with a single entry.
    pub fn reset(&mut self, snapshot: T) {
        self.entries.clear();
        self.entries.push(snapshot);
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history() {
        let history = HistoryStack::new("a");
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert_eq!(*history.current(), "a");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo() {
        let mut history = HistoryStack::new(0);
        history.record(1);
        history.record(2);

        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.undo(), Some(&0));
        assert_eq!(history.undo(), None);
        assert_eq!(history.index(), 0);

        assert_eq!(history.redo(), Some(&1));
        assert_eq!(history.redo(), Some(&2));
        assert_eq!(history.redo(), None);
        assert_eq!(history.index(), 2);
    }

    #[test]
    fn test_record_after_undo_drops_redo_branch() {
        let mut history = HistoryStack::new(0);
        history.record(1);
        history.record(2);
        history.undo();
        history.undo();

        history.record(10);

        assert_eq!(history.len(), 2);
        assert_eq!(*history.current(), 10);
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
        assert_eq!(history.undo(), Some(&0));
    }

    #[test]
    fn test_reset() {
        let mut history = HistoryStack::new(0);
        history.record(1);
        history.record(2);
        history.undo();

        history.reset(7);

        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert_eq!(*history.current(), 7);
    }

    #[test]
    fn test_theme_history_tracks_both_variants() {
        use crate::appearance::{Draft, DraftField, Variant};

        let initial = ThemePair::default();
        let mut history = ThemeHistory::new(initial.clone());

        let light = initial.light.set(DraftField::PrimaryColor, "#111111").unwrap();
        let after_light = initial.with_variant(Variant::Light, light);
        history.record(after_light.clone());

        let dark = after_light.dark.set(DraftField::FontBody, "Lora").unwrap();
        history.record(after_light.with_variant(Variant::Dark, dark));

        assert_eq!(history.undo(), Some(&after_light));
        assert_eq!(history.undo(), Some(&initial));
    }
}
