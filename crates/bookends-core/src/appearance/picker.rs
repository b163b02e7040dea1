//! Wallpaper file selection.

use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;

/// A named set of accepted file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

/// Filter offered when picking a wallpaper.
pub const IMAGE_FILTER: FileFilter = FileFilter {
    name: "Images",
    extensions: &["jpg", "jpeg", "png", "gif"],
};

impl FileFilter {
    /// Checks the extension of `path` (case-insensitive).
    pub fn matches(&self, path: &str) -> bool {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

/// Single-file selection dialog.
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Asks the user for one file matching `filter`.
    ///
    /// Returns `Ok(None)` when the user cancels.
    async fn pick(&self, filter: &FileFilter) -> Result<Option<String>>;
}
