//! Non-interactive wallpaper picker for the command line.

use std::path::PathBuf;

use async_trait::async_trait;
use bookends_core::BookendsError;
use bookends_core::appearance::{FileFilter, ImagePicker};
use bookends_core::error::Result;

/// Answers the picker with a path given on the command line.
pub struct PathPicker {
    path: PathBuf,
}

impl PathPicker {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ImagePicker for PathPicker {
    async fn pick(&self, filter: &FileFilter) -> Result<Option<String>> {
        let display = self.path.display().to_string();
        if !filter.matches(&display) {
            return Err(BookendsError::FieldType {
                field: display,
                expected: "an image file (jpg, jpeg, png, gif)",
            });
        }
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(BookendsError::not_found("File", display));
        }

        let absolute = std::path::absolute(&self.path)?;
        Ok(Some(absolute.display().to_string()))
    }
}
