//! Theme export target.

use async_trait::async_trait;

use crate::error::Result;

/// File name offered for exported themes.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "theme.json";

/// Offers a generated file to the user (download, save dialog, ...).
#[async_trait]
pub trait ThemeFileSink: Send + Sync {
    /// Hands over `contents` under `file_name` and returns where it went.
    async fn offer(&self, file_name: &str, contents: &str) -> Result<String>;
}
