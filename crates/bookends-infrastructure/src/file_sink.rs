//! Export target that writes offered files into a directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use bookends_core::BookendsError;
use bookends_core::error::Result;
use bookends_core::theme::ThemeFileSink;

/// Writes exported files into a fixed directory (usually Downloads).
#[derive(Debug, Clone)]
pub struct DirectoryFileSink {
    directory: PathBuf,
}

impl DirectoryFileSink {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[async_trait]
impl ThemeFileSink for DirectoryFileSink {
    async fn offer(&self, file_name: &str, contents: &str) -> Result<String> {
        // Only a bare file name is accepted; the directory is ours to choose.
        let name = Path::new(file_name)
            .file_name()
            .filter(|name| name.len() == file_name.len())
            .ok_or_else(|| BookendsError::io(format!("Invalid export file name: {}", file_name)))?;

        fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| BookendsError::io(format!("Failed to create directory: {}", e)))?;

        let target = self.directory.join(name);
        fs::write(&target, contents)
            .await
            .map_err(|e| BookendsError::io(format!("Failed to write {}: {}", target.display(), e)))?;

        tracing::info!("[FileSink] Wrote {}", target.display());
        Ok(target.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_offer_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let sink = DirectoryFileSink::new(temp_dir.path().join("downloads"));

        let location = sink.offer("theme.json", "{}").await.unwrap();

        assert!(location.ends_with("theme.json"));
        let written = std::fs::read_to_string(temp_dir.path().join("downloads/theme.json")).unwrap();
        assert_eq!(written, "{}");
    }

    #[tokio::test]
    async fn test_offer_rejects_paths() {
        let temp_dir = TempDir::new().unwrap();
        let sink = DirectoryFileSink::new(temp_dir.path().to_path_buf());

        assert!(sink.offer("../theme.json", "{}").await.is_err());
        assert!(sink.offer("", "{}").await.is_err());
    }
}
