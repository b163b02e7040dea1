//! Atomic TOML record files.
//!
//! Each record lives in its own file. Writes go to a temporary sibling, are
//! fsynced and then renamed over the target, so a reader never observes a
//! half-written record. `create` and `replace` hold an exclusive lock while
//! they check whether the record exists.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use bookends_core::BookendsError;

/// Errors that can occur during atomic TOML operations.
#[derive(Debug)]
pub enum StorageError {
    /// File I/O error.
    Io(std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
    /// TOML serialization error.
    Serialize(toml::ser::Error),
    /// File locking error.
    Lock(String),
    /// `create` found an existing record.
    Exists(PathBuf),
    /// `replace` found no record.
    Missing(PathBuf),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {}", e),
            StorageError::Parse(e) => write!(f, "TOML parse error: {}", e),
            StorageError::Serialize(e) => write!(f, "TOML serialization error: {}", e),
            StorageError::Lock(e) => write!(f, "Lock error: {}", e),
            StorageError::Exists(p) => write!(f, "Record already exists: {}", p.display()),
            StorageError::Missing(p) => write!(f, "Record not found: {}", p.display()),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<toml::de::Error> for StorageError {
    fn from(e: toml::de::Error) -> Self {
        StorageError::Parse(e)
    }
}

impl From<toml::ser::Error> for StorageError {
    fn from(e: toml::ser::Error) -> Self {
        StorageError::Serialize(e)
    }
}

impl StorageError {
    /// Maps a storage error to the domain error for `entity_type`/`id`.
    pub fn into_domain(self, entity_type: &'static str, id: &str) -> BookendsError {
        match self {
            StorageError::Io(e) => e.into(),
            StorageError::Parse(e) => e.into(),
            StorageError::Serialize(e) => e.into(),
            StorageError::Lock(message) => BookendsError::data_access(message),
            StorageError::Exists(_) => BookendsError::already_exists(entity_type, id),
            StorageError::Missing(_) => BookendsError::not_found(entity_type, id),
        }
    }
}

/// A handle to one TOML record file.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(toml::from_str(&content)?))
    }

    /// Writes the record, whether or not one exists.
    pub fn save(&self, data: &T) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Writes a new record. Fails with `Exists` if one is already stored.
    pub fn create(&self, data: &T) -> Result<(), StorageError> {
        let _lock = FileLock::acquire(&self.path)?;
        if self.load()?.is_some() {
            return Err(StorageError::Exists(self.path.clone()));
        }
        self.save(data)
    }

    /// Overwrites an existing record. Fails with `Missing` if none is stored.
    pub fn replace(&self, data: &T) -> Result<(), StorageError> {
        let _lock = FileLock::acquire(&self.path)?;
        if self.load()?.is_none() {
            return Err(StorageError::Missing(self.path.clone()));
        }
        self.save(data)
    }

    fn temp_path(&self) -> Result<PathBuf, StorageError> {
        let invalid = |message: &str| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                message.to_string(),
            ))
        };

        let parent = self
            .path
            .parent()
            .ok_or_else(|| invalid("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| invalid("Path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock on `<record>.lock`, released on drop.
/// Exclusive lock on `<path>.lock`, released when the handle is dropped.
///
/// The lock file itself stays on disk so every process locks the same inode.
struct FileLock {
    #[allow(dead_code)]
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, StorageError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| StorageError::Lock(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file })
    }
}
