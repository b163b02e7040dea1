//! Storage layer for atomic record files.

mod atomic_toml;

pub use atomic_toml::{AtomicTomlFile, StorageError};
