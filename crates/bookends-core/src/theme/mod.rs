//! Application theme boundary traits.
//!
//! - `repository`: where the light/dark pair is persisted as app settings
//! - `consumer`: receives the live pair on every accepted change
//! - `export`: hands an exported theme document to the user

mod consumer;
mod export;
mod repository;

pub use consumer::LiveThemeConsumer;
pub use export::{DEFAULT_EXPORT_FILE_NAME, ThemeFileSink};
pub use repository::ThemeRepository;
