pub mod appearance;
pub mod config;
pub mod error;
pub mod history;
pub mod media;
pub mod theme;

// Re-export common error type
pub use error::BookendsError;
