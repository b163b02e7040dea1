pub mod config_service;
pub mod file_sink;
pub mod paths;
pub mod storage;
pub mod toml_media_repository;
pub mod toml_theme_repository;

pub use crate::config_service::ConfigService;
pub use crate::file_sink::DirectoryFileSink;
pub use crate::paths::BookendsPaths;
pub use crate::toml_media_repository::TomlMediaRepository;
pub use crate::toml_theme_repository::TomlThemeRepository;
