//! Tracing setup for the `bookends` binary.

use std::path::PathBuf;

use bookends_core::config::LoggingSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable that overrides `[logging] level`.
pub const LOG_ENV: &str = "BOOKENDS_LOG";

const LOG_FILE_PREFIX: &str = "bookends.log";

/// Installs the global subscriber.
///
/// Logs go to stderr, and additionally to a daily file under `logs_dir`
/// when `[logging] file` is set. The returned guard flushes the file
/// writer on drop and must be held until exit.
pub fn init(settings: &LoggingSettings, logs_dir: Option<PathBuf>) -> Option<WorkerGuard> {
    let filter = build_filter(&settings.level, std::env::var(LOG_ENV).ok());

    let (file_layer, guard) = match logs_dir.filter(|_| settings.file) {
        Some(dir) => match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer().with_ansi(false).with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Failed to create log directory {}: {}", dir.display(), e);
                (None, None)
            }
        },
        None => (None, None),
    };

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Failed to initialise logging: {}", e);
    }

    guard
}

/// The override directive wins over the configured level.
fn build_filter(level: &str, override_directive: Option<String>) -> EnvFilter {
    match override_directive {
        Some(directive) if !directive.trim().is_empty() => EnvFilter::new(directive),
        _ => EnvFilter::new(level),
    }
}
