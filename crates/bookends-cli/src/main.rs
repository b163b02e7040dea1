use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use bookends_infrastructure::ConfigService;

mod commands;
mod logging;
mod picker;

use commands::media::MediaAction;
use commands::theme::ThemeAction;

#[derive(Parser)]
#[command(name = "bookends")]
#[command(about = "Bookends CLI - journal customization and application theme", long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Customize one journal
    Media {
        /// Journal identifier
        journal_id: String,
        #[command(subcommand)]
        action: MediaAction,
    },
    /// Edit the application theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match cli.config {
        Some(path) => ConfigService::with_path(Some(path)),
        None => ConfigService::new(),
    };
    let config = config_service.get_config();
    let paths = config_service.paths();
    let _guard = logging::init(&config.logging, paths.logs_dir().ok());
    tracing::debug!("[Cli] Data directory: {:?}", paths.data_dir().ok());

    match cli.command {
        Commands::Media { journal_id, action } => {
            commands::media::run(&paths, &journal_id, action).await?
        }
        Commands::Theme { action } => commands::theme::run(&paths, &config.export, action).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookends_core::appearance::Variant;

    #[test]
    fn test_parse_media_set() {
        let cli = Cli::try_parse_from([
            "bookends",
            "media",
            "j1",
            "set",
            "fontTitle=Georgia",
            "customEnabled=on",
        ])
        .unwrap();

        match cli.command {
            Commands::Media { journal_id, action: MediaAction::Set { assignments } } => {
                assert_eq!(journal_id, "j1");
                assert_eq!(
                    assignments,
                    vec![
                        ("fontTitle".to_string(), "Georgia".to_string()),
                        ("customEnabled".to_string(), "on".to_string()),
                    ]
                );
            }
            _ => panic!("expected media set"),
        }
    }

    #[test]
    fn test_parse_theme_set_variant() {
        let cli = Cli::try_parse_from([
            "bookends",
            "--config",
            "/tmp/bookends.toml",
            "theme",
            "set",
            "Dark",
            "accentColor=#ff8800",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/bookends.toml")));
        match cli.command {
            Commands::Theme { action: ThemeAction::Set { variant, .. } } => {
                assert_eq!(variant, Variant::Dark)
            }
            _ => panic!("expected theme set"),
        }
    }

    #[test]
    fn test_rejects_assignment_without_value() {
        assert!(Cli::try_parse_from(["bookends", "media", "j1", "set", "fontTitle"]).is_err());
    }
}
