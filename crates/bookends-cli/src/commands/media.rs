use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use bookends_application::{MediaCustomizationSession, SaveKind};
use bookends_core::appearance::{Draft, MediaDraft};
use bookends_infrastructure::{BookendsPaths, TomlMediaRepository};
use clap::Subcommand;
use colored::Colorize;

use super::{parse_assignment, print_entries, resolve_assignments};
use crate::picker::PathPicker;

#[derive(Subcommand)]
pub enum MediaAction {
    /// Show the journal's customization
    Show,
    /// Set fields (FIELD=VALUE) and save
    Set {
        #[arg(value_parser = parse_assignment, required = true)]
        assignments: Vec<(String, String)>,
    },
    /// Use an image file as the journal wallpaper and save
    Wallpaper { path: PathBuf },
}

pub async fn run(paths: &BookendsPaths, journal_id: &str, action: MediaAction) -> Result<()> {
    let repository = Arc::new(TomlMediaRepository::new(paths)?);
    let mut session = MediaCustomizationSession::open(journal_id, repository).await;

    match action {
        MediaAction::Show => {
            print_entries(&format!("Journal {}", journal_id), &session.draft().entries());
            session.close();
        }
        MediaAction::Set { assignments } => {
            for (field, value) in resolve_assignments::<MediaDraft>(assignments)? {
                session.edit(field, value)?;
            }
            report(journal_id, session.save_and_close().await?);
        }
        MediaAction::Wallpaper { path } => {
            session.choose_wallpaper(&PathPicker::new(path)).await?;
            println!("Wallpaper: {}", session.draft().wallpaper_image);
            report(journal_id, session.save_and_close().await?);
        }
    }

    Ok(())
}

fn report(journal_id: &str, kind: SaveKind) {
    let verb = match kind {
        SaveKind::Created => "created",
        SaveKind::Updated => "updated",
    };
    println!("{} Customization {} for journal {}", "✓".green(), verb, journal_id);
}
