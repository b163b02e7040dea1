use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bookends_application::{ActiveTheme, ThemeEditingSession};
use bookends_core::appearance::{Draft, ThemeDraft, Variant};
use bookends_core::config::ExportSettings;
use bookends_core::theme::{LiveThemeConsumer, ThemeRepository};
use bookends_infrastructure::{BookendsPaths, DirectoryFileSink, TomlThemeRepository};
use clap::Subcommand;
use colored::Colorize;

use super::{parse_assignment, print_entries, resolve_assignments};
use crate::picker::PathPicker;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Show the light and dark theme
    Show {
        /// Only show one variant
        #[arg(long)]
        variant: Option<Variant>,
    },
    /// Set fields (FIELD=VALUE) of one variant
    Set {
        variant: Variant,
        #[arg(value_parser = parse_assignment, required = true)]
        assignments: Vec<(String, String)>,
    },
    /// Use an image file as the wallpaper of one variant
    Wallpaper { variant: Variant, path: PathBuf },
    /// Write the theme as a JSON document
    Export {
        /// Target directory (defaults to [export] directory, then Downloads)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Replace both variants with a JSON document
    Import { path: PathBuf },
}

pub async fn run(paths: &BookendsPaths, export: &ExportSettings, action: ThemeAction) -> Result<()> {
    let repository: Arc<dyn ThemeRepository> = Arc::new(TomlThemeRepository::new(paths)?);
    let active = Arc::new(ActiveTheme::default());
    let mut session = ThemeEditingSession::open(Arc::clone(&repository), active.clone()).await;

    // Start from the stored pair so only real edits get written back.
    active.apply(session.light(), session.dark());
    let persistence = active.spawn_persistence(Arc::clone(&repository));

    let outcome = execute(&mut session, paths, export, action).await;

    session.close();
    drop(session);
    drop(Arc::into_inner(active));
    persistence.await.context("Theme persistence task failed")?;
    outcome
}

async fn execute(
    session: &mut ThemeEditingSession,
    paths: &BookendsPaths,
    export: &ExportSettings,
    action: ThemeAction,
) -> Result<()> {
    match action {
        ThemeAction::Show { variant } => {
            let variants = match variant {
                Some(v) => vec![v],
                None => vec![Variant::Light, Variant::Dark],
            };
            for v in variants {
                show_variant(v, session.current().variant(v));
            }
        }
        ThemeAction::Set { variant, assignments } => {
            for (field, value) in resolve_assignments::<ThemeDraft>(assignments)? {
                session.edit(variant, field, value)?;
            }
            show_variant(variant, session.current().variant(variant));
        }
        ThemeAction::Wallpaper { variant, path } => {
            session.choose_wallpaper(variant, &PathPicker::new(path)).await?;
            println!(
                "{} {} wallpaper: {}",
                "✓".green(),
                variant,
                session.current().variant(variant).wallpaper_image
            );
        }
        ThemeAction::Export { dir } => {
            let directory = match dir.or_else(|| export.directory.clone()) {
                Some(dir) => dir,
                None => paths.default_export_dir()?,
            };
            let sink = DirectoryFileSink::new(directory);
            let location = session.export_as(&sink, &export.file_name).await?;
            println!("{} Theme exported to {}", "✓".green(), location);
        }
        ThemeAction::Import { path } => {
            session
                .import_file(&path)
                .await
                .with_context(|| format!("Failed to import {}", path.display()))?;
            println!("{} Theme imported from {}", "✓".green(), path.display());
        }
    }

    Ok(())
}

fn show_variant(variant: Variant, draft: &ThemeDraft) {
    print_entries(&format!("{} theme", variant), &draft.entries());
}
