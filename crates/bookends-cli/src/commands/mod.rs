pub mod media;
pub mod theme;

use bookends_core::appearance::{Draft, DraftField, FieldValue};
use colored::Colorize;

/// Parses a `field=value` argument.
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected FIELD=VALUE, got '{}'", s)),
    }
}

/// Turns `field=value` pairs into typed edits for draft `D`.
///
/// Every pair is checked against a scratch draft first, so a bad pair
/// rejects the whole command before any edit reaches a session.
fn resolve_assignments<D: Draft>(
    assignments: Vec<(String, String)>,
) -> bookends_core::error::Result<Vec<(DraftField, FieldValue)>> {
    let mut scratch = D::default();
    assignments
        .into_iter()
        .map(|(name, raw)| -> bookends_core::error::Result<(DraftField, FieldValue)> {
            let field = DraftField::parse(&name, D::KIND)?;
            let value = FieldValue::parse_for(field, &raw)?;
            scratch = scratch.set(field, value.clone())?;
            Ok((field, value))
        })
        .collect()
}

fn print_entries(title: &str, entries: &[(DraftField, FieldValue)]) {
    println!("{}", title.bold());
    for (field, value) in entries {
        let rendered = match value {
            FieldValue::Text(text) if text.is_empty() => "(none)".dimmed().to_string(),
            FieldValue::Flag(true) => "on".green().to_string(),
            FieldValue::Flag(false) => "off".yellow().to_string(),
            other => other.to_string(),
        };
        println!("  {:<18} {}", field.to_string().cyan(), rendered);
    }
}
