//! Switch command implementation
//!
//! Rewrites the env file so that exactly the requested blocks are active.

use std::collections::BTreeSet;
use std::path::Path;

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use senv_blocks::{Document, active_blocks, apply};

use crate::commands::load_document;
use crate::error::Result;

/// Run the switch command
pub fn run_switch(cwd: &Path, file_name: &str, names: &[String], dry_run: bool) -> Result<()> {
    let (path, text, doc) = load_document(cwd, file_name)?;

    let known = doc.block_names();
    for name in names {
        if !known.contains(&name.as_str()) {
            eprintln!(
                "{} Unknown block '{}'. Known blocks: {}",
                "warning:".yellow().bold(),
                name,
                if known.is_empty() {
                    "(none)".to_string()
                } else {
                    known.join(", ")
                }
            );
        }
    }

    let target: BTreeSet<String> = names.iter().cloned().collect();
    apply_selection(&path, &text, &doc, &target, dry_run)
}

/// Apply `target` to the document and persist the rewrite.
///
/// Shared by the switch command and the interactive flow. With `dry_run`
/// the rewrite is shown as a diff and nothing is written.
pub(crate) fn apply_selection(
    path: &Path,
    original: &str,
    doc: &Document,
    target: &BTreeSet<String>,
    dry_run: bool,
) -> Result<()> {
    let updated = apply(doc, target);

    if updated == original {
        println!("{} Nothing to change.", "OK".green().bold());
        return Ok(());
    }

    if dry_run {
        print_diff(original, &updated);
        println!("{} Dry run - no changes written.", "OK".green().bold());
        return Ok(());
    }

    senv_fs::write_text(path, &updated)?;

    let now_active = active_blocks(&senv_blocks::segment(&updated));
    let summary = if now_active.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        now_active
            .iter()
            .map(|n| n.as_str().cyan().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("{} Active blocks: {}", "OK".green().bold(), summary);
    Ok(())
}

/// Print a line diff of the rewrite, additions green, removals red.
fn print_diff(original: &str, updated: &str) {
    let diff = TextDiff::from_lines(original, updated);
    for change in diff.iter_all_changes() {
        let line = match change.tag() {
            ChangeTag::Delete => format!("-{}", change.value()).red().to_string(),
            ChangeTag::Insert => format!("+{}", change.value()).green().to_string(),
            ChangeTag::Equal => format!(" {}", change.value()),
        };
        print!("{}", line);
        if change.missing_newline() {
            println!();
        }
    }
}
