//! List command implementation
//!
//! Shows each named block with its activation state and variable count.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use senv_blocks::{Document, Role, active_blocks};

use crate::commands::load_document;
use crate::error::Result;

/// One named block's state, aggregated across duplicate headers.
#[derive(Debug, Serialize)]
struct BlockStatus {
    name: String,
    active: bool,
    variables: usize,
}

/// Run the list command
pub fn run_list(cwd: &Path, file_name: &str, json: bool) -> Result<()> {
    let (path, _text, doc) = load_document(cwd, file_name)?;
    let statuses = collect_statuses(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    println!("{} {}", "=>".blue().bold(), path.display());
    if statuses.is_empty() {
        println!("  (no blocks)");
        return Ok(());
    }
    for status in &statuses {
        let marker = if status.active {
            "[x]".green().bold()
        } else {
            "[ ]".dimmed()
        };
        let label = match status.variables {
            1 => "variable",
            _ => "variables",
        };
        println!(
            "  {} {} ({} {})",
            marker,
            status.name.as_str().cyan(),
            status.variables,
            label
        );
    }
    Ok(())
}

/// Aggregates per unique name in first-occurrence order.
fn collect_statuses(doc: &Document) -> Vec<BlockStatus> {
    let active = active_blocks(doc);
    doc.block_names()
        .into_iter()
        .map(|name| BlockStatus {
            name: name.to_string(),
            active: active.contains(name),
            variables: count_variables(doc, name),
        })
        .collect()
}

fn count_variables(doc: &Document, name: &str) -> usize {
    doc.blocks()
        .iter()
        .filter(|b| b.name.as_named() == Some(name))
        .flat_map(|b| &b.lines)
        .filter(|&&ord| matches!(doc.lines()[ord].role, Role::Variable { .. }))
        .count()
}
