//! Interactive block selection
//!
//! Uses dialoguer for terminal-based interactive selection.

use std::collections::BTreeSet;
use std::path::Path;

use colored::Colorize;
use dialoguer::MultiSelect;

use senv_blocks::active_blocks;

use crate::commands::load_document;
use crate::commands::switch::apply_selection;
use crate::error::{CliError, Result};

/// Run the interactive switch flow
///
/// Shows a checklist of the file's named blocks with the currently active
/// ones pre-checked. Confirming applies the selection; aborting (escape or
/// `q`) leaves the file untouched.
pub fn run_interactive_switch(cwd: &Path, file_name: &str) -> Result<()> {
    let (path, text, doc) = load_document(cwd, file_name)?;

    let names: Vec<String> = doc
        .block_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    if names.is_empty() {
        return Err(CliError::user(format!(
            "{} has no named blocks to switch.",
            path.display()
        )));
    }

    let active = active_blocks(&doc);
    let defaults: Vec<bool> = names.iter().map(|n| active.contains(n)).collect();

    println!("{} {}", "=>".blue().bold(), path.display());
    let selection = MultiSelect::new()
        .with_prompt("Select active blocks (space to toggle, enter to confirm)")
        .items(&names)
        .defaults(&defaults)
        .interact_opt()?;

    let Some(indices) = selection else {
        println!(
            "{} Selection cancelled - file left untouched.",
            "OK".green().bold()
        );
        return Ok(());
    };

    let target: BTreeSet<String> = indices.into_iter().map(|i| names[i].clone()).collect();
    apply_selection(&path, &text, &doc, &target, false)
}
