//! Command implementations for senv-cli

pub mod list;
pub mod revert;
pub mod switch;

pub use list::run_list;
pub use revert::run_revert;
pub use switch::run_switch;

use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::Shell;

use senv_blocks::Document;

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Locate the env file, read it, and segment it.
///
/// Returns the resolved path, the raw text as read, and the parsed
/// document. The raw text is kept so that callers can diff or compare
/// against the rewrite without re-joining.
pub(crate) fn load_document(cwd: &Path, file_name: &str) -> Result<(PathBuf, String, Document)> {
    let path = senv_fs::locate_env_file(cwd, file_name).ok_or_else(|| {
        CliError::user(format!(
            "No {} file found in {} or at the repository root.",
            file_name,
            cwd.display()
        ))
    })?;
    let text = senv_fs::read_text(&path)?;
    let doc = senv_blocks::segment(&text);
    Ok((path, text, doc))
}

/// Run the completions command
pub fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
