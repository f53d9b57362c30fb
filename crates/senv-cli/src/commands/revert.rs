//! Revert command implementation
//!
//! Hands the file to the git collaborator to restore its last committed
//! content. The block engine is not involved.

use std::path::Path;

use colored::Colorize;

use crate::error::{CliError, Result};

/// Run the revert command
pub fn run_revert(cwd: &Path, file_name: &str) -> Result<()> {
    let path = senv_fs::locate_env_file(cwd, file_name).ok_or_else(|| {
        CliError::user(format!(
            "No {} file found in {} or at the repository root.",
            file_name,
            cwd.display()
        ))
    })?;

    senv_git::restore_from_head(&path)?;

    println!(
        "{} {} restored to its last committed content.",
        "OK".green().bold(),
        path.display()
    );
    Ok(())
}
