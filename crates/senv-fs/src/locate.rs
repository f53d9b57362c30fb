//! Locating the env file to operate on.
//!
//! The file is looked up in the starting directory first. Failing that, the
//! search ascends to the root of the enclosing git repository — the nearest
//! ancestor containing a `.git` entry — and checks there. No other
//! directories are searched.

use std::path::{Path, PathBuf};

/// File name used when the caller does not override it.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Find `file_name` in `start`, or at the enclosing repository root.
pub fn locate_env_file(start: &Path, file_name: &str) -> Option<PathBuf> {
    let local = start.join(file_name);
    if local.is_file() {
        tracing::debug!(path = %local.display(), "found env file in working directory");
        return Some(local);
    }

    let root = repo_root(start)?;
    let candidate = root.join(file_name);
    if candidate.is_file() {
        tracing::debug!(path = %candidate.display(), "found env file at repository root");
        return Some(candidate);
    }
    None
}

/// The nearest ancestor of `start` (inclusive) containing a `.git` entry.
fn repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
