//! Error types for senv-git

use std::path::PathBuf;

/// Result type for senv-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in senv-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] senv_fs::Error),

    #[error("{path} is not inside a git repository")]
    NotInRepository { path: PathBuf },

    #[error("{path} has no committed version to restore")]
    NotTracked { path: PathBuf },
}
