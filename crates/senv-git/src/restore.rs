//! Restoring a file to its HEAD content.

use std::path::Path;

use git2::Repository;

use crate::{Error, Result};

/// Replace `path` with the content it has in the HEAD commit.
///
/// Discovers the enclosing repository, resolves the file's blob in the
/// HEAD tree, and writes it back through an atomic replace. Works whether
/// or not the file currently exists in the working tree.
///
/// # Errors
/// Returns [`Error::NotInRepository`] when `path` is not under a git
/// working tree, [`Error::NotTracked`] when HEAD has no entry for it, and
/// [`Error::Git`] for repositories without any commit yet.
pub fn restore_from_head(path: &Path) -> Result<()> {
    let not_in_repository = || Error::NotInRepository {
        path: path.to_path_buf(),
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let repo = Repository::discover(parent).map_err(|_| not_in_repository())?;
    let workdir = repo.workdir().ok_or_else(not_in_repository)?;

    // Canonicalize the directories (not the file, which may be deleted) to
    // compute the repository-relative path reliably.
    let parent = parent
        .canonicalize()
        .map_err(|e| senv_fs::Error::io(parent, e))?;
    let workdir = workdir
        .canonicalize()
        .map_err(|e| senv_fs::Error::io(workdir, e))?;
    let file_name = path.file_name().ok_or_else(not_in_repository)?;
    let absolute = parent.join(file_name);
    let relative = absolute
        .strip_prefix(&workdir)
        .map_err(|_| not_in_repository())?;

    let tree = repo.head()?.peel_to_tree()?;
    let entry = tree.get_path(relative).map_err(|_| Error::NotTracked {
        path: path.to_path_buf(),
    })?;
    let blob = repo.find_blob(entry.id())?;

    senv_fs::write_atomic(&absolute, blob.content())?;
    tracing::debug!(
        path = %absolute.display(),
        bytes = blob.content().len(),
        "restored file from HEAD"
    );
    Ok(())
}
