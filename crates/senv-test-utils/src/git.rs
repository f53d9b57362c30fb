//! Git repository fixtures at two realism levels.
//!
//! Choose the lowest-realism fixture that satisfies your test's needs —
//! the fake is faster and has no git object store to set up.

use std::fs;
use std::path::Path;

/// Creates a minimal `.git` directory structure **without** initialising a
/// real git repository.
///
/// Realism level: **FAKE** — directory structure only, no git object store.
///
/// Use for: tests that need a `.git` marker to satisfy repository-root
/// detection but perform no real git operations.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
    fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
}

/// Initialises a real git repository with `file_name` committed to HEAD.
///
/// Realism level: **REAL WITH HISTORY** — valid object store, one commit
/// containing the given file.
///
/// Use for: tests that restore a file from its committed state.
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_committed_file(
    dir: &Path,
    file_name: &str,
    content: &str,
) -> git2::Repository {
    let repo = git2::Repository::init(dir).unwrap_or_else(|e| {
        panic!(
            "repo_with_committed_file: failed to init repository at {}: {e}",
            dir.display()
        )
    });

    fs::write(dir.join(file_name), content).unwrap_or_else(|e| {
        panic!("repo_with_committed_file: failed to write {file_name}: {e}")
    });

    {
        let mut index = repo
            .index()
            .unwrap_or_else(|e| panic!("repo_with_committed_file: failed to open index: {e}"));
        index
            .add_path(Path::new(file_name))
            .unwrap_or_else(|e| panic!("repo_with_committed_file: failed to stage {file_name}: {e}"));
        index
            .write()
            .unwrap_or_else(|e| panic!("repo_with_committed_file: failed to write index: {e}"));
        let tree_id = index
            .write_tree()
            .unwrap_or_else(|e| panic!("repo_with_committed_file: failed to write tree: {e}"));
        let tree = repo
            .find_tree(tree_id)
            .unwrap_or_else(|e| panic!("repo_with_committed_file: failed to find tree: {e}"));
        let sig = git2::Signature::now("Test User", "test@test.com")
            .unwrap_or_else(|e| panic!("repo_with_committed_file: failed to create signature: {e}"));
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap_or_else(|e| panic!("repo_with_committed_file: failed to commit: {e}"));
    }

    repo
}
