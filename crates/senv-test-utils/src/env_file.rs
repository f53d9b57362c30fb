//! Sample env file content and writers.

use std::fs;
use std::path::{Path, PathBuf};

/// A small env file with a leading unnamed section and two named blocks,
/// `Dev` (active) and `Staging` (inactive).
pub const SAMPLE: &str = "NODE_ENV=Development\n\
USER=egriff38\n\
\n\
## Dev\n\
API_TOKEN=ABC123\n\
\n\
## Staging\n\
# API_TOKEN=XYZ890\n";

/// Writes `content` as `file_name` under `dir` and returns the full path.
///
/// # Panics
/// Panics if the write fails.
pub fn write_env(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content)
        .unwrap_or_else(|e| panic!("write_env: failed to write {}: {e}", path.display()));
    path
}
