use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Path of `absolute_path` relative to `root`.
///
/// # Errors
/// Returns error if `absolute_path` is not inside `root`.
pub fn get_relative_path(root: &Path, absolute_path: &Path) -> Result<PathBuf> {
    absolute_path
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .context(format!(
            "Failed to get relative path - {} is not inside {}",
            absolute_path.display(),
            root.display()
        ))
}
