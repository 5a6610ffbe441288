use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

/// Visitor for discovering properties files while walking a project tree.
///
/// `visit` is called for every file found by the walk; implementations keep the ones
/// they recognise and expose them through `found`.
#[async_trait]
pub trait PropertiesFinder: std::fmt::Debug + Send + Sync {
    /// Absolute paths of the files found so far, in discovery order.
    fn found(&self) -> Vec<&Path>;
    /// File names this finder recognises.
    fn file_names(&self) -> &[&str];
    /// # Errors
    /// Returns error if the file visitation fails.
    async fn visit(&mut self, path: &Path, relative_path: &Path) -> Result<()>;
    /// Relative path recorded for a found file.
    fn relative_path(&self, path: &Path) -> Option<PathBuf>;
}
