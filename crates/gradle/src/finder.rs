use anyhow::{Context, Result};
use async_trait::async_trait;
use gradle_jvmargs_core::PropertiesFinder;
use log::debug;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub struct GradlePropertiesFinder {
    found: Vec<PathBuf>,
    relative_paths: HashMap<PathBuf, PathBuf>,
    file_names: Vec<&'static str>,
}

impl Default for GradlePropertiesFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl GradlePropertiesFinder {
    pub fn new() -> Self {
        Self {
            found: Vec::new(),
            relative_paths: HashMap::new(),
            file_names: vec!["gradle.properties"],
        }
    }
}

#[async_trait]
impl PropertiesFinder for GradlePropertiesFinder {
    fn found(&self) -> Vec<&Path> {
        self.found.iter().map(PathBuf::as_path).collect()
    }

    fn file_names(&self) -> &[&str] {
        &self.file_names
    }

    async fn visit(&mut self, path: &Path, relative_path: &Path) -> Result<()> {
        if !path.is_file() {
            return Ok(());
        }
        let file_name = path
            .file_name()
            .context(format!("File name not found - {}", path.display()))?
            .to_str()
            .context(format!("File name not found - {}", path.display()))?;
        if !self.file_names().contains(&file_name) || self.relative_paths.contains_key(path) {
            return Ok(());
        }

        debug!("Found {}", relative_path.display());
        self.found.push(path.to_path_buf());
        self.relative_paths
            .insert(path.to_path_buf(), relative_path.to_path_buf());
        Ok(())
    }

    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        self.relative_paths.get(path).cloned()
    }
}
