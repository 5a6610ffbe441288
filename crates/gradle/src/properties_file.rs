use anyhow::{Context, Result};
use gradle_jvmargs_core::{ApplyResult, JVM_ARGS_KEY, MergeRequest, PluginHistory};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use tokio::fs::{read_to_string, write};

use crate::jvm_args::{apply_jvm_args, find_jvm_args};
use crate::normalizer::normalize_file;
use crate::properties::{PropertiesEntry, format_properties, line_ending, parse_properties};

/// A `gradle.properties` file loaded into memory.
///
/// Holds the parsed entries and the run-once history of plugins applied to it.
#[derive(Debug)]
pub struct GradlePropertiesFile {
    path: PathBuf,
    relative_path: PathBuf,
    entries: Vec<PropertiesEntry>,
    line_ending: &'static str,
    history: PluginHistory,
}

impl GradlePropertiesFile {
    #[must_use]
    pub fn new(path: PathBuf, relative_path: PathBuf, entries: Vec<PropertiesEntry>) -> Self {
        Self {
            path,
            relative_path,
            entries,
            line_ending: "\n",
            history: PluginHistory::new(),
        }
    }

    /// # Errors
    /// Returns error if the file cannot be read.
    pub async fn load(path: &Path, relative_path: &Path) -> Result<Self> {
        let content = read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self {
            line_ending: line_ending(&content),
            ..Self::new(
                path.to_path_buf(),
                relative_path.to_path_buf(),
                parse_properties(&content),
            )
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    #[must_use]
    pub fn entries(&self) -> &[PropertiesEntry] {
        &self.entries
    }

    #[must_use]
    pub fn jvm_args(&self) -> Option<&str> {
        find_jvm_args(&self.entries)
    }

    /// Whether more than one `org.gradle.jvmargs` property is present.
    #[must_use]
    pub fn has_duplicate_jvm_args(&self) -> bool {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, PropertiesEntry::Property { key, .. } if key == JVM_ARGS_KEY))
            .count()
            > 1
    }

    /// Apply a merge request unless the plugin identified by `name`/`version` already ran
    /// against this file, in which case the current value is reported as skipped.
    pub fn apply(
        &mut self,
        name: &str,
        version: &str,
        request: &MergeRequest,
        strict: bool,
    ) -> ApplyResult {
        if !self.history.run_once(name, version) {
            debug!(
                "{name} {} already applied to {}, skipping",
                self.history.version_of(name).unwrap_or(version),
                self.path.display()
            );
            let current = self.jvm_args().map(ToString::to_string);
            return ApplyResult::new(
                self.path.clone(),
                self.relative_path.clone(),
                current.clone(),
                current.unwrap_or_default(),
                true,
                strict,
            );
        }

        let change = apply_jvm_args(&mut self.entries, request);
        debug!(
            "{}: {:?} -> {:?}",
            self.path.display(),
            change.previous,
            change.value
        );
        ApplyResult::new(
            self.path.clone(),
            self.relative_path.clone(),
            change.previous,
            change.value,
            false,
            strict,
        )
    }

    /// # Errors
    /// Returns error if the file cannot be written.
    pub async fn save(&self) -> Result<()> {
        write(&self.path, format_properties(&self.entries, self.line_ending))
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    /// Rewrite the file on disk so only the normalized `org.gradle.jvmargs` line survives.
    ///
    /// Failures are logged and swallowed so they never abort the surrounding pass.
    pub async fn normalize_on_disk(&self) {
        let Some(value) = self.jvm_args() else {
            return;
        };
        match normalize_file(&self.path, value).await {
            Ok(true) => debug!("Normalized {} on disk", self.path.display()),
            Ok(false) => {}
            Err(e) => warn!("Skipping strict normalization of {}: {e:#}", self.path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradle_jvmargs_core::PLUGIN_NAME;
    use std::fs;
    use tempfile::TempDir;

    async fn load_with(content: &str) -> (TempDir, GradlePropertiesFile) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gradle.properties");
        fs::write(&path, content).unwrap();
        let file = GradlePropertiesFile::load(&path, Path::new("gradle.properties"))
            .await
            .unwrap();
        (temp_dir, file)
    }

    #[tokio::test]
    async fn test_load_apply_save() {
        let (temp_dir, mut file) = load_with(
            "# Gradle settings\norg.gradle.jvmargs=-Xmx1024m -XX:MaxMetaspaceSize=256m -Dfoo=bar\nandroid.useAndroidX=true\n",
        )
        .await;

        let result = file.apply(PLUGIN_NAME, "0.1.0", &MergeRequest::default(), false);
        assert!(result.is_changed());
        assert_eq!(
            result.value(),
            "-Xmx2048m -XX:MaxMetaspaceSize=512m -Dfoo=bar"
        );
        assert_eq!(result.relative_path(), &PathBuf::from("gradle.properties"));

        file.save().await.unwrap();
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "# Gradle settings\norg.gradle.jvmargs=-Xmx2048m -XX:MaxMetaspaceSize=512m -Dfoo=bar\nandroid.useAndroidX=true\n"
        );

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_save_keeps_crlf_line_endings() {
        let (temp_dir, mut file) =
            load_with("# Gradle settings\r\norg.gradle.jvmargs=-Xmx1g\r\nfoo=1\r\norg.gradle.jvmargs=-Xmx4g\r\n")
                .await;

        file.apply(PLUGIN_NAME, "0.1.0", &MergeRequest::default(), true);
        file.save().await.unwrap();
        file.normalize_on_disk().await;

        let expected = "# Gradle settings\r\norg.gradle.jvmargs=-Xmx2048m -XX:MaxMetaspaceSize=512m\r\nfoo=1\r\n";
        assert_eq!(fs::read_to_string(file.path()).unwrap(), expected);

        // A second pass finds nothing left to rewrite
        file.normalize_on_disk().await;
        assert_eq!(fs::read_to_string(file.path()).unwrap(), expected);

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_apply_appends_missing_property() {
        let (temp_dir, mut file) = load_with("android.useAndroidX=true\n").await;
        assert!(!file.has_duplicate_jvm_args());
        let result = file.apply(PLUGIN_NAME, "0.1.0", &MergeRequest::default(), false);
        assert_eq!(result.previous(), None);
        assert_eq!(file.jvm_args(), Some("-Xmx2048m -XX:MaxMetaspaceSize=512m"));
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_apply_runs_once_per_plugin() {
        let (temp_dir, mut file) = load_with("org.gradle.jvmargs=-Xmx1g\n").await;

        let first = file.apply(PLUGIN_NAME, "0.1.0", &MergeRequest::default(), false);
        assert!(!first.skipped());

        let other = MergeRequest {
            xmx: "8g".to_string(),
            ..MergeRequest::default()
        };
        let second = file.apply(PLUGIN_NAME, "0.1.0", &other, false);
        assert!(second.skipped());
        assert!(!second.is_changed());
        assert_eq!(second.value(), "-Xmx2048m -XX:MaxMetaspaceSize=512m");
        assert_eq!(file.jvm_args(), Some("-Xmx2048m -XX:MaxMetaspaceSize=512m"));

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_normalize_on_disk_removes_duplicate_lines() {
        let (temp_dir, mut file) =
            load_with("org.gradle.jvmargs=-Xmx1g\nfoo=1\norg.gradle.jvmargs=-Xmx4g\n").await;

        assert!(file.has_duplicate_jvm_args());
        file.apply(PLUGIN_NAME, "0.1.0", &MergeRequest::default(), true);
        file.save().await.unwrap();
        file.normalize_on_disk().await;

        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "org.gradle.jvmargs=-Xmx2048m -XX:MaxMetaspaceSize=512m\nfoo=1\n"
        );

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_normalize_on_disk_swallows_errors() {
        let temp_dir = TempDir::new().unwrap();
        let mut file = GradlePropertiesFile::new(
            temp_dir.path().join("missing/gradle.properties"),
            PathBuf::from("missing/gradle.properties"),
            vec![],
        );
        file.apply(PLUGIN_NAME, "0.1.0", &MergeRequest::default(), true);
        // Must not panic or propagate
        file.normalize_on_disk().await;
        assert!(!file.path().exists());
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = GradlePropertiesFile::load(
            &temp_dir.path().join("gradle.properties"),
            Path::new("gradle.properties"),
        )
        .await;
        assert!(result.is_err());
        temp_dir.close().unwrap();
    }
}
