use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome of applying the plugin to one properties file.
///
/// Serialized as camelCase JSON for the `--format json` output.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResult {
    /// Absolute path to the properties file
    path: PathBuf,
    /// Path relative to the project root
    relative_path: PathBuf,
    /// `org.gradle.jvmargs` value before the update, if the property existed
    previous: Option<String>,
    /// Normalized `org.gradle.jvmargs` value
    value: String,
    /// Whether the run-once bookkeeping skipped this file
    skipped: bool,
    /// Whether the strict on-disk normalization is requested
    strict: bool,
}

impl ApplyResult {
    #[must_use]
    pub const fn new(
        path: PathBuf,
        relative_path: PathBuf,
        previous: Option<String>,
        value: String,
        skipped: bool,
        strict: bool,
    ) -> Self {
        Self {
            path,
            relative_path,
            previous,
            value,
            skipped,
            strict,
        }
    }

    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    #[must_use]
    pub fn relative_path(&self) -> &PathBuf {
        &self.relative_path
    }

    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn skipped(&self) -> bool {
        self.skipped
    }

    /// Whether writing the new value modifies the property.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.skipped && self.previous.as_deref() != Some(self.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn result(previous: Option<&str>, value: &str, skipped: bool) -> ApplyResult {
        ApplyResult::new(
            PathBuf::from("/repo/android/gradle.properties"),
            PathBuf::from("android/gradle.properties"),
            previous.map(ToString::to_string),
            value.to_string(),
            skipped,
            false,
        )
    }

    #[test]
    fn test_apply_result_changed() {
        assert!(result(None, "-Xmx2048m -XX:MaxMetaspaceSize=512m", false).is_changed());
        assert!(result(Some("-Xmx1g"), "-Xmx2048m -XX:MaxMetaspaceSize=512m", false).is_changed());
        assert!(
            !result(
                Some("-Xmx2048m -XX:MaxMetaspaceSize=512m"),
                "-Xmx2048m -XX:MaxMetaspaceSize=512m",
                false
            )
            .is_changed()
        );
    }

    #[test]
    fn test_apply_result_skipped_is_unchanged() {
        assert!(!result(None, "-Xmx2048m -XX:MaxMetaspaceSize=512m", true).is_changed());
    }

    #[test]
    fn test_apply_result_serialize() {
        let json: Value = serde_json::to_value(result(Some("-Xmx1g"), "-Xmx2g", false)).unwrap();
        assert_eq!(
            json,
            json!({
                "path": "/repo/android/gradle.properties",
                "relativePath": "android/gradle.properties",
                "previous": "-Xmx1g",
                "value": "-Xmx2g",
                "skipped": false,
                "strict": false
            })
        );
    }
}
