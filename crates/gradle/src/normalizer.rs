use anyhow::{Context, Result};
use gradle_jvmargs_core::JVM_ARGS_KEY;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs::{read_to_string, write};

use crate::properties::line_ending;

static JVM_ARGS_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*org\.gradle\.jvmargs\s*=").expect("hardcoded regex must compile")
});

/// Rewrite raw `gradle.properties` text so exactly one `org.gradle.jvmargs` line remains.
///
/// The line is placed where the first occurrence was, or appended when there was none.
/// Every other line is kept byte for byte and the file's line ending is preserved.
#[must_use]
pub fn normalize_jvm_args_line(content: &str, value: &str) -> String {
    let normalized_line = format!("{JVM_ARGS_KEY}={value}");
    let mut lines = Vec::new();
    let mut written = false;

    for line in content.lines() {
        if JVM_ARGS_LINE_PATTERN.is_match(line) {
            if !written {
                lines.push(normalized_line.as_str());
                written = true;
            }
            continue;
        }
        lines.push(line);
    }

    if !written {
        // Drop trailing blank lines so the appended property does not float
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        lines.push(normalized_line.as_str());
    }

    let newline = line_ending(content);
    let mut normalized = lines.join(newline);
    normalized.push_str(newline);
    normalized
}

/// Apply [`normalize_jvm_args_line`] to a file on disk.
///
/// # Errors
/// Returns error if the file cannot be read or written.
pub async fn normalize_file(path: &Path, value: &str) -> Result<bool> {
    let content = read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let normalized = normalize_jvm_args_line(&content, value);
    if normalized == content {
        return Ok(false);
    }
    write(path, normalized)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}
