use gradle_jvmargs_core::{JVM_ARGS_KEY, MergeRequest, merge_jvm_args};

use crate::properties::PropertiesEntry;

/// Previous and new `org.gradle.jvmargs` values after an upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JvmArgsChange {
    pub previous: Option<String>,
    pub value: String,
}

/// Current `org.gradle.jvmargs` value (first occurrence).
#[must_use]
pub fn find_jvm_args(entries: &[PropertiesEntry]) -> Option<&str> {
    entries.iter().find_map(|entry| match entry {
        PropertiesEntry::Property { key, value } if key == JVM_ARGS_KEY => Some(value.as_str()),
        _ => None,
    })
}

/// Merge the first `org.gradle.jvmargs` property in place, or append one when absent.
pub fn apply_jvm_args(entries: &mut Vec<PropertiesEntry>, request: &MergeRequest) -> JvmArgsChange {
    let index = entries.iter().position(
        |entry| matches!(entry, PropertiesEntry::Property { key, .. } if key == JVM_ARGS_KEY),
    );
    let previous = find_jvm_args(entries).map(ToString::to_string);
    let value = merge_jvm_args(previous.as_deref(), request);

    let property = PropertiesEntry::property(JVM_ARGS_KEY, &value);
    match index {
        Some(index) => entries[index] = property,
        None => entries.push(property),
    }

    JvmArgsChange { previous, value }
}
