use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub const DEFAULT_XMX: &str = "2048m";
pub const DEFAULT_MAX_METASPACE: &str = "512m";

/// User-provided plugin options as they appear in JSON configuration.
///
/// Every field is kept as a raw JSON value so that malformed input degrades to
/// defaults instead of failing deserialization. Convert to [`MergeRequest`] to
/// apply the defaulting rules.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginProps {
    /// Value for `-Xmx`, e.g. `"2048m"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xmx: Option<Value>,

    /// Value for `-XX:MaxMetaspaceSize`, e.g. `"512m"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_metaspace: Option<Value>,

    /// Keep unrelated tokens already present in `org.gradle.jvmargs` (default: true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge: Option<Value>,

    /// Additional JVM args appended after the managed and preserved tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_args: Option<Value>,
}

impl PluginProps {
    /// Overlay `other` on top of `self`: fields set in `other` win.
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            xmx: other.xmx.or(self.xmx),
            max_metaspace: other.max_metaspace.or(self.max_metaspace),
            merge: other.merge.or(self.merge),
            extra_args: other.extra_args.or(self.extra_args),
        }
    }
}

/// Fully resolved merge options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    pub xmx: String,
    pub max_metaspace: String,
    pub merge: bool,
    pub extra_args: Vec<String>,
}

impl Default for MergeRequest {
    fn default() -> Self {
        Self {
            xmx: DEFAULT_XMX.to_string(),
            max_metaspace: DEFAULT_MAX_METASPACE.to_string(),
            merge: true,
            extra_args: Vec::new(),
        }
    }
}

impl From<&PluginProps> for MergeRequest {
    fn from(props: &PluginProps) -> Self {
        Self {
            xmx: non_empty_string(props.xmx.as_ref()).unwrap_or_else(|| DEFAULT_XMX.to_string()),
            max_metaspace: non_empty_string(props.max_metaspace.as_ref())
                .unwrap_or_else(|| DEFAULT_MAX_METASPACE.to_string()),
            merge: !matches!(props.merge, Some(Value::Bool(false))),
            extra_args: sanitize_extra_args(props.extra_args.as_ref()),
        }
    }
}

impl From<PluginProps> for MergeRequest {
    fn from(props: PluginProps) -> Self {
        Self::from(&props)
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Coerce every element of an array to its string form, trim, and drop empties.
/// Anything that is not an array yields no args.
#[must_use]
pub fn sanitize_extra_args(extra_args: Option<&Value>) -> Vec<String> {
    match extra_args {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_to_string(item).trim().to_string())
            .filter(|arg| !arg.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// String form of a JSON value, following the usual script-host conventions:
/// arrays are comma-joined with `null` elements rendered empty, objects become
/// `[object Object]`.
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Integral floats print without a fraction (`1.0` is `1`), like a script host does.
fn number_to_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}
