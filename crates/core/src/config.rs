use serde::{Deserialize, Serialize};

use crate::merge_request::PluginProps;

pub const CONFIG_FILE_NAME: &str = ".gradle-jvmargs.json";

/// Loaded from `.gradle-jvmargs.json`, holds the plugin options and controls which
/// properties files are rewritten.
///
/// The plugin options (`xmx`, `maxMetaspace`, `merge`, `extraArgs`) sit at the top
/// level of the file, next to the host settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(flatten)]
    pub props: PluginProps,

    /// Rewrite the file on disk so only one `org.gradle.jvmargs` line survives
    #[serde(default)]
    pub strict: bool,

    /// Properties files to update, relative to the project root
    #[serde(default = "default_properties")]
    pub properties: Vec<String>,

    /// Glob patterns for paths skipped during discovery (e.g., "node_modules/**")
    #[serde(default)]
    pub ignore: Vec<String>,
}

fn default_properties() -> Vec<String> {
    vec!["android/gradle.properties".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            props: PluginProps::default(),
            strict: false,
            properties: default_properties(),
            ignore: Vec::new(),
        }
    }
}
