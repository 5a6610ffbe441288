use std::collections::HashMap;

/// Name the plugin is registered under in `app.json` and in run-once bookkeeping.
pub const PLUGIN_NAME: &str = "gradle-jvmargs";

/// Name of the Expo config plugin package whose entries are accepted as an alias.
pub const EXPO_PLUGIN_NAME: &str = "expo-gradle-jvmargs";

/// Records which plugins already ran against a configuration target.
///
/// Mirrors the run-once registration of config plugins: a plugin listed several
/// times is applied only on its first appearance.
#[derive(Debug, Default, Clone)]
pub struct PluginHistory {
    applied: HashMap<String, String>,
}

impl PluginHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `name` has not run yet and records it with `version`.
    pub fn run_once(&mut self, name: &str, version: &str) -> bool {
        if self.applied.contains_key(name) {
            return false;
        }
        self.applied.insert(name.to_string(), version.to_string());
        true
    }

    /// Version recorded for a plugin that already ran.
    #[must_use]
    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.applied.get(name).map(String::as_str)
    }
}
