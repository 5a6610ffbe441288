use std::path::Path;

use anyhow::{Context, Result};
use gradle_jvmargs_core::{CONFIG_FILE_NAME, Config, EXPO_PLUGIN_NAME, PLUGIN_NAME, PluginProps};
use log::{debug, warn};
use serde_json::Value;
use tokio::fs::read_to_string;

pub const APP_CONFIG_FILE_NAME: &str = "app.json";

/// Load `.gradle-jvmargs.json` from `dir`, falling back to defaults when it is absent.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn get_jvmargs_config(dir: &Path) -> Result<Config> {
    let config_file = dir.join(CONFIG_FILE_NAME);
    if !config_file.is_file() {
        debug!("{} not found, using defaults", config_file.display());
        return Ok(Config::default());
    }
    let content = read_to_string(&config_file)
        .await
        .with_context(|| format!("Failed to read {}", config_file.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_file.display()))
}

/// Plugin entries declared in an Expo `app.json` found in `dir`.
///
/// A malformed `app.json` is not fatal: it is reported and treated as declaring nothing.
///
/// # Errors
/// Returns error if the file exists but cannot be read.
pub async fn get_app_plugin_entries(dir: &Path) -> Result<Vec<PluginProps>> {
    let app_config = dir.join(APP_CONFIG_FILE_NAME);
    if !app_config.is_file() {
        return Ok(Vec::new());
    }
    let content = read_to_string(&app_config)
        .await
        .with_context(|| format!("Failed to read {}", app_config.display()))?;
    match serde_json::from_str::<Value>(&content) {
        Ok(value) => Ok(find_plugin_entries(&value)),
        Err(e) => {
            warn!("Ignoring {}: {e}", app_config.display());
            Ok(Vec::new())
        }
    }
}

/// Collect the options of every `gradle-jvmargs` entry in an app config.
///
/// Plugins are read from `expo.plugins`, or `plugins` at the top level. An entry is
/// either the bare plugin name or a `[name, options]` pair.
#[must_use]
pub fn find_plugin_entries(app_config: &Value) -> Vec<PluginProps> {
    let plugins = app_config
        .get("expo")
        .and_then(|expo| expo.get("plugins"))
        .or_else(|| app_config.get("plugins"))
        .and_then(Value::as_array);

    let Some(plugins) = plugins else {
        return Vec::new();
    };

    plugins
        .iter()
        .filter_map(|entry| match entry {
            Value::String(name) if is_plugin_name(name) => Some(PluginProps::default()),
            Value::Array(pair) => match pair.first() {
                Some(Value::String(name)) if is_plugin_name(name) => Some(
                    pair.get(1)
                        .filter(|options| options.is_object())
                        .and_then(|options| serde_json::from_value(options.clone()).ok())
                        .unwrap_or_default(),
                ),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

fn is_plugin_name(name: &str) -> bool {
    name == PLUGIN_NAME || name == EXPO_PLUGIN_NAME
}
