use crate::finders::get_finders;
use anyhow::Result;
use gradle_jvmargs_core::{Config, MergeRequest, PluginProps};
use gradle_jvmargs_utils::{
    find_properties_files, get_app_plugin_entries, get_jvmargs_config, get_relative_path,
};
use log::debug;
use std::path::{Path, PathBuf};

pub struct CommandContext {
    pub root_path: PathBuf,
    pub config: Config,
    pub app_entries: Vec<PluginProps>,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the current directory or the configuration cannot be read.
    pub async fn new() -> Result<Self> {
        Self::from_root(&Self::current_dir()?).await
    }

    /// # Errors
    /// Returns error if the configuration cannot be read.
    pub async fn from_root(root_path: &Path) -> Result<Self> {
        let config = get_jvmargs_config(root_path).await?;
        let app_entries = get_app_plugin_entries(root_path).await?;
        debug!(
            "Loaded config from {} ({} app.json entries)",
            root_path.display(),
            app_entries.len()
        );
        Ok(Self {
            root_path: root_path.to_path_buf(),
            config,
            app_entries,
        })
    }

    /// # Errors
    /// Returns error if retrieving the current directory fails.
    pub fn current_dir() -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }

    /// Plugin options after layering: `app.json` entry < config file < command line.
    ///
    /// One set of options per `app.json` entry, or a single one when `app.json` declares
    /// none.
    #[must_use]
    pub fn resolved_props(&self, cli: &PluginProps) -> Vec<PluginProps> {
        let layer = |base: PluginProps| base.overlay(self.config.props.clone()).overlay(cli.clone());
        if self.app_entries.is_empty() {
            vec![layer(PluginProps::default())]
        } else {
            self.app_entries.iter().cloned().map(layer).collect()
        }
    }

    #[must_use]
    pub fn requests(&self, cli: &PluginProps) -> Vec<MergeRequest> {
        self.resolved_props(cli)
            .iter()
            .map(MergeRequest::from)
            .collect()
    }

    /// Properties files to operate on as `(absolute, relative)` pairs.
    ///
    /// Explicit `files` win, then discovery, then the `properties` list of the config.
    ///
    /// # Errors
    /// Returns error if discovery fails.
    pub async fn targets(&self, files: &[PathBuf], discover: bool) -> Result<Vec<(PathBuf, PathBuf)>> {
        if !files.is_empty() {
            return Ok(files.iter().map(|file| self.target(file)).collect());
        }

        if discover {
            let mut finders = get_finders();
            find_properties_files(&self.root_path, &mut finders, &self.config).await?;
            let mut targets = finders
                .iter()
                .flat_map(|finder| {
                    finder.found().into_iter().filter_map(move |path| {
                        finder
                            .relative_path(path)
                            .map(|relative| (path.to_path_buf(), relative))
                    })
                })
                .collect::<Vec<_>>();
            targets.sort();
            return Ok(targets);
        }

        Ok(self
            .config
            .properties
            .iter()
            .map(|file| self.target(Path::new(file)))
            .collect())
    }

    fn target(&self, file: &Path) -> (PathBuf, PathBuf) {
        let absolute = if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.root_path.join(file)
        };
        let relative = get_relative_path(&self.root_path, &absolute).unwrap_or_else(|_| absolute.clone());
        (absolute, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradle_jvmargs_core::CONFIG_FILE_NAME;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_context_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let context = CommandContext::from_root(temp_dir.path()).await.unwrap();

        assert_eq!(context.config, Config::default());
        assert_eq!(
            context.requests(&PluginProps::default()),
            vec![MergeRequest::default()]
        );

        let targets = context.targets(&[], false).await.unwrap();
        assert_eq!(
            targets,
            vec![(
                temp_dir.path().join("android/gradle.properties"),
                PathBuf::from("android/gradle.properties")
            )]
        );
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_context_layering() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("app.json"),
            r#"{ "expo": { "plugins": [["expo-gradle-jvmargs", { "xmx": "1g", "maxMetaspace": "1g", "extraArgs": ["-Dapp"] }]] } }"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{ "maxMetaspace": "2g", "merge": false }"#,
        )
        .unwrap();

        let context = CommandContext::from_root(temp_dir.path()).await.unwrap();
        let cli = PluginProps {
            xmx: Some(json!("3g")),
            ..PluginProps::default()
        };
        let requests = context.requests(&cli);

        assert_eq!(
            requests,
            vec![MergeRequest {
                xmx: "3g".to_string(),
                max_metaspace: "2g".to_string(),
                merge: false,
                extra_args: vec!["-Dapp".to_string()],
            }]
        );
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_context_one_request_per_app_entry() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("app.json"),
            r#"{ "plugins": ["gradle-jvmargs", ["gradle-jvmargs", { "xmx": "8g" }]] }"#,
        )
        .unwrap();

        let context = CommandContext::from_root(temp_dir.path()).await.unwrap();
        let requests = context.requests(&PluginProps::default());
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].xmx, "2048m");
        assert_eq!(requests[1].xmx, "8g");
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_context_targets_explicit_and_discovered() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("android")).unwrap();
        fs::create_dir_all(root.join("lib")).unwrap();
        fs::write(root.join("android/gradle.properties"), "").unwrap();
        fs::write(root.join("lib/gradle.properties"), "").unwrap();

        let context = CommandContext::from_root(root).await.unwrap();

        let explicit = context
            .targets(&[PathBuf::from("lib/gradle.properties")], true)
            .await
            .unwrap();
        assert_eq!(
            explicit,
            vec![(
                root.join("lib/gradle.properties"),
                PathBuf::from("lib/gradle.properties")
            )]
        );

        let discovered = context.targets(&[], true).await.unwrap();
        assert_eq!(
            discovered,
            vec![
                (
                    root.join("android/gradle.properties"),
                    PathBuf::from("android/gradle.properties")
                ),
                (
                    root.join("lib/gradle.properties"),
                    PathBuf::from("lib/gradle.properties")
                ),
            ]
        );
        temp_dir.close().unwrap();
    }
}
