use crate::get_relative_path;
use anyhow::Result;
use glob::Pattern;
use gradle_jvmargs_core::{Config, PropertiesFinder};
use ignore::WalkBuilder;
use log::warn;
use std::path::Path;

/// Walk `root` (honoring .gitignore) and offer every file to the finders.
///
/// Files whose relative path matches one of `config.ignore` are skipped.
///
/// # Errors
/// Returns error if a finder fails to visit a file.
pub async fn find_properties_files(
    root: &Path,
    finders: &mut [Box<dyn PropertiesFinder>],
    config: &Config,
) -> Result<()> {
    let ignore_patterns = config
        .ignore
        .iter()
        .filter_map(|pattern| match Pattern::new(pattern) {
            Ok(p) => Some(p),
            Err(e) => {
                warn!("Invalid ignore pattern {pattern:?}: {e}");
                None
            }
        })
        .collect::<Vec<_>>();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let abs_path = entry.path();
        let relative_path = get_relative_path(root, abs_path)?;
        if ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path(&relative_path))
        {
            continue;
        }

        futures::future::join_all(
            finders
                .iter_mut()
                .map(async |finder| finder.visit(abs_path, &relative_path).await),
        )
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;
    }
    Ok(())
}
