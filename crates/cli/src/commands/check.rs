use anyhow::Result;
use clap::Args;
use gradle_jvmargs_gradle::GradlePropertiesFile;
use gradle_jvmargs_utils::display_result;
use std::path::PathBuf;
use thiserror::Error;

use crate::{
    commands::apply::apply_requests,
    context::CommandContext,
    options::{FormatOptions, MergeOptions},
};

/// Returned by `check` when at least one file would be rewritten.
#[derive(Debug, Error)]
#[error("{} file(s) not normalized: {}", .0.len(), display_paths(.0))]
pub struct NotNormalized(pub Vec<PathBuf>);

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Args, Debug, Default)]
#[command(about = "Check that gradle.properties files are already normalized")]
pub struct CheckArgs {
    #[command(flatten)]
    pub merge: MergeOptions,

    /// gradle.properties file to check (repeatable, default: configured `properties`)
    #[arg(short = 'p', long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Check every gradle.properties found under the current directory
    #[arg(short, long, default_value = "false")]
    pub discover: bool,

    /// Also require a single org.gradle.jvmargs line
    #[arg(long, default_value = "false")]
    pub strict: bool,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Check project status
///
/// # Errors
/// Returns [`NotNormalized`] if any file differs from the merged result, or an error if
/// a file cannot be read.
pub async fn handle_check(args: &CheckArgs) -> Result<()> {
    let context = CommandContext::new().await?;
    let strict = args.strict || context.config.strict;
    let requests = context.requests(&args.merge.to_props());
    let targets = context.targets(&args.files, args.discover).await?;

    let mut results = Vec::new();
    let mut unnormalized = Vec::new();
    for (path, relative_path) in targets {
        let mut file = GradlePropertiesFile::load(&path, &relative_path).await?;
        let file_results = apply_requests(&mut file, &requests, strict);
        if file_results.iter().any(|result| result.is_changed())
            || (strict && file.has_duplicate_jvm_args())
        {
            unnormalized.push(relative_path);
        }
        results.extend(file_results);
    }

    args.format.print(
        &results
            .iter()
            .map(display_result)
            .collect::<Vec<_>>()
            .join("\n"),
        &serde_json::to_string_pretty(&results)?,
    );

    if unnormalized.is_empty() {
        Ok(())
    } else {
        Err(NotNormalized(unnormalized).into())
    }
}
