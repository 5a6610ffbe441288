use anyhow::Result;
use clap::Args;
use gradle_jvmargs_core::{ApplyResult, MergeRequest, PLUGIN_NAME};
use gradle_jvmargs_gradle::GradlePropertiesFile;
use gradle_jvmargs_utils::display_result;
use log::info;
use std::path::PathBuf;

use crate::{
    context::CommandContext,
    options::{FormatOptions, MergeOptions},
    prompter::{InquirePrompter, Prompter},
};

#[derive(Args, Debug, Default)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub merge: MergeOptions,

    /// gradle.properties file to update (repeatable, default: configured `properties`)
    #[arg(short = 'p', long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Update every gradle.properties found under the current directory
    #[arg(short, long, default_value = "false")]
    pub discover: bool,

    /// Rewrite the file so only one org.gradle.jvmargs line survives
    #[arg(long, default_value = "false")]
    pub strict: bool,

    /// If true, do not make any filesystem changes.
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// Write without asking for confirmation
    #[arg(short, long, default_value = "false")]
    pub yes: bool,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Apply the merged JVM args
///
/// # Errors
/// Returns error if the configuration or a properties file cannot be read or written.
pub async fn handle_apply(args: &ApplyArgs) -> Result<()> {
    handle_apply_with_prompter(args, &InquirePrompter).await
}

/// # Errors
/// Returns error if the configuration or a properties file cannot be read or written.
pub async fn handle_apply_with_prompter(args: &ApplyArgs, prompter: &dyn Prompter) -> Result<()> {
    let context = CommandContext::new().await?;
    let strict = args.strict || context.config.strict;
    let requests = context.requests(&args.merge.to_props());
    let targets = context.targets(&args.files, args.discover).await?;

    if targets.is_empty() {
        args.format.print("No gradle.properties files found", "[]");
        return Ok(());
    }

    let mut pending = Vec::new();
    let mut results = Vec::new();
    for (path, relative_path) in targets {
        let mut file = GradlePropertiesFile::load(&path, &relative_path).await?;
        let file_results = apply_requests(&mut file, &requests, strict);
        let needs_write = file_results.iter().any(ApplyResult::is_changed)
            || (strict && file.has_duplicate_jvm_args());
        results.extend(file_results);
        if needs_write {
            pending.push(file);
        }
    }

    args.format.print(
        &results
            .iter()
            .map(display_result)
            .collect::<Vec<_>>()
            .join("\n"),
        &serde_json::to_string_pretty(&results)?,
    );

    if pending.is_empty() {
        info!("All files already normalized");
        return Ok(());
    }

    if args.dry_run {
        if !args.format.is_json() {
            println!("Dry run, no files will be written");
        }
        return Ok(());
    }

    if !args.yes && !prompter.confirm(&format!("Write {} file(s)?", pending.len()))? {
        if !args.format.is_json() {
            println!("Apply cancelled");
        }
        return Ok(());
    }

    for file in &pending {
        file.save().await?;
        if strict {
            file.normalize_on_disk().await;
        }
        info!("Updated {}", file.path().display());
    }
    Ok(())
}

/// Apply every request in order; the run-once history turns all but the first into skips.
pub(crate) fn apply_requests(
    file: &mut GradlePropertiesFile,
    requests: &[MergeRequest],
    strict: bool,
) -> Vec<ApplyResult> {
    requests
        .iter()
        .map(|request| file.apply(PLUGIN_NAME, env!("CARGO_PKG_VERSION"), request, strict))
        .collect()
}
