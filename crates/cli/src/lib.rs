use anyhow::Result;

use clap::{Parser, Subcommand};

use crate::commands::{
    ApplyArgs, CheckArgs, ConfigArgs, InitArgs, handle_apply, handle_check, handle_config,
    handle_init,
};
pub mod commands;
mod context;
mod finders;
pub mod options;
pub mod prompter;

pub use commands::NotNormalized;
pub use prompter::UserCancelled;

#[derive(Parser, Debug)]
#[command(
    name = "gradle-jvmargs",
    author,
    version,
    about = "Normalize org.gradle.jvmargs in gradle.properties files",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    apply: ApplyArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply the JVM args to gradle.properties files (default)
    Apply(ApplyArgs),
    Check(CheckArgs),
    Config(ConfigArgs),
    Init(InitArgs),
}

/// # Errors
/// Returns error if the selected command fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    match cli.command {
        Some(Commands::Apply(args)) => handle_apply(&args).await?,
        Some(Commands::Check(args)) => handle_check(&args).await?,
        Some(Commands::Config(args)) => handle_config(&args).await?,
        Some(Commands::Init(args)) => handle_init(&args).await?,
        None => handle_apply(&cli.apply).await?,
    }
    Ok(())
}
