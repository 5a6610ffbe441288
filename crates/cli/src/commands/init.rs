use anyhow::Result;
use clap::Args;
use gradle_jvmargs_core::{CONFIG_FILE_NAME, Config, DEFAULT_MAX_METASPACE, DEFAULT_XMX};
use serde_json::json;
use tokio::fs::write;

use crate::context::CommandContext;

#[derive(Args, Debug, Default)]
#[command(about = "Create a .gradle-jvmargs.json with the default settings")]
pub struct InitArgs {
    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    pub dry_run: bool,
}

/// Write a default configuration file in the current directory
///
/// # Errors
/// Returns error if the configuration already exists or cannot be written.
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    let current_dir = CommandContext::current_dir()?;
    let config_file = current_dir.join(CONFIG_FILE_NAME);
    if config_file.exists() {
        return Err(anyhow::anyhow!("gradle-jvmargs already initialized"));
    }

    let mut config = Config::default();
    config.props.xmx = Some(json!(DEFAULT_XMX));
    config.props.max_metaspace = Some(json!(DEFAULT_MAX_METASPACE));
    config.props.merge = Some(json!(true));
    config.props.extra_args = Some(json!([]));

    if !args.dry_run {
        write(&config_file, serde_json::to_string_pretty(&config)?).await?;
    }

    println!("gradle-jvmargs initialized in {}", config_file.display());
    Ok(())
}
