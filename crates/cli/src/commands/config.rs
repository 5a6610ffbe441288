use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::{context::CommandContext, options::MergeOptions};

#[derive(Args, Debug, Default)]
#[command(about = "Show the resolved gradle-jvmargs configuration")]
pub struct ConfigArgs {
    #[command(flatten)]
    pub merge: MergeOptions,
}

/// Display the configuration and the plugin options after layering
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(args: &ConfigArgs) -> Result<()> {
    let context = CommandContext::new().await?;
    let resolved = context
        .requests(&args.merge.to_props())
        .into_iter()
        .map(|request| {
            json!({
                "xmx": request.xmx,
                "maxMetaspace": request.max_metaspace,
                "merge": request.merge,
                "extraArgs": request.extra_args,
            })
        })
        .collect::<Vec<_>>();
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "config": context.config,
            "resolved": resolved,
        }))?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    #[test]
    fn test_config_args_parsing() {
        let cli = TestCli::parse_from(["test", "--max-metaspace", "1g"]);
        assert_eq!(cli.config.merge.max_metaspace.as_deref(), Some("1g"));
    }

    #[test]
    fn test_config_args_debug() {
        let args = ConfigArgs::default();
        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ConfigArgs"));
    }
}
