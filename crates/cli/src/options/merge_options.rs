use clap::Args;
use gradle_jvmargs_core::PluginProps;
use serde_json::Value;

/// Plugin options accepted on the command line.
///
/// Each flag overrides the same option from `.gradle-jvmargs.json` or `app.json`.
#[derive(Args, Debug, Clone, Default)]
pub struct MergeOptions {
    /// Value for -Xmx (default: 2048m)
    #[arg(long)]
    pub xmx: Option<String>,

    /// Value for -XX:MaxMetaspaceSize (default: 512m)
    #[arg(long)]
    pub max_metaspace: Option<String>,

    /// Drop every existing token other than the managed ones
    #[arg(long, default_value = "false")]
    pub no_merge: bool,

    /// Additional JVM arg to append (repeatable)
    #[arg(long = "extra-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub extra_args: Vec<String>,
}

impl MergeOptions {
    /// Convert the flags that were given into plugin options; unset flags stay unset.
    #[must_use]
    pub fn to_props(&self) -> PluginProps {
        PluginProps {
            xmx: self.xmx.clone().map(Value::String),
            max_metaspace: self.max_metaspace.clone().map(Value::String),
            merge: self.no_merge.then_some(Value::Bool(false)),
            extra_args: (!self.extra_args.is_empty()).then(|| {
                Value::Array(self.extra_args.iter().cloned().map(Value::String).collect())
            }),
        }
    }
}
