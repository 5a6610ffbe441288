//! # gradle-jvmargs-core
//!
//! Token merge algorithm for the `org.gradle.jvmargs` property, plus the types shared by
//! the host crates: plugin options, configuration, run-once bookkeeping and results.
//!
//! The merge itself is a pure function: see [`merge_jvm_args`].

pub mod apply_result;
pub mod config;
pub mod merge_request;
pub mod merger;
pub mod plugin_history;
pub mod properties_finder;
pub mod tokens;

pub use apply_result::ApplyResult;
pub use config::{CONFIG_FILE_NAME, Config};
pub use merge_request::{DEFAULT_MAX_METASPACE, DEFAULT_XMX, MergeRequest, PluginProps};
pub use merger::{JVM_ARGS_KEY, merge_jvm_args};
pub use plugin_history::{EXPO_PLUGIN_NAME, PLUGIN_NAME, PluginHistory};
pub use properties_finder::PropertiesFinder;
pub use tokens::{dedupe, is_managed_token, tokenize};
