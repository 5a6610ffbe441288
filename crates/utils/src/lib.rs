mod display_result;
mod find_properties_files;
mod get_jvmargs_config;
mod get_relative_path;

pub use display_result::display_result;
pub use find_properties_files::find_properties_files;
pub use get_jvmargs_config::{
    APP_CONFIG_FILE_NAME, find_plugin_entries, get_app_plugin_entries, get_jvmargs_config,
};
pub use get_relative_path::get_relative_path;
