mod apply;
mod check;
mod config;
mod init;

pub use apply::ApplyArgs;
pub use apply::handle_apply;
pub use apply::handle_apply_with_prompter;
pub use check::CheckArgs;
pub use check::NotNormalized;
pub use check::handle_check;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use init::InitArgs;
pub use init::handle_init;
