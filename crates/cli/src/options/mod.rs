mod format_options;
mod merge_options;

pub use format_options::FormatOptions;
pub use merge_options::MergeOptions;
