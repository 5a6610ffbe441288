//! # gradle-jvmargs-gradle
//!
//! `gradle.properties` support for gradle-jvmargs.
//!
//! Parses properties files into a flat list of entries, upserts `org.gradle.jvmargs` with
//! the merged token string, and optionally rewrites the file on disk so that only the
//! normalized line for the key survives.

pub mod finder;
pub mod jvm_args;
pub mod normalizer;
pub mod properties;
pub mod properties_file;

pub use finder::GradlePropertiesFinder;
pub use jvm_args::{JvmArgsChange, apply_jvm_args, find_jvm_args};
pub use normalizer::{normalize_file, normalize_jvm_args_line};
pub use properties::{PropertiesEntry, format_properties, line_ending, parse_properties};
pub use properties_file::GradlePropertiesFile;
