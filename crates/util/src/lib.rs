//! Shared helpers for the AppForge CLI and TUI: configuration loading and
//! path handling.

pub mod config;
pub mod path_processing;

pub use config::{ConfigError, ForgeConfig, default_config_path, default_log_path};
pub use path_processing::expand_tilde;
