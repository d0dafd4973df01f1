//! Configuration for the AppForge CLI/TUI.
//!
//! Settings live in a small JSON file in the standard configuration directory
//! (`~/.config/appforge/config.json` on most platforms). A missing or
//! unreadable file falls back to defaults; individual values can be overridden
//! through environment variables.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "APPFORGE_CONFIG_PATH";

/// Environment override for [`ForgeConfig::generation_latency_ms`].
pub const GENERATION_LATENCY_ENV: &str = "APPFORGE_GENERATION_LATENCY_MS";

/// Environment override for [`ForgeConfig::notification_duration_ms`].
pub const NOTIFICATION_DURATION_ENV: &str = "APPFORGE_NOTIFICATION_MS";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Filename for the TUI trace log.
pub const LOG_FILE_NAME: &str = "appforge.log";

const APP_DIR_NAME: &str = "appforge";

/// Error surfaced when reading configuration fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure (for example, permissions).
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// An environment override could not be parsed.
    #[error("invalid value for {name}: '{value}' (expected milliseconds)")]
    InvalidOverride { name: &'static str, value: String },
}

/// Persisted configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Simulated generation latency in milliseconds.
    pub generation_latency_ms: u64,
    /// How long the deploy banner stays visible in milliseconds.
    pub notification_duration_ms: u64,
    /// Platform name shown in the deploy banner and receipts.
    pub deploy_target: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            generation_latency_ms: 2500,
            notification_duration_ms: 3000,
            deploy_target: "Vercel".into(),
        }
    }
}

impl ForgeConfig {
    /// Load from `path` (or the default location) and apply environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
        let mut config = Self::load_from_path(&resolved)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Read the JSON file at `path` without consulting the environment.
    ///
    /// A missing file yields defaults, and so does an unparsable one (with a
    /// warning).
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => Ok(config),
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        "Failed to parse config file; using defaults"
                    );
                    Ok(Self::default())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(ConfigError::Io(error)),
        }
    }

    /// Apply `APPFORGE_*` environment overrides on top of the loaded values.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = millis_from_env(GENERATION_LATENCY_ENV)? {
            self.generation_latency_ms = value;
        }
        if let Some(value) = millis_from_env(NOTIFICATION_DURATION_ENV)? {
            self.notification_duration_ms = value;
        }
        Ok(())
    }

    pub fn generation_latency(&self) -> Duration {
        Duration::from_millis(self.generation_latency_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }
}

fn millis_from_env(name: &'static str) -> Result<Option<u64>, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidOverride { name, value: raw.clone() })
}

fn app_config_dir() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR_NAME)
}

/// Resolve the config file path, honoring [`CONFIG_PATH_ENV`].
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }
    app_config_dir().join(CONFIG_FILE_NAME)
}

/// Location of the trace log written while the TUI owns the terminal.
pub fn default_log_path() -> PathBuf {
    app_config_dir().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = ForgeConfig::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ForgeConfig::default());
        assert_eq!(config.generation_latency(), Duration::from_millis(2500));
        assert_eq!(config.notification_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "deploy_target": "Netlify" }"#).unwrap();

        let config = ForgeConfig::load_from_path(&path).unwrap();
        assert_eq!(config.deploy_target, "Netlify");
        assert_eq!(config.generation_latency_ms, 2500);
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        let config = ForgeConfig::load_from_path(&path).unwrap();
        assert_eq!(config, ForgeConfig::default());
    }

    #[test]
    fn default_path_honors_env_override() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("~/custom/forge.json"), || {
            assert_eq!(default_config_path(), expand_tilde("~/custom/forge.json"));
        });
    }

    #[test]
    fn env_overrides_apply_on_top_of_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "generation_latency_ms": 900 }"#).unwrap();

        temp_env::with_vars(
            [(GENERATION_LATENCY_ENV, Some("10")), (NOTIFICATION_DURATION_ENV, Some(" 20 "))],
            || {
                let config = ForgeConfig::load(Some(path.as_path())).unwrap();
                assert_eq!(config.generation_latency_ms, 10);
                assert_eq!(config.notification_duration_ms, 20);
            },
        );
    }

    #[test]
    fn malformed_env_override_is_an_error() {
        temp_env::with_var(GENERATION_LATENCY_ENV, Some("soon"), || {
            let mut config = ForgeConfig::default();
            let error = config.apply_env_overrides().unwrap_err();
            assert!(matches!(error, ConfigError::InvalidOverride { name, .. } if name == GENERATION_LATENCY_ENV));
        });
    }
}
