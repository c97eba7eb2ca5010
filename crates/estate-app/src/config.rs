use estate_db_memory::{StorageBackend, StorageConfig, StorageOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "estate.toml";

/// Prefix for environment overrides, e.g. `ESTATE__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "ESTATE";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config build error: {0}")]
    Build(#[source] config::ConfigError),

    #[error("config deserialize error: {0}")]
    Deserialize(#[source] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.level must be one of {valid_levels:?}"
            )));
        }

        let backend = self.storage.backend.to_ascii_lowercase();
        if backend != "memory" {
            return Err(ConfigError::Invalid(format!(
                "storage.backend '{}' is not supported (expected \"memory\")",
                self.storage.backend
            )));
        }
        if self.storage.preallocate_items == Some(0) {
            return Err(ConfigError::Invalid(
                "storage.preallocate_items must be > 0 when set".into(),
            ));
        }
        Ok(())
    }

    /// Storage factory configuration derived from the `[storage]` section.
    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            backend: StorageBackend::InMemoryPapaya,
            options: StorageOptions {
                preallocate_items: self.storage.preallocate_items,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}
fn default_log_level() -> String {
    "info".into()
}
impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    /// Initial capacity hint for the in-memory map.
    #[serde(default)]
    pub preallocate_items: Option<usize>,
}
fn default_storage_backend() -> String {
    "memory".into()
}
impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            preallocate_items: None,
        }
    }
}

pub mod loader {
    use super::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, ENV_PREFIX};
    use config::{Config, Environment, File};
    use std::path::PathBuf;

    /// Loads the file at `path` (or `estate.toml` if present), applies
    /// `ESTATE__*` environment overrides and validates the result.
    pub fn load_config(path: Option<&str>) -> Result<AppConfig, ConfigError> {
        let mut builder = Config::builder();
        let pathbuf = PathBuf::from(path.unwrap_or(DEFAULT_CONFIG_FILE));
        if pathbuf.exists() {
            builder = builder.add_source(File::from(pathbuf));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .separator("__"),
        );
        let cfg = builder.build().map_err(ConfigError::Build)?;
        let merged: AppConfig = cfg.try_deserialize().map_err(ConfigError::Deserialize)?;
        merged.validate()?;
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.storage.backend, "memory");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut cfg = AppConfig::default();
        cfg.logging.level = "loud".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_rejects_unknown_backend_and_zero_capacity() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = "mongodb".into();
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));

        let mut cfg = AppConfig::default();
        cfg.storage.preallocate_items = Some(0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_storage_config_carries_capacity_hint() {
        let mut cfg = AppConfig::default();
        cfg.storage.preallocate_items = Some(128);
        let storage = cfg.storage_config();
        assert_eq!(storage.backend, StorageBackend::InMemoryPapaya);
        assert_eq!(storage.options.preallocate_items, Some(128));
    }
}
