//! Configuration management for Jokebox
//!
//! Every field is optional; a missing config file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;
use crate::store::{IdPolicy, JokeList};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub ui: UiConfig,
    pub logging: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub id_policy: IdPolicy,
    /// Start from the five seed jokes instead of an empty list
    pub seed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    pub colors: bool,
    pub unicode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub format: LogFormat,
    pub level: String,
    /// Log file; the TUI only logs when this is set
    pub file: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::default(),
            seed: true,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            colors: true,
            unicode: true,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Self::default().with_env_overrides();
        }
        Self::load_from_path(&config_path)?.with_env_overrides()
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Apply `NO_COLOR`, `JOKEBOX_NO_COLOR`, `JOKEBOX_TICK_MS` and
    /// `JOKEBOX_ID_POLICY`
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("JOKEBOX_NO_COLOR").is_some() {
            self.ui.colors = false;
            self.ui.unicode = false;
        }

        if let Ok(value) = std::env::var("JOKEBOX_TICK_MS") {
            self.ui.tick_rate_ms = value.parse().map_err(|_| ConfigError::InvalidValue {
                field: "JOKEBOX_TICK_MS".to_string(),
                value: value.clone(),
            })?;
        }

        if let Ok(value) = std::env::var("JOKEBOX_ID_POLICY") {
            self.store.id_policy = value.parse().map_err(|_| ConfigError::InvalidValue {
                field: "JOKEBOX_ID_POLICY".to_string(),
                value: value.clone(),
            })?;
        }

        Ok(self)
    }

    /// The list a new session starts with
    pub fn initial_list(&self) -> JokeList {
        if self.store.seed {
            JokeList::seeded(self.store.id_policy)
        } else {
            JokeList::new(self.store.id_policy)
        }
    }
}

impl LogSettings {
    /// Log file path with `~` expanded
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("JOKEBOX_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("jokebox").join("config.toml"))
}
