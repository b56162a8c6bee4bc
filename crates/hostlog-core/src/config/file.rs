//! Adapter configuration (YAML/JSON file + environment)
//!
//! The user-level file lives at `~/.config/hostlog/config.yaml`:
//!
//! ```yaml
//! level: info
//! sink: stdio
//! case_sensitive: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::level::LogLevel;

/// Environment variable overriding the threshold
pub const LEVEL_ENV: &str = "HOSTLOG_LOG_LEVEL";

/// Environment variable overriding the console sink name
pub const SINK_ENV: &str = "HOSTLOG_SINK";

/// Settings for an `EngineLoggerFactory`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Threshold applied to every logger the factory creates
    pub level: LogLevel,
    /// Registered console sink name
    pub sink: String,
    /// Whether logger names are matched case-sensitively
    pub case_sensitive: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            sink: "stdio".to_string(),
            case_sensitive: false,
        }
    }
}

impl AdapterConfig {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    pub fn with_sink(mut self, sink: impl Into<String>) -> Self {
        self.sink = sink.into();
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the threshold from its name (`"warn"`, `"Error"`, ...)
    pub fn with_level_name(mut self, name: &str) -> ConfigResult<Self> {
        self.level = name.parse()?;
        Ok(self)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load from a YAML file; a missing file yields the defaults
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no adapter config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        log::debug!("loaded adapter config from {}", path.display());
        Ok(config)
    }

    /// Default user-level config path (`<config dir>/hostlog/config.yaml`)
    pub fn user_config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("hostlog").join("config.yaml")
    }

    /// Load the user-level file, then apply environment overrides
    pub fn load_user() -> ConfigResult<Self> {
        Ok(Self::from_file(Self::user_config_path())?.apply_env())
    }

    /// Apply `HOSTLOG_LOG_LEVEL` and `HOSTLOG_SINK` if set
    pub fn apply_env(self) -> Self {
        let level = std::env::var(LEVEL_ENV).ok();
        let sink = std::env::var(SINK_ENV).ok();
        self.apply_overrides(level.as_deref(), sink.as_deref())
    }

    /// Apply overrides; an unparsable level is reported and ignored
    pub fn apply_overrides(self, level: Option<&str>, sink: Option<&str>) -> Self {
        let mut config = match level {
            Some(name) => match self.clone().with_level_name(name) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring {}: {}", LEVEL_ENV, e);
                    self
                }
            },
            None => self,
        };

        if let Some(sink) = sink.filter(|s| !s.trim().is_empty()) {
            config.sink = sink.trim().to_string();
        }
        config
    }
}

impl TryFrom<&str> for AdapterConfig {
    type Error = ConfigError;

    /// Parse YAML content (JSON is valid YAML as well)
    fn try_from(content: &str) -> ConfigResult<Self> {
        Self::from_yaml_str(content)
    }
}
