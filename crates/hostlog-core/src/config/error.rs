//! Configuration error types

use thiserror::Error;

use crate::level::ParseLevelError;

/// Errors that can occur while loading or applying configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidLevel(#[from] ParseLevelError),

    #[error("Console sink not registered: {0}")]
    UnknownSink(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
