//! Adapter configuration
//!
//! The threshold is normally supplied programmatically. Hosts that want it
//! adjustable without a rebuild can load `AdapterConfig` from YAML/JSON and
//! let environment variables override it.

mod error;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use file::{AdapterConfig, LEVEL_ENV, SINK_ENV};
