//! hostlog Core
//!
//! Level-filtered loggers that write into a host engine's console.
//! An application asks a factory for a logger by name, checks or simply
//! logs at a level, and enabled events are rendered and forwarded to the
//! console's info, warning or error channel. Attached errors also go to the
//! console's exception channel.
//!
//! ```rust
//! use std::sync::Arc;
//! use hostlog_core::{EngineLoggerFactory, LoggerFactory, Logger, LogLevel};
//! use hostlog_core::console::{ConsoleEntry, RecordingConsole};
//!
//! let console = Arc::new(RecordingConsole::new());
//! let factory = EngineLoggerFactory::new(LogLevel::Info, console.clone());
//!
//! let logger = factory.get_logger("Physics");
//! logger.debug("not emitted");
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "solver diverged");
//! logger.error_with_error("step failed", &err);
//!
//! assert_eq!(console.entries(), vec![
//!     ConsoleEntry::Error("step failed: solver diverged".to_string()),
//!     ConsoleEntry::Exception("solver diverged".to_string()),
//! ]);
//! ```
//!
//! ## `log` crate integration
//!
//! `LogBridge` installs a factory behind the `log` facade so existing
//! `log::info!` call sites reach the engine console.

pub mod level;
pub mod console;
pub mod logging;
pub mod factory;
pub mod config;
pub mod bridge;

// Re-export commonly used types
pub use level::{LogLevel, ParseLevelError};

pub use console::{
    ConsoleSink, SharedConsole, StdioConsole, NoOpConsole, RecordingConsole, ConsoleEntry,
    register_console_sink, create_console_sink, list_console_sinks,
};

pub use logging::{Logger, EngineLogger, SharedLogger};

pub use factory::{
    LoggerFactory, LoggerFactoryExt, SharedLoggerFactory,
    LoggerCache, EngineLoggerFactory,
};

pub use config::{AdapterConfig, ConfigError, ConfigResult};

pub use bridge::LogBridge;
