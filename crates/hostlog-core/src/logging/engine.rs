//! Logger that writes to a host engine console

use std::error::Error;
use std::fmt::{self, Display};

use super::traits::Logger;
use crate::console::SharedConsole;
use crate::level::LogLevel;

/// A level-filtered logger backed by a [`ConsoleSink`](crate::console::ConsoleSink)
///
/// The name and threshold are fixed at construction. Rendered lines go to
/// the console's warning channel for `Warn`, its error channel for `Error`,
/// and its default channel for every other level, `Fatal` included. An
/// attached error is also handed to the exception channel as-is.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hostlog_core::{EngineLogger, Logger, LogLevel};
/// use hostlog_core::console::{ConsoleEntry, RecordingConsole};
///
/// let console = Arc::new(RecordingConsole::new());
/// let logger = EngineLogger::with_level("physics", LogLevel::Info, console.clone());
///
/// logger.debug("skipped");
/// logger.warn("step took 40ms");
/// assert_eq!(console.entries(), vec![ConsoleEntry::Warning("step took 40ms".to_string())]);
/// ```
#[derive(Clone)]
pub struct EngineLogger {
    name: String,
    level: LogLevel,
    console: SharedConsole,
}

impl EngineLogger {
    /// Create a logger with the default `Debug` threshold
    pub fn new(name: impl Into<String>, console: SharedConsole) -> Self {
        Self::with_level(name, LogLevel::default(), console)
    }

    /// Create a logger with an explicit threshold
    pub fn with_level(name: impl Into<String>, level: LogLevel, console: SharedConsole) -> Self {
        Self {
            name: name.into(),
            level,
            console,
        }
    }

    /// The minimum level this logger emits
    pub fn threshold(&self) -> LogLevel {
        self.level
    }

    fn render(message: &dyn Display, error: Option<&(dyn Error + 'static)>) -> String {
        match error {
            Some(error) => format!("{}: {}", message, error),
            None => message.to_string(),
        }
    }
}

impl fmt::Debug for EngineLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineLogger")
            .field("name", &self.name)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Logger for EngineLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.level)
    }

    fn write(&self, level: LogLevel, message: &dyn Display, error: Option<&(dyn Error + 'static)>) {
        let line = Self::render(message, error);

        match level {
            LogLevel::Warn => self.console.log_warning(&line),
            LogLevel::Error => self.console.log_error(&line),
            // Fatal lands on the default channel along with everything else
            _ => self.console.log_line(&line),
        }

        if let Some(error) = error {
            self.console.log_exception(error);
        }
    }
}
