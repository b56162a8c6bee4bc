//! Logger trait definition

use std::error::Error;
use std::fmt::Display;
use std::sync::Arc;

use crate::level::LogLevel;

/// Level-filtered logger capability
///
/// Implementations answer whether a level is enabled and know how to write
/// an event once the caller has decided to emit it. The provided methods
/// (`log`, `info`, `error_with_error`, ...) form the dispatch layer: they
/// check enablement first and only then call [`Logger::write`].
///
/// Implementations:
/// - `EngineLogger`: forwards to a host engine console
pub trait Logger: Send + Sync {
    /// Name this logger was created under
    fn name(&self) -> &str;

    /// Whether messages at `level` are emitted
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Emit one event. Callers are expected to have checked enablement.
    fn write(&self, level: LogLevel, message: &dyn Display, error: Option<&(dyn Error + 'static)>);

    fn is_trace_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Trace)
    }

    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Fatal)
    }

    /// Write the event if `level` is enabled
    fn log(&self, level: LogLevel, message: &dyn Display, error: Option<&(dyn Error + 'static)>) {
        if self.is_enabled(level) {
            self.write(level, message, error);
        }
    }

    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, &message, None);
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, &message, None);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, &message, None);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, &message, None);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, &message, None);
    }

    fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, &message, None);
    }

    fn trace_with_error(&self, message: &str, error: &(dyn Error + 'static)) {
        self.log(LogLevel::Trace, &message, Some(error));
    }

    fn debug_with_error(&self, message: &str, error: &(dyn Error + 'static)) {
        self.log(LogLevel::Debug, &message, Some(error));
    }

    fn info_with_error(&self, message: &str, error: &(dyn Error + 'static)) {
        self.log(LogLevel::Info, &message, Some(error));
    }

    fn warn_with_error(&self, message: &str, error: &(dyn Error + 'static)) {
        self.log(LogLevel::Warn, &message, Some(error));
    }

    fn error_with_error(&self, message: &str, error: &(dyn Error + 'static)) {
        self.log(LogLevel::Error, &message, Some(error));
    }

    fn fatal_with_error(&self, message: &str, error: &(dyn Error + 'static)) {
        self.log(LogLevel::Fatal, &message, Some(error));
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Convenience macros for logging with format arguments
///
/// The logger expression is evaluated once; the message is only
/// formatted when the level is enabled.
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {{
        let logger = &$logger;
        if logger.is_trace_enabled() {
            logger.trace(&format!($($arg)*))
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {{
        let logger = &$logger;
        if logger.is_debug_enabled() {
            logger.debug(&format!($($arg)*))
        }
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {{
        let logger = &$logger;
        if logger.is_info_enabled() {
            logger.info(&format!($($arg)*))
        }
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {{
        let logger = &$logger;
        if logger.is_warn_enabled() {
            logger.warn(&format!($($arg)*))
        }
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {{
        let logger = &$logger;
        if logger.is_error_enabled() {
            logger.error(&format!($($arg)*))
        }
    }};
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {{
        let logger = &$logger;
        if logger.is_fatal_enabled() {
            logger.fatal(&format!($($arg)*))
        }
    }};
}
