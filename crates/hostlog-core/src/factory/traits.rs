//! Logger factory trait definition

use std::sync::Arc;

use crate::logging::SharedLogger;

/// Produces loggers by name
///
/// Implementations decide whether lookups are cached; `EngineLoggerFactory`
/// returns the same instance for every lookup of a name.
pub trait LoggerFactory: Send + Sync {
    /// Get the logger for `name`, creating it if needed
    fn get_logger(&self, name: &str) -> SharedLogger;
}

/// Type alias for an Arc-wrapped factory
pub type SharedLoggerFactory = Arc<dyn LoggerFactory>;

/// Extension trait for naming loggers after types
pub trait LoggerFactoryExt: LoggerFactory {
    /// Get the logger named after `T`'s type path
    fn get_logger_for<T: ?Sized>(&self) -> SharedLogger {
        self.get_logger(std::any::type_name::<T>())
    }
}

// Implement LoggerFactoryExt for all LoggerFactory implementations
impl<F: LoggerFactory + ?Sized> LoggerFactoryExt for F {}
