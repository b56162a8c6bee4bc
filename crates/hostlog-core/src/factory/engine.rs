//! Factory for engine console loggers

use std::fmt;
use std::sync::Arc;

use super::cache::LoggerCache;
use super::traits::LoggerFactory;
use crate::config::{AdapterConfig, ConfigError, ConfigResult};
use crate::console::{create_console_sink, SharedConsole};
use crate::level::LogLevel;
use crate::logging::{EngineLogger, SharedLogger};

/// Hands out one `EngineLogger` per name, all sharing one threshold and console
///
/// The factory is an ordinary owned value: construct it once at startup and
/// pass it (usually as `Arc<dyn LoggerFactory>`) to whatever needs loggers.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hostlog_core::{EngineLoggerFactory, LoggerFactory, Logger, LogLevel};
/// use hostlog_core::console::RecordingConsole;
///
/// let factory = EngineLoggerFactory::new(LogLevel::Info, Arc::new(RecordingConsole::new()));
/// let a = factory.get_logger("Gameplay");
/// let b = factory.get_logger("Gameplay");
/// assert!(Arc::ptr_eq(&a, &b));
/// assert!(!a.is_debug_enabled());
/// ```
pub struct EngineLoggerFactory {
    level: LogLevel,
    console: SharedConsole,
    cache: LoggerCache,
}

impl EngineLoggerFactory {
    /// Create a factory whose cache matches names case-insensitively
    pub fn new(level: LogLevel, console: SharedConsole) -> Self {
        Self::with_case_sensitivity(level, console, false)
    }

    pub fn with_case_sensitivity(level: LogLevel, console: SharedConsole, case_sensitive: bool) -> Self {
        let sink = Arc::clone(&console);
        let cache = LoggerCache::new(case_sensitive, move |name| -> SharedLogger {
            Arc::new(EngineLogger::with_level(name, level, Arc::clone(&sink)))
        });
        Self { level, console, cache }
    }

    /// Build a factory from configuration, resolving the sink by name
    pub fn from_config(config: &AdapterConfig) -> ConfigResult<Self> {
        let console = create_console_sink(&config.sink)
            .ok_or_else(|| ConfigError::UnknownSink(config.sink.clone()))?;
        Ok(Self::with_case_sensitivity(config.level, console, config.case_sensitive))
    }

    /// Threshold applied to every logger this factory creates
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn console(&self) -> &SharedConsole {
        &self.console
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.cache.is_case_sensitive()
    }

    /// Drop all cached loggers; later lookups create fresh instances
    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl LoggerFactory for EngineLoggerFactory {
    fn get_logger(&self, name: &str) -> SharedLogger {
        self.cache.get_or_create(name)
    }
}

impl fmt::Debug for EngineLoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineLoggerFactory")
            .field("level", &self.level)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ConsoleEntry, RecordingConsole};
    use crate::factory::LoggerFactoryExt;

    fn factory(level: LogLevel) -> (EngineLoggerFactory, Arc<RecordingConsole>) {
        let console = Arc::new(RecordingConsole::new());
        (EngineLoggerFactory::new(level, console.clone()), console)
    }

    #[test]
    fn test_get_logger_returns_cached_instance() {
        let (factory, _) = factory(LogLevel::Warn);

        let first = factory.get_logger("X");
        let second = factory.get_logger("X");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.name(), "X");
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_loggers_use_factory_threshold() {
        let (factory, _) = factory(LogLevel::Warn);
        assert_eq!(factory.level(), LogLevel::Warn);

        let logger = factory.get_logger("X");
        assert!(logger.is_warn_enabled());
        assert!(!logger.is_info_enabled());

        let other = factory.get_logger("Y");
        assert!(other.is_error_enabled());
        assert!(!other.is_debug_enabled());
    }

    #[test]
    fn test_off_factory_silences_everything() {
        let (factory, console) = factory(LogLevel::Off);
        let logger = factory.get_logger("X");
        logger.fatal("nobody hears this");
        assert!(console.is_empty());
    }

    #[test]
    fn test_loggers_share_console() {
        let (factory, console) = factory(LogLevel::Debug);
        factory.get_logger("Audio").info("a");
        factory.get_logger("Render").warn("b");

        assert_eq!(
            console.entries(),
            vec![
                ConsoleEntry::Line("a".to_string()),
                ConsoleEntry::Warning("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_by_default() {
        let (factory, _) = factory(LogLevel::Debug);
        assert!(!factory.is_case_sensitive());

        let a = factory.get_logger("Network");
        let b = factory.get_logger("network");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_case_sensitive_factory() {
        let console = Arc::new(RecordingConsole::new());
        let factory = EngineLoggerFactory::with_case_sensitivity(LogLevel::Debug, console, true);

        let a = factory.get_logger("Network");
        let b = factory.get_logger("network");
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(factory.len(), 2);
    }

    #[test]
    fn test_clear() {
        let (factory, _) = factory(LogLevel::Debug);
        let before = factory.get_logger("X");
        factory.clear();
        assert!(factory.is_empty());

        let after = factory.get_logger("X");
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_get_logger_for_type() {
        struct Player;

        let (factory, _) = factory(LogLevel::Debug);
        let logger = factory.get_logger_for::<Player>();
        assert!(logger.name().ends_with("Player"));
        assert!(Arc::ptr_eq(&logger, &factory.get_logger_for::<Player>()));
    }

    #[test]
    fn test_usable_as_trait_object() {
        let (factory, console) = factory(LogLevel::Info);
        let shared: Arc<dyn LoggerFactory> = Arc::new(factory);
        shared.get_logger("Dyn").error("via trait object");
        assert_eq!(console.len(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = AdapterConfig::new(LogLevel::Error)
            .with_sink("noop")
            .with_case_sensitive(true);
        let factory = EngineLoggerFactory::from_config(&config).unwrap();

        assert_eq!(factory.level(), LogLevel::Error);
        assert!(factory.is_case_sensitive());
        assert!(!factory.get_logger("X").is_warn_enabled());
    }

    #[test]
    fn test_from_config_unknown_sink() {
        let config = AdapterConfig::default().with_sink("nonexistent_xyz");
        let err = EngineLoggerFactory::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSink(ref name) if name == "nonexistent_xyz"));
    }
}
