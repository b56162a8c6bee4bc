//! Bridge from the `log` crate facade
//!
//! Installing a [`LogBridge`] routes every `log::info!`/`log::warn!`/... in
//! the process through a [`LoggerFactory`]. The record's target (the module
//! path by default) picks the logger.

use std::sync::Arc;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::factory::{EngineLoggerFactory, SharedLoggerFactory};
use crate::level::LogLevel;

/// Map a `log` crate level onto ours
pub fn from_log_level(level: Level) -> LogLevel {
    match level {
        Level::Error => LogLevel::Error,
        Level::Warn => LogLevel::Warn,
        Level::Info => LogLevel::Info,
        Level::Debug => LogLevel::Debug,
        Level::Trace => LogLevel::Trace,
    }
}

/// Most verbose `log` level that can pass `threshold`
///
/// `log` has nothing above `Error`, so a `Fatal` threshold still lets
/// `Error` records through the facade; the loggers then drop them.
pub fn to_level_filter(threshold: LogLevel) -> LevelFilter {
    match threshold {
        LogLevel::Trace => LevelFilter::Trace,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Error | LogLevel::Fatal => LevelFilter::Error,
        LogLevel::Off => LevelFilter::Off,
    }
}

/// `log::Log` implementation backed by a logger factory
pub struct LogBridge {
    factory: SharedLoggerFactory,
    threshold: LogLevel,
}

impl LogBridge {
    /// `threshold` sets the facade's max level and answers `enabled`
    /// without touching the factory; each logger still applies its own
    /// threshold when a record is written.
    pub fn new(factory: SharedLoggerFactory, threshold: LogLevel) -> Self {
        Self { factory, threshold }
    }

    pub fn for_engine(factory: Arc<EngineLoggerFactory>) -> Self {
        let threshold = factory.level();
        Self::new(factory, threshold)
    }

    pub fn max_level(&self) -> LevelFilter {
        to_level_filter(self.threshold)
    }

    /// Install as the process-wide `log` logger
    ///
    /// Fails if another logger was installed first.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let max_level = self.max_level();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        from_log_level(metadata.level()).passes(self.threshold)
    }

    fn log(&self, record: &Record<'_>) {
        let logger = self.factory.get_logger(record.target());
        let level = from_log_level(record.level());
        if logger.is_enabled(level) {
            logger.write(level, record.args(), None);
        }
    }

    fn flush(&self) {}
}

impl std::fmt::Debug for LogBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogBridge")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ConsoleEntry, RecordingConsole};

    fn bridge(level: LogLevel) -> (LogBridge, Arc<EngineLoggerFactory>, Arc<RecordingConsole>) {
        let console = Arc::new(RecordingConsole::new());
        let factory = Arc::new(EngineLoggerFactory::new(level, console.clone()));
        (LogBridge::for_engine(factory.clone()), factory, console)
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(from_log_level(Level::Error), LogLevel::Error);
        assert_eq!(from_log_level(Level::Warn), LogLevel::Warn);
        assert_eq!(from_log_level(Level::Trace), LogLevel::Trace);

        assert_eq!(to_level_filter(LogLevel::Debug), LevelFilter::Debug);
        assert_eq!(to_level_filter(LogLevel::Fatal), LevelFilter::Error);
        assert_eq!(to_level_filter(LogLevel::Off), LevelFilter::Off);
    }

    #[test]
    fn test_enabled_follows_threshold() {
        let (bridge, _, _) = bridge(LogLevel::Warn);
        let warn = Metadata::builder().level(Level::Warn).target("game").build();
        let info = Metadata::builder().level(Level::Info).target("game").build();

        assert!(bridge.enabled(&warn));
        assert!(!bridge.enabled(&info));
        assert_eq!(bridge.max_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_enabled_does_not_create_loggers() {
        let (bridge, factory, _) = bridge(LogLevel::Info);
        for target in ["game::audio", "game::render", "net"] {
            let metadata = Metadata::builder().level(Level::Error).target(target).build();
            assert!(bridge.enabled(&metadata));
        }
        assert!(factory.is_empty());
    }

    #[test]
    fn test_off_bridge_disables_everything() {
        let (bridge, _, _) = bridge(LogLevel::Off);
        let error = Metadata::builder().level(Level::Error).target("game").build();
        assert!(!bridge.enabled(&error));
    }

    #[test]
    fn test_records_route_by_target() {
        let (bridge, factory, console) = bridge(LogLevel::Info);

        bridge.log(
            &Record::builder()
                .level(Level::Warn)
                .target("game::audio")
                .args(format_args!("{} voices dropped", 3))
                .build(),
        );
        bridge.log(
            &Record::builder()
                .level(Level::Debug)
                .target("game::audio")
                .args(format_args!("filtered"))
                .build(),
        );

        assert_eq!(
            console.entries(),
            vec![ConsoleEntry::Warning("3 voices dropped".to_string())]
        );
        assert_eq!(factory.len(), 1);
    }

    #[test]
    fn test_error_record_goes_to_error_channel() {
        let (bridge, _, console) = bridge(LogLevel::Trace);
        bridge.log(
            &Record::builder()
                .level(Level::Error)
                .target("net")
                .args(format_args!("disconnected"))
                .build(),
        );
        assert_eq!(console.entries(), vec![ConsoleEntry::Error("disconnected".to_string())]);
    }

    #[test]
    fn test_install_routes_facade() {
        let (bridge, _, console) = bridge(LogLevel::Info);
        bridge.install().unwrap();

        log::warn!(target: "bridge_install_test", "installed");

        let entries = console.entries();
        assert!(entries.contains(&ConsoleEntry::Warning("installed".to_string())));
    }
}
