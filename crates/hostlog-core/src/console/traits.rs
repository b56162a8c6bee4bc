//! Console sink trait definition

use std::error::Error;
use std::sync::Arc;

/// The host engine console
///
/// Every call is fire-and-forget: implementations must not panic and have
/// no way to report failure back to the logger.
///
/// Implementations:
/// - `StdioConsole`: stdout/stderr
/// - `NoOpConsole`: discards everything
/// - `RecordingConsole`: keeps entries in memory
/// - Engine adapters: forward to the engine's own log calls
pub trait ConsoleSink: Send + Sync {
    /// Default (info) channel
    fn log_line(&self, text: &str);

    /// Warning channel
    fn log_warning(&self, text: &str);

    /// Error channel
    fn log_error(&self, text: &str);

    /// Exception channel, receives the raw error object
    fn log_exception(&self, error: &(dyn Error + 'static));
}

/// Type alias for an Arc-wrapped sink
pub type SharedConsole = Arc<dyn ConsoleSink>;
