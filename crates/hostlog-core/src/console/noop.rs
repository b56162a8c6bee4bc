//! No-op console sink

use std::error::Error;

use super::traits::ConsoleSink;

/// A console that does nothing
///
/// Useful when a host has no console attached (headless servers, benchmarks).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpConsole;

impl NoOpConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for NoOpConsole {
    fn log_line(&self, _text: &str) {}
    fn log_warning(&self, _text: &str) {}
    fn log_error(&self, _text: &str) {}
    fn log_exception(&self, _error: &(dyn Error + 'static)) {}
}
