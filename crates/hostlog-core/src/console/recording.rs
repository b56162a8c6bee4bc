//! In-memory console sink

use std::error::Error;

use parking_lot::Mutex;

use super::traits::ConsoleSink;

/// One call received by a `RecordingConsole`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEntry {
    Line(String),
    Warning(String),
    Error(String),
    /// The exception channel keeps the error's rendered text
    Exception(String),
}

impl ConsoleEntry {
    pub fn text(&self) -> &str {
        match self {
            ConsoleEntry::Line(t)
            | ConsoleEntry::Warning(t)
            | ConsoleEntry::Error(t)
            | ConsoleEntry::Exception(t) => t,
        }
    }

    pub fn is_exception(&self) -> bool {
        matches!(self, ConsoleEntry::Exception(_))
    }
}

/// A console that records every call in order
///
/// Used as a test double, and by embedders that drain console output
/// once per frame with [`RecordingConsole::take`].
///
/// # Example
///
/// ```
/// use hostlog_core::console::{ConsoleEntry, ConsoleSink, RecordingConsole};
///
/// let console = RecordingConsole::new();
/// console.log_warning("low memory");
/// assert_eq!(console.entries(), vec![ConsoleEntry::Warning("low memory".to_string())]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingConsole {
    entries: Mutex<Vec<ConsoleEntry>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far
    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.entries.lock().clone()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<ConsoleEntry> {
        std::mem::take(&mut *self.entries.lock())
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of calls made to the exception channel
    pub fn exception_count(&self) -> usize {
        self.entries.lock().iter().filter(|e| e.is_exception()).count()
    }

    fn push(&self, entry: ConsoleEntry) {
        self.entries.lock().push(entry);
    }
}

impl ConsoleSink for RecordingConsole {
    fn log_line(&self, text: &str) {
        self.push(ConsoleEntry::Line(text.to_string()));
    }

    fn log_warning(&self, text: &str) {
        self.push(ConsoleEntry::Warning(text.to_string()));
    }

    fn log_error(&self, text: &str) {
        self.push(ConsoleEntry::Error(text.to_string()));
    }

    fn log_exception(&self, error: &(dyn Error + 'static)) {
        self.push(ConsoleEntry::Exception(error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_records_in_order() {
        let console = RecordingConsole::new();
        assert!(console.is_empty());

        console.log_line("a");
        console.log_error("b");
        console.log_exception(&io::Error::new(io::ErrorKind::Other, "c"));

        assert_eq!(
            console.entries(),
            vec![
                ConsoleEntry::Line("a".to_string()),
                ConsoleEntry::Error("b".to_string()),
                ConsoleEntry::Exception("c".to_string()),
            ]
        );
        assert_eq!(console.exception_count(), 1);
    }

    #[test]
    fn test_take_drains() {
        let console = RecordingConsole::new();
        console.log_warning("w");

        let drained = console.take();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].text(), "w");
        assert!(console.is_empty());
    }

    #[test]
    fn test_clear() {
        let console = RecordingConsole::new();
        console.log_line("a");
        console.log_line("b");
        assert_eq!(console.len(), 2);

        console.clear();
        assert!(console.is_empty());
    }
}
