//! Console sink backed by the process's stdout/stderr

use std::error::Error;
use std::fmt::Write;

use super::traits::ConsoleSink;

/// A console that writes to stdout (info) and stderr (warnings, errors, exceptions)
///
/// Stands in for the engine console when the adapter runs outside the engine,
/// e.g. in dedicated servers or tooling.
#[derive(Debug, Clone)]
pub struct StdioConsole {
    prefix: String,
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl StdioConsole {
    /// Create a new stdio console with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "[engine]".to_string(),
        }
    }

    /// Create a stdio console with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Render an error and its `source()` chain, one cause per line
    pub fn render_exception(&self, error: &(dyn Error + 'static)) -> String {
        let mut out = format!("{} EXCEPTION: {}", self.prefix, error);
        let mut source = error.source();
        while let Some(cause) = source {
            let _ = write!(out, "\n    caused by: {}", cause);
            source = cause.source();
        }
        out
    }
}

impl ConsoleSink for StdioConsole {
    fn log_line(&self, text: &str) {
        println!("{} {}", self.prefix, text);
    }

    fn log_warning(&self, text: &str) {
        eprintln!("{} WARNING: {}", self.prefix, text);
    }

    fn log_error(&self, text: &str) {
        eprintln!("{} ERROR: {}", self.prefix, text);
    }

    fn log_exception(&self, error: &(dyn Error + 'static)) {
        eprintln!("{}", self.render_exception(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::io;

    #[derive(Debug)]
    struct Wrapped(io::Error);

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "failed to load asset")
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_stdio_console_creation() {
        let console = StdioConsole::new();
        assert_eq!(console.prefix(), "[engine]");

        let custom = StdioConsole::with_prefix("[game]");
        assert_eq!(custom.prefix(), "[game]");
    }

    #[test]
    fn test_render_exception_includes_sources() {
        let console = StdioConsole::new();
        let err = Wrapped(io::Error::new(io::ErrorKind::NotFound, "textures/sky.png"));

        let rendered = console.render_exception(&err);
        assert_eq!(
            rendered,
            "[engine] EXCEPTION: failed to load asset\n    caused by: textures/sky.png"
        );
    }

    #[test]
    fn test_stdio_console_logs() {
        // This test just verifies the console doesn't panic
        let console = StdioConsole::new();
        console.log_line("line");
        console.log_warning("warning");
        console.log_error("error");
        console.log_exception(&io::Error::new(io::ErrorKind::Other, "boom"));
    }
}
