//! Host console sinks
//!
//! This module provides the boundary to the host engine's console:
//! - `ConsoleSink` trait with the three write channels and the exception channel
//! - Built-in sinks: `StdioConsole`, `NoOpConsole`, `RecordingConsole`
//! - A registry for creating sinks by name

mod traits;
mod stdio;
mod noop;
mod recording;
mod registry;

pub use traits::{ConsoleSink, SharedConsole};
pub use stdio::StdioConsole;
pub use noop::NoOpConsole;
pub use recording::{ConsoleEntry, RecordingConsole};
pub use registry::{
    register_console_sink, create_console_sink, has_console_sink,
    list_console_sinks, unregister_console_sink, SinkDefinition, SinkFactory,
};
