//! Console sink registry for creating sinks by name

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::noop::NoOpConsole;
use super::recording::RecordingConsole;
use super::stdio::StdioConsole;
use super::traits::SharedConsole;

/// Factory function type for creating console sinks
pub type SinkFactory = Box<dyn Fn() -> SharedConsole + Send + Sync>;

/// Definition of a registered console sink
pub struct SinkDefinition {
    /// Unique name for this sink
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: SinkFactory,
}

impl std::fmt::Debug for SinkDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

fn builtin(name: &str, description: &str, factory: SinkFactory) -> (String, SinkDefinition) {
    (
        name.to_string(),
        SinkDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    )
}

/// Global registry of console sinks
static REGISTRY: Lazy<RwLock<HashMap<String, SinkDefinition>>> = Lazy::new(|| {
    let map = HashMap::from([
        builtin(
            "stdio",
            "Write to stdout (info) and stderr (warnings, errors, exceptions)",
            Box::new(|| -> SharedConsole { Arc::new(StdioConsole::new()) }),
        ),
        builtin(
            "noop",
            "Discard all output",
            Box::new(|| -> SharedConsole { Arc::new(NoOpConsole::new()) }),
        ),
        builtin(
            "memory",
            "Record output in memory",
            Box::new(|| -> SharedConsole { Arc::new(RecordingConsole::new()) }),
        ),
    ]);
    RwLock::new(map)
});

/// Register a new console sink type
///
/// Engine integrations call this at startup so that configuration can
/// select the engine console by name. Registering an existing name
/// replaces it.
///
/// # Example
///
/// ```
/// use hostlog_core::console::{
///     register_console_sink, has_console_sink, unregister_console_sink,
///     NoOpConsole, SharedConsole,
/// };
/// use std::sync::Arc;
///
/// register_console_sink(
///     "headless",
///     "Dedicated server console",
///     Box::new(|| -> SharedConsole { Arc::new(NoOpConsole::new()) }),
/// );
/// assert!(has_console_sink("headless"));
/// assert!(unregister_console_sink("headless"));
/// ```
pub fn register_console_sink(name: &str, description: &str, factory: SinkFactory) {
    let mut registry = REGISTRY.write();
    registry.insert(
        name.to_string(),
        SinkDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a console sink by name
///
/// Returns `None` if the name is not registered.
pub fn create_console_sink(name: &str) -> Option<SharedConsole> {
    let registry = REGISTRY.read();
    registry.get(name).map(|def| (def.factory)())
}

/// List all registered sinks as (name, description) pairs
pub fn list_console_sinks() -> Vec<(String, String)> {
    let registry = REGISTRY.read();
    registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect()
}

/// Check if a sink is registered
pub fn has_console_sink(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Unregister a console sink (mainly for testing)
pub fn unregister_console_sink(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}
