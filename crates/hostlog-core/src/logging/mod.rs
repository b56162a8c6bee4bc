//! Level-filtered loggers

mod traits;
mod engine;

pub use traits::{Logger, BoxedLogger, SharedLogger};
pub use engine::EngineLogger;
