//! Logger factories
//!
//! - `LoggerFactory` trait: name in, shared logger out
//! - `LoggerCache`: memoizes created loggers by name
//! - `EngineLoggerFactory`: hands out `EngineLogger`s with a fixed threshold

mod traits;
mod cache;
mod engine;

pub use traits::{LoggerFactory, LoggerFactoryExt, SharedLoggerFactory};
pub use cache::{LoggerCache, CreateLogger};
pub use engine::EngineLoggerFactory;
