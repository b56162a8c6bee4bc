//! Name-keyed logger cache

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::logging::SharedLogger;

/// Function that builds a logger for a name on a cache miss
pub type CreateLogger = Box<dyn Fn(&str) -> SharedLogger + Send + Sync>;

/// Memoizes loggers by name
///
/// At most one logger exists per key. Lookups take the read lock; a miss
/// takes the write lock and inserts through the map entry, so when several
/// threads miss on the same name only one logger is created and all of
/// them receive it.
///
/// Keys are compared case-insensitively unless the cache is created
/// case-sensitive. A logger keeps the spelling of the name it was first
/// requested with.
pub struct LoggerCache {
    case_sensitive: bool,
    create: CreateLogger,
    loggers: RwLock<HashMap<String, SharedLogger>>,
}

impl LoggerCache {
    pub fn new<F>(case_sensitive: bool, create: F) -> Self
    where
        F: Fn(&str) -> SharedLogger + Send + Sync + 'static,
    {
        Self {
            case_sensitive,
            create: Box::new(create),
            loggers: RwLock::new(HashMap::new()),
        }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(name.to_lowercase())
        }
    }

    /// Return the cached logger for `name`, creating and caching it on a miss
    pub fn get_or_create(&self, name: &str) -> SharedLogger {
        let key = self.key(name);

        {
            let loggers = self.loggers.read();
            if let Some(logger) = loggers.get(&*key) {
                return Arc::clone(logger);
            }
        }

        let mut loggers = self.loggers.write();
        let logger = loggers
            .entry(key.into_owned())
            .or_insert_with(|| (self.create)(name));
        Arc::clone(logger)
    }

    /// Whether a logger for `name` is cached
    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(&*self.key(name))
    }

    /// Drop every cached logger. Loggers already handed out stay usable.
    pub fn clear(&self) {
        self.loggers.write().clear();
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for LoggerCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerCache")
            .field("case_sensitive", &self.case_sensitive)
            .field("len", &self.len())
            .finish()
    }
}
