use super::level::AtomicLevel;
use super::{lock, Handler, Level, Record};
use std::collections::HashMap;
use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// Level assumed when neither a logger nor any of its ancestors sets one
pub const DEFAULT_EFFECTIVE_LEVEL: Level = Level::Warning;

/// Registry entry for one logger name
struct LoggerNode {
    name: String,
    level: AtomicLevel,
    handlers: RwLock<Vec<Arc<dyn Handler>>>,
    propagate: AtomicBool,
}

impl LoggerNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            level: AtomicLevel::new(None),
            handlers: RwLock::new(Vec::new()),
            propagate: AtomicBool::new(true),
        }
    }

    fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn replace_handlers(&self, handlers: Vec<Arc<dyn Handler>>) {
        *self.handlers.write().unwrap_or_else(|e| e.into_inner()) = handlers;
    }
}

/// LogManager keeps every backend logger of a context, keyed by dotted name
///
/// A logger `a.b.c` is a child of `a.b` and `a`: records it accepts are also
/// passed to the handlers of those ancestors that exist in the manager, until
/// one of them has propagation turned off.
#[derive(Clone, Default)]
pub struct LogManager {
    loggers: Arc<Mutex<HashMap<String, Arc<LoggerNode>>>>,
}

impl LogManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the logger registered under `name`, creating it if needed
    pub fn get(&self, name: &str) -> Logger {
        let mut loggers = lock(&self.loggers);
        let node = Self::get_or_insert(&mut loggers, name);
        self.handle(node)
    }

    /// Whether a logger with this exact name was ever created
    pub fn contains(&self, name: &str) -> bool {
        lock(&self.loggers).contains_key(name)
    }

    /// All registered logger names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = lock(&self.loggers).keys().cloned().collect();
        names.sort();
        names
    }

    /// Set the level of `name` and replace its whole handler set
    ///
    /// Runs under the manager lock, so two concurrent configurations of the
    /// same name cannot interleave into duplicate or missing handlers.
    pub fn configure(&self, name: &str, level: Level, handlers: Vec<Arc<dyn Handler>>) -> Logger {
        let mut loggers = lock(&self.loggers);
        let node = Self::get_or_insert(&mut loggers, name);
        node.level.set(Some(level));
        node.replace_handlers(handlers);
        tracing::debug!(logger = name, level = %level, "configured logger");
        self.handle(node)
    }

    fn get_or_insert(
        loggers: &mut HashMap<String, Arc<LoggerNode>>,
        name: &str,
    ) -> Arc<LoggerNode> {
        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(LoggerNode::new(name))),
        )
    }

    fn handle(&self, node: Arc<LoggerNode>) -> Logger {
        Logger {
            node,
            manager: self.clone(),
        }
    }

    /// Existing ancestors of `name`, nearest first
    fn ancestors(&self, name: &str) -> Vec<Arc<LoggerNode>> {
        let loggers = lock(&self.loggers);
        let mut ancestors = Vec::new();
        let mut current = name;
        while let Some((parent, _)) = current.rsplit_once('.') {
            if let Some(node) = loggers.get(parent) {
                ancestors.push(Arc::clone(node));
            }
            current = parent;
        }
        ancestors
    }
}

/// Handle to a backend logger
///
/// Handles are cheap to clone; all handles obtained for the same name from
/// the same manager refer to the same logger.
#[derive(Clone)]
pub struct Logger {
    node: Arc<LoggerNode>,
    manager: LogManager,
}

impl Logger {
    pub fn name(&self) -> &str {
        &self.node.name
    }

    /// Level set on this logger itself, `None` when inherited
    pub fn level(&self) -> Option<Level> {
        self.node.level.get()
    }

    pub fn set_level(&self, level: Level) {
        self.node.level.set(Some(level));
    }

    /// Level actually used to filter records at this logger
    pub fn effective_level(&self) -> Level {
        if let Some(level) = self.level() {
            return level;
        }
        self.manager
            .ancestors(self.name())
            .iter()
            .find_map(|node| node.level.get())
            .unwrap_or(DEFAULT_EFFECTIVE_LEVEL)
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.effective_level()
    }

    /// Handlers attached directly to this logger
    pub fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.node.handlers()
    }

    pub fn add_handler(&self, handler: Arc<dyn Handler>) {
        self.node
            .handlers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(handler);
    }

    pub fn clear_handlers(&self) {
        self.node.replace_handlers(Vec::new());
    }

    pub fn propagate(&self) -> bool {
        self.node.propagate.load(Ordering::Acquire)
    }

    pub fn set_propagate(&self, propagate: bool) {
        self.node.propagate.store(propagate, Ordering::Release);
    }

    /// Get or create the child logger `{name}.{suffix}`
    pub fn child(&self, suffix: &str) -> Logger {
        self.manager.get(&format!("{}.{}", self.name(), suffix))
    }

    /// Whether both handles refer to the same backend logger
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::Debug, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::Info, message);
    }

    #[track_caller]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(Level::Warning, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::Error, message);
    }

    #[track_caller]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(Level::Critical, message);
    }

    #[track_caller]
    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        if !self.is_enabled_for(level) {
            return;
        }
        let record = Record::new(
            self.name(),
            level,
            message.as_ref().to_string(),
            Location::caller(),
            None,
        );
        self.dispatch(&record);
    }

    /// Entry point of the logging macros, which know the caller's module path
    #[doc(hidden)]
    #[track_caller]
    pub fn log_args(&self, level: Level, args: fmt::Arguments<'_>, module_path: &'static str) {
        if !self.is_enabled_for(level) {
            return;
        }
        let record = Record::new(
            self.name(),
            level,
            args.to_string(),
            Location::caller(),
            Some(module_path),
        );
        self.dispatch(&record);
    }

    /// Flush every handler reachable from this logger
    pub fn flush(&self) {
        for handler in self.chain_handlers() {
            if let Err(e) = handler.flush() {
                tracing::warn!(logger = self.name(), error = %e, "failed to flush log handler");
            }
        }
    }

    /// Handlers of this logger followed by those of its ancestors, honoring propagation
    fn chain_handlers(&self) -> Vec<Arc<dyn Handler>> {
        let mut handlers = self.node.handlers();
        if self.propagate() {
            for ancestor in self.manager.ancestors(self.name()) {
                handlers.extend(ancestor.handlers());
                if !ancestor.propagate.load(Ordering::Acquire) {
                    break;
                }
            }
        }
        handlers
    }

    fn dispatch(&self, record: &Record) {
        // Write failures are dropped here; logging never fails the caller
        for handler in self.chain_handlers() {
            if let Err(e) = handler.handle(record) {
                tracing::warn!(logger = self.name(), error = %e, "dropped log record");
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &self.level())
            .field("handlers", &self.node.handlers().len())
            .finish()
    }
}
