// Context module - Process-wide logging state

use crate::config::DEFAULT_LOG_DIR;
use crate::logs::{ConsoleTarget, LogManager, Logger};
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

static GLOBAL_CONTEXT: Lazy<LoggingContext> = Lazy::new(LoggingContext::new);

/// Everything loggers of one application share
///
/// Holds the backend logger manager, the directory default log files go to,
/// the console target and the lazily created central logger. The free
/// functions of this crate all run against [`LoggingContext::global`];
/// separate contexts can be created for tests or embedding.
pub struct LoggingContext {
    manager: LogManager,
    log_dir: PathBuf,
    console: ConsoleTarget,
    /// Set once by the first central logger request, never replaced
    pub(crate) central: Mutex<Option<Logger>>,
}

impl LoggingContext {
    /// Context writing files under `logs/` and console output to stdout
    pub fn new() -> Self {
        Self {
            manager: LogManager::new(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            console: ConsoleTarget::Stdout,
            central: Mutex::new(None),
        }
    }

    /// The process-wide context
    pub fn global() -> &'static LoggingContext {
        &GLOBAL_CONTEXT
    }

    pub fn with_log_dir<P: AsRef<Path>>(mut self, log_dir: P) -> Self {
        self.log_dir = log_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_console(mut self, console: ConsoleTarget) -> Self {
        self.console = console;
        self
    }

    pub fn manager(&self) -> &LogManager {
        &self.manager
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn console(&self) -> &ConsoleTarget {
        &self.console
    }

    /// Backend logger registered under `name`, created if needed
    pub fn logger(&self, name: &str) -> Logger {
        self.manager.get(name)
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}
