// Facade module - Named loggers with console and file handlers

use crate::config::{LoggerConfig, DEFAULT_LOGGER_NAME};
use crate::context::LoggingContext;
use crate::error::Result;
use crate::logs::{ConsoleHandler, FileHandler, Handler, Level, Logger};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A backend logger bound to a name and a configured handler set
///
/// Constructing a `NamedLogger` replaces whatever handlers were registered
/// for its name, so building the same logger twice never duplicates output.
#[derive(Debug)]
pub struct NamedLogger {
    name: String,
    level: Level,
    log_to_file: bool,
    log_file_path: PathBuf,
    logger: Logger,
}

impl NamedLogger {
    /// Create a named logger in the process-wide context
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Self::with_context(LoggingContext::global(), config)
    }

    /// Create a named logger in `ctx`
    ///
    /// # Arguments
    /// * `ctx` - Context supplying the logger manager, log directory and console
    /// * `config` - Name, level and file settings
    ///
    /// # Returns
    /// * `Ok(NamedLogger)` - Handlers are attached and the logger is ready
    /// * `Err(LoggerError)` - Log directory or file could not be created; the
    ///   previously registered handlers are left untouched
    pub fn with_context(ctx: &LoggingContext, config: LoggerConfig) -> Result<Self> {
        let level = config.effective_level();
        let log_file_path = config.resolved_file_path(ctx.log_dir());

        let console = ConsoleHandler::with_target(ctx.console(), level)
            .with_style(config.console_style.build());
        let mut handlers: Vec<Arc<dyn Handler>> = vec![Arc::new(console)];

        if config.log_to_file {
            handlers.push(Arc::new(FileHandler::new(&log_file_path, level)?));
        }

        let logger = ctx.manager().configure(&config.name, level, handlers);

        Ok(Self {
            name: config.name,
            level,
            log_to_file: config.log_to_file,
            log_file_path,
            logger,
        })
    }

    /// This logger's backend handle, or the child `{name}.{module}` of it
    ///
    /// Children carry no handlers of their own; their records reach this
    /// logger's handlers through propagation.
    pub fn get_logger(&self, module_name: Option<&str>) -> Logger {
        match module_name {
            Some(module) => self.logger.child(module),
            None => self.logger.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn log_to_file(&self) -> bool {
        self.log_to_file
    }

    /// File path in use, or the one that would be used with file logging enabled
    pub fn log_file_path(&self) -> &Path {
        &self.log_file_path
    }

    #[track_caller]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.logger.debug(message);
    }

    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.logger.info(message);
    }

    #[track_caller]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.logger.warning(message);
    }

    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.logger.error(message);
    }

    #[track_caller]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.logger.critical(message);
    }

    #[doc(hidden)]
    #[track_caller]
    pub fn log_args(&self, level: Level, args: fmt::Arguments<'_>, module_path: &'static str) {
        self.logger.log_args(level, args, module_path);
    }

    /// Change the level of the logger and of every handler attached to it
    ///
    /// Unknown level names fall back to INFO.
    pub fn set_level(&mut self, level: &str) {
        let level = Level::parse_or_default(level);
        self.level = level;
        self.logger.set_level(level);
        for handler in self.logger.handlers() {
            handler.set_level(level);
        }
    }

    pub fn add_custom_handler(&self, handler: Arc<dyn Handler>) {
        self.logger.add_handler(handler);
    }

    pub fn remove_all_handlers(&self) {
        self.logger.clear_handlers();
    }
}

impl LoggingContext {
    /// Build a [`NamedLogger`] in this context
    pub fn named_logger(&self, config: LoggerConfig) -> Result<NamedLogger> {
        NamedLogger::with_context(self, config)
    }

    /// Quick logger access
    ///
    /// Builds a fresh named logger called `module_name` (or the default name)
    /// and returns its top-level backend handle.
    pub fn get_logger(
        &self,
        module_name: Option<&str>,
        verbose: bool,
        log_to_file: bool,
    ) -> Result<Logger> {
        let config = LoggerConfig::new(module_name.unwrap_or(DEFAULT_LOGGER_NAME))
            .with_verbose(verbose)
            .with_log_to_file(log_to_file);
        Ok(self.named_logger(config)?.get_logger(None))
    }
}

/// Quick logger access in the process-wide context
pub fn get_logger(module_name: Option<&str>, verbose: bool, log_to_file: bool) -> Result<Logger> {
    LoggingContext::global().get_logger(module_name, verbose, log_to_file)
}
