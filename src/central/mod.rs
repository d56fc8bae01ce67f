// Central module - The process-wide "CENTRAL" logger and its shortcuts

use crate::config::{date_stamp, LoggerConfig};
use crate::context::LoggingContext;
use crate::error::Result;
use crate::facade::NamedLogger;
use crate::logs::{lock, Logger};

/// Name of the central logger
pub const CENTRAL_LOGGER_NAME: &str = "CENTRAL";

impl LoggingContext {
    /// The central logger of this context, created on first use
    ///
    /// The first call decides `verbose` and `log_to_file`; later calls return
    /// the same handle and ignore their arguments. A failed first creation
    /// leaves nothing behind, so the next call tries again.
    pub fn central_logger(&self, verbose: bool, log_to_file: bool) -> Result<Logger> {
        let mut central = lock(&self.central);
        if let Some(logger) = central.as_ref() {
            return Ok(logger.clone());
        }

        let config = LoggerConfig::new(CENTRAL_LOGGER_NAME)
            .with_verbose(verbose)
            .with_log_to_file(log_to_file)
            .with_log_file_path(self.log_dir().join(format!("central_{}.log", date_stamp())));
        let logger = NamedLogger::with_context(self, config)?.get_logger(None);

        tracing::debug!(verbose, log_to_file, "created central logger");
        *central = Some(logger.clone());
        Ok(logger)
    }

    pub fn central_logger_initialized(&self) -> bool {
        lock(&self.central).is_some()
    }

    /// Debug to the central logger, creating it verbose if it does not exist yet
    #[track_caller]
    pub fn log_debug(&self, message: impl AsRef<str>) -> Result<()> {
        self.central_logger(true, true)?.debug(message);
        Ok(())
    }

    #[track_caller]
    pub fn log_info(&self, message: impl AsRef<str>) -> Result<()> {
        self.central_logger(false, true)?.info(message);
        Ok(())
    }

    #[track_caller]
    pub fn log_warning(&self, message: impl AsRef<str>) -> Result<()> {
        self.central_logger(false, true)?.warning(message);
        Ok(())
    }

    #[track_caller]
    pub fn log_error(&self, message: impl AsRef<str>) -> Result<()> {
        self.central_logger(false, true)?.error(message);
        Ok(())
    }

    #[track_caller]
    pub fn log_critical(&self, message: impl AsRef<str>) -> Result<()> {
        self.central_logger(false, true)?.critical(message);
        Ok(())
    }
}

/// The process-wide central logger; see [`LoggingContext::central_logger`]
pub fn get_central_logger(verbose: bool, log_to_file: bool) -> Result<Logger> {
    LoggingContext::global().central_logger(verbose, log_to_file)
}

/// Quick debug logging to the central logger
#[track_caller]
pub fn log_debug(message: impl AsRef<str>) -> Result<()> {
    LoggingContext::global().log_debug(message)
}

/// Quick info logging to the central logger
#[track_caller]
pub fn log_info(message: impl AsRef<str>) -> Result<()> {
    LoggingContext::global().log_info(message)
}

/// Quick warning logging to the central logger
#[track_caller]
pub fn log_warning(message: impl AsRef<str>) -> Result<()> {
    LoggingContext::global().log_warning(message)
}

/// Quick error logging to the central logger
#[track_caller]
pub fn log_error(message: impl AsRef<str>) -> Result<()> {
    LoggingContext::global().log_error(message)
}

/// Quick critical logging to the central logger
#[track_caller]
pub fn log_critical(message: impl AsRef<str>) -> Result<()> {
    LoggingContext::global().log_critical(message)
}
