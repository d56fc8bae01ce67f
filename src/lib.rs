// Library exports for centralog
//
// Named loggers with console/file handlers, a lazily created central
// logger and one-line shortcuts for ad hoc logging.

mod macros;

pub mod central;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod facade;
pub mod logs;

pub use central::{
    get_central_logger, log_critical, log_debug, log_error, log_info, log_warning,
    CENTRAL_LOGGER_NAME,
};
pub use config::{LoggerConfig, StyleKind};
pub use context::LoggingContext;
pub use error::{LoggerError, Result};
pub use facade::{get_logger, NamedLogger};
pub use logs::{apply_style, Handler, Level, Logger};
