// CLI module - Self-test entry point exercising every level

mod output;

pub use output::print_error;

use crate::central::{
    get_central_logger, log_critical, log_debug, log_error, log_info, log_warning,
};
use crate::config::{LoggerConfig, StyleKind};
use crate::error::{LoggerError, Result};
use crate::facade::{get_logger, NamedLogger};
use crate::logs::{apply_style, Level, Logger};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// centralog - exercise a module logger and the central logger
///
/// Both loggers run at DEBUG unless `--quiet` is given. Log files go to
/// `logs/` under the working directory.
#[derive(Parser, Debug)]
#[command(name = "centralog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run both loggers at INFO instead of DEBUG
    #[arg(short, long)]
    quiet: bool,

    /// Also write the module logger to a file
    #[arg(long)]
    module_file: bool,

    /// Do not write the central log file
    #[arg(long)]
    no_central_file: bool,

    /// Name of the module logger
    #[arg(short, long, default_value = "TestModule")]
    module: String,

    /// Console style of the module logger
    #[arg(short, long, value_enum, default_value_t = StyleArg::Normal)]
    style: StyleArg,

    /// Load the module logger from a TOML or JSON file instead
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Normal,
    Compact,
}

impl From<StyleArg> for StyleKind {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Normal => StyleKind::Normal,
            StyleArg::Compact => StyleKind::Compact,
        }
    }
}

impl Cli {
    /// Run the CLI application
    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        cli.execute()
    }

    fn verbose(&self) -> bool {
        !self.quiet
    }

    /// Run the self-test against the process-wide loggers
    fn execute(&self) -> Result<()> {
        output::print_info("Testing logger functionality...");

        output::print_step(1, "Testing module-specific logger");
        let module = self.module_logger()?;
        for level in Level::ALL {
            module.log(level, format!("This is a {} message", level.as_str().to_lowercase()));
        }

        output::print_step(2, "Testing central logger");
        let central = get_central_logger(self.verbose(), !self.no_central_file)?;
        central.debug("Central logger debug message");
        central.info("Central logger info message");

        output::print_step(3, "Testing convenience functions");
        log_debug("No-brainer debug message")?;
        log_info("No-brainer info message")?;
        log_warning("No-brainer warning message")?;
        log_error("No-brainer error message")?;
        log_critical("No-brainer critical message")?;

        central.flush();
        println!();
        output::print_success_msg("All tests completed!");
        Ok(())
    }

    /// Module logger from the config file, or from the flags via `get_logger`
    fn module_logger(&self) -> Result<Logger> {
        if let Some(path) = &self.config {
            let config = self.file_config(path)?;
            let facade = NamedLogger::new(config)?;
            output::print_log_file(facade.log_file_path(), facade.log_to_file());
            return Ok(facade.get_logger(None));
        }

        let logger = get_logger(Some(&self.module), self.verbose(), self.module_file)?;
        if self.style == StyleArg::Compact {
            apply_style(&logger, StyleKind::from(self.style).build());
        }
        Ok(logger)
    }

    fn file_config(&self, path: &Path) -> Result<LoggerConfig> {
        LoggerConfig::from_file(path)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                LoggerError::InvalidConfig(format!(
                    "No logger configuration found in {}",
                    path.display()
                ))
            })
    }
}
