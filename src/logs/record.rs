use super::Level;
use chrono::{DateTime, Local};
use std::panic::Location;
use std::path::Path;

/// A single log event as handed to handlers
#[derive(Debug, Clone)]
pub struct Record {
    pub timestamp: DateTime<Local>,
    /// Name of the logger the event originated from
    pub logger: String,
    pub level: Level,
    pub message: String,
    /// Source file of the call site
    pub file: &'static str,
    pub line: u32,
    /// Module path of the call site, filled in by the logging macros
    pub module_path: Option<&'static str>,
}

impl Record {
    pub fn new(
        logger: &str,
        level: Level,
        message: String,
        location: &'static Location<'static>,
        module_path: Option<&'static str>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            logger: logger.to_string(),
            level,
            message,
            file: location.file(),
            line: location.line(),
            module_path,
        }
    }

    /// Base name of the source file, e.g. `main.rs`
    pub fn file_name(&self) -> &str {
        Path::new(self.file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(self.file)
    }

    /// Function/module column of the detailed format
    pub fn function(&self) -> &str {
        self.module_path.unwrap_or("-")
    }
}
