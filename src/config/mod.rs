use crate::error::{LoggerError, Result};
use crate::logs::{CompactStyle, Level, NormalStyle, Style};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name used when a logger is created without one
pub const DEFAULT_LOGGER_NAME: &str = "Logger";

/// Directory log files go to unless a path is given
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Console formatting selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    #[default]
    Normal,
    Compact,
}

impl StyleKind {
    pub fn build(&self) -> Arc<dyn Style> {
        match self {
            StyleKind::Normal => Arc::new(NormalStyle::new()),
            StyleKind::Compact => Arc::new(CompactStyle::new()),
        }
    }
}

/// Configuration of one named logger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Logger name, also the backend lookup key and default file name prefix
    #[serde(default = "default_name")]
    pub name: String,

    /// Minimum level; unknown names fall back to INFO
    #[serde(default = "default_level")]
    pub level: String,

    /// Force DEBUG regardless of `level`
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub log_to_file: bool,

    /// Explicit log file path (defaults to `{log_dir}/{name}_{YYYYMMDD}.log`)
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    #[serde(default)]
    pub console_style: StyleKind,
}

// Default value functions for serde
fn default_name() -> String {
    DEFAULT_LOGGER_NAME.to_string()
}

fn default_level() -> String {
    "INFO".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            level: default_level(),
            verbose: false,
            log_to_file: false,
            log_file_path: None,
            console_style: StyleKind::default(),
        }
    }
}

/// Today's date as used in log file names
pub fn date_stamp() -> String {
    Local::now().format("%Y%m%d").to_string()
}

impl LoggerConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_log_to_file(mut self, log_to_file: bool) -> Self {
        self.log_to_file = log_to_file;
        self
    }

    pub fn with_log_file_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.log_file_path = Some(path.into());
        self
    }

    pub fn with_console_style(mut self, style: StyleKind) -> Self {
        self.console_style = style;
        self
    }

    /// DEBUG when verbose, otherwise the configured level
    pub fn effective_level(&self) -> Level {
        if self.verbose {
            Level::Debug
        } else {
            Level::parse_or_default(&self.level)
        }
    }

    /// Explicit path, or `{log_dir}/{name}_{YYYYMMDD}.log`
    pub fn resolved_file_path(&self, log_dir: &Path) -> PathBuf {
        match &self.log_file_path {
            Some(path) => path.clone(),
            None => log_dir.join(format!("{}_{}.log", self.name, date_stamp())),
        }
    }

    /// Load logger configurations from a file (supports TOML and JSON)
    pub fn from_file(path: &Path) -> Result<Vec<LoggerConfig>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| LoggerError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let configs = match extension {
            "toml" => Self::parse_toml(&contents)?,
            "json" => Self::parse_json(&contents)?,
            _ => {
                return Err(LoggerError::InvalidConfig(format!(
                    "Unsupported file format: {}. Use .toml or .json",
                    extension
                )))
            }
        };

        let configs: Vec<LoggerConfig> = configs
            .into_iter()
            .map(|mut config| {
                config.expand_env_vars();
                config
            })
            .collect();

        for config in &configs {
            config.validate()?;
        }

        Ok(configs)
    }

    /// Parse TOML: either a single top-level logger or `[[loggers]]` tables
    fn parse_toml(contents: &str) -> Result<Vec<LoggerConfig>> {
        #[derive(Deserialize)]
        struct ConfigFile {
            #[serde(default)]
            loggers: Vec<LoggerConfig>,
        }

        let value: toml::Table = toml::from_str(contents)
            .map_err(|e| LoggerError::InvalidConfig(format!("Failed to parse TOML: {}", e)))?;

        if value.contains_key("loggers") {
            let config_file: ConfigFile = toml::from_str(contents)
                .map_err(|e| LoggerError::InvalidConfig(format!("Failed to parse TOML: {}", e)))?;
            if config_file.loggers.is_empty() {
                return Err(LoggerError::InvalidConfig(
                    "No logger configuration found in file".to_string(),
                ));
            }
            Ok(config_file.loggers)
        } else if value.contains_key("name") {
            let single: LoggerConfig = toml::from_str(contents)
                .map_err(|e| LoggerError::InvalidConfig(format!("Failed to parse TOML: {}", e)))?;
            Ok(vec![single])
        } else {
            Err(LoggerError::InvalidConfig(
                "No logger configuration found in file".to_string(),
            ))
        }
    }

    /// Parse JSON: either a single logger object or `{"loggers": [...]}`
    fn parse_json(contents: &str) -> Result<Vec<LoggerConfig>> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ConfigFile {
            Multiple { loggers: Vec<LoggerConfig> },
            Single(LoggerConfig),
        }

        let config_file: ConfigFile = serde_json::from_str(contents)
            .map_err(|e| LoggerError::InvalidConfig(format!("Failed to parse JSON: {}", e)))?;

        match config_file {
            ConfigFile::Single(config) => Ok(vec![config]),
            ConfigFile::Multiple { loggers } => {
                if loggers.is_empty() {
                    Err(LoggerError::InvalidConfig(
                        "No logger configuration found in file".to_string(),
                    ))
                } else {
                    Ok(loggers)
                }
            }
        }
    }

    /// Validate the configuration
    ///
    /// Level names are not checked here: unknown levels are allowed and
    /// resolve to INFO.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LoggerError::MissingConfigField("name".to_string()));
        }

        if self.name.starts_with('.') || self.name.ends_with('.') {
            return Err(LoggerError::ConfigValidationError(format!(
                "Logger name cannot start or end with '.': {}",
                self.name
            )));
        }

        if let Some(ref path) = self.log_file_path {
            if path.as_os_str().is_empty() {
                return Err(LoggerError::ConfigValidationError(
                    "log_file_path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Expand `$VAR` and `${VAR}` in the log file path
    fn expand_env_vars(&mut self) {
        if let Some(ref path) = self.log_file_path {
            let expanded =
                expand_env_in_string(&path.to_string_lossy(), |name| std::env::var(name).ok());
            self.log_file_path = Some(PathBuf::from(expanded));
        }
    }
}

/// Replace `$NAME` and `${NAME}` tokens left to right using `lookup`
///
/// `$NAME` takes the longest run of ASCII alphanumerics and `_`. Tokens
/// whose variable is unknown are kept as written.
fn expand_env_in_string<F>(s: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find('$') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, remainder) = match after.strip_prefix('{') {
            Some(braced) => match braced.find('}') {
                Some(end) => (&braced[..end], &braced[end + 1..]),
                None => ("", after),
            },
            None => {
                let len = after
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or(after.len());
                (&after[..len], &after[len..])
            }
        };

        match Some(name).filter(|n| !n.is_empty()).and_then(&lookup) {
            Some(value) => {
                result.push_str(&value);
                rest = remainder;
            }
            None => {
                result.push('$');
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}
