use thiserror::Error;

/// Main error type for centralog
#[derive(Debug, Error)]
pub enum LoggerError {
    // Configuration errors
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration file: {0}")]
    InvalidConfig(String),

    #[error("Missing required configuration field: {0}")]
    MissingConfigField(String),

    #[error("Configuration validation failed: {0}")]
    ConfigValidationError(String),

    // Log-related errors
    #[error("Log error: {0}")]
    LogError(String),

    #[error("Failed to open log file: {0}")]
    LogFileError(String),

    // IO errors (automatically converted from std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Whether this error came from the file system rather than from configuration
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            LoggerError::LogError(_) | LoggerError::LogFileError(_) | LoggerError::Io(_)
        )
    }
}

/// Result type alias for centralog operations
pub type Result<T> = std::result::Result<T, LoggerError>;
