// Integration test for configuration file support

use centralog::logs::{ConsoleTarget, SharedBuffer};
use centralog::{Level, LoggerConfig, LoggerError, LoggingContext, StyleKind};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_toml_config_single_logger() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logger.toml");

    let toml_content = r#"
        name = "billing"
        level = "ERROR"
        verbose = false
        log_to_file = true
        log_file_path = "/var/log/billing.log"
    "#;

    fs::write(&config_path, toml_content).unwrap();

    let configs = LoggerConfig::from_file(&config_path).unwrap();
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].name, "billing");
    assert_eq!(configs[0].effective_level(), Level::Error);
    assert!(configs[0].log_to_file);
    assert_eq!(
        configs[0].log_file_path,
        Some(PathBuf::from("/var/log/billing.log"))
    );
    assert_eq!(configs[0].console_style, StyleKind::Normal);
}

#[test]
fn test_load_toml_config_multiple_loggers() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logger.toml");

    let toml_content = r#"
        [[loggers]]
        name = "api"
        verbose = true

        [[loggers]]
        name = "worker"
        level = "warning"
        console_style = "compact"
    "#;

    fs::write(&config_path, toml_content).unwrap();

    let configs = LoggerConfig::from_file(&config_path).unwrap();
    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].name, "api");
    assert_eq!(configs[0].effective_level(), Level::Debug);
    assert_eq!(configs[1].name, "worker");
    assert_eq!(configs[1].effective_level(), Level::Warning);
    assert_eq!(configs[1].console_style, StyleKind::Compact);
}

#[test]
fn test_load_json_config_multiple_loggers() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logger.json");

    let json_content = r#"
        {
            "loggers": [
                {"name": "api", "level": "debug"},
                {"name": "db"}
            ]
        }
    "#;

    fs::write(&config_path, json_content).unwrap();

    let configs = LoggerConfig::from_file(&config_path).unwrap();
    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].effective_level(), Level::Debug);
    assert_eq!(configs[1].level, "INFO");
}

#[test]
fn test_empty_logger_list_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logger.json");
    fs::write(&config_path, r#"{"loggers": []}"#).unwrap();

    assert!(matches!(
        LoggerConfig::from_file(&config_path),
        Err(LoggerError::InvalidConfig(_))
    ));
}

#[test]
fn test_invalid_name_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logger.toml");
    fs::write(&config_path, "name = \"\"\n").unwrap();

    assert!(matches!(
        LoggerConfig::from_file(&config_path),
        Err(LoggerError::MissingConfigField(_))
    ));
}

#[test]
fn test_malformed_toml_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logger.toml");
    fs::write(&config_path, "name = [unclosed").unwrap();

    assert!(matches!(
        LoggerConfig::from_file(&config_path),
        Err(LoggerError::InvalidConfig(_))
    ));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(
        LoggerConfig::from_file(&temp_dir.path().join("absent.toml")),
        Err(LoggerError::ConfigError(_))
    ));
}

#[test]
fn test_loaded_config_builds_logger() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("logger.toml");
    let log_path = temp_dir.path().join("out").join("svc.log");
    fs::write(
        &config_path,
        format!(
            "name = \"svc\"\nlevel = \"warning\"\nlog_to_file = true\nlog_file_path = {:?}\n",
            log_path.to_string_lossy()
        ),
    )
    .unwrap();

    let buffer = SharedBuffer::new();
    let ctx = LoggingContext::new().with_console(ConsoleTarget::Buffer(buffer.clone()));
    let config = LoggerConfig::from_file(&config_path).unwrap().remove(0);
    let logger = ctx.named_logger(config).unwrap();

    logger.info("dropped");
    logger.warning("kept");

    assert_eq!(buffer.lines().len(), 1);
    let content = fs::read_to_string(&log_path).unwrap();
    assert_eq!(content.lines().count(), 1);
}
