use centralog::config::date_stamp;
use centralog::logs::{ConsoleTarget, SharedBuffer};
use centralog::{Level, LoggerConfig, LoggingContext, NamedLogger};
use tempfile::TempDir;

fn context() -> (LoggingContext, SharedBuffer, TempDir) {
    let buffer = SharedBuffer::new();
    let temp_dir = TempDir::new().unwrap();
    let ctx = LoggingContext::new()
        .with_log_dir(temp_dir.path().join("logs"))
        .with_console(ConsoleTarget::Buffer(buffer.clone()));
    (ctx, buffer, temp_dir)
}

#[test]
fn test_module_logger_end_to_end() {
    let (ctx, buffer, _temp_dir) = context();

    let logger = NamedLogger::with_context(&ctx, LoggerConfig::new("TestModule").with_verbose(true))
        .unwrap();
    logger.debug("x");
    logger.info("y");
    logger.warning("z");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 3);
    for (line, (level, message)) in lines
        .iter()
        .zip([("DEBUG", "x"), ("INFO", "y"), ("WARNING", "z")])
    {
        assert!(line.contains("TestModule"));
        assert!(line.contains(level));
        assert!(line.ends_with(message));
    }

    // logToFile defaults to false
    assert!(!ctx.log_dir().exists());
}

#[test]
fn test_n_constructions_emit_once_per_call() {
    let (ctx, buffer, _temp_dir) = context();

    for _ in 0..5 {
        NamedLogger::with_context(&ctx, LoggerConfig::new("Repeat").with_log_to_file(true))
            .unwrap();
    }

    let logger = ctx.logger("Repeat");
    logger.info("first");
    logger.error("second");

    assert_eq!(buffer.lines().len(), 2);
    let path = ctx.log_dir().join(format!("Repeat_{}.log", date_stamp()));
    let content = std::fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(" - Repeat - INFO - named_logger_integration_test.rs:"));
    assert!(lines[1].contains(" - Repeat - ERROR - "));
    assert!(lines[1].ends_with(" - second"));
}

#[test]
fn test_unknown_level_behaves_like_info() {
    let (ctx, buffer, _temp_dir) = context();

    let unknown = ctx
        .named_logger(LoggerConfig::new("Unknown").with_level("LOUDEST"))
        .unwrap();
    let info = ctx
        .named_logger(LoggerConfig::new("Info").with_level("INFO"))
        .unwrap();
    assert_eq!(unknown.level(), info.level());

    unknown.debug("no");
    unknown.info("yes");
    assert_eq!(buffer.lines().len(), 1);
}

#[test]
fn test_explicit_file_path() {
    let (ctx, _buffer, temp_dir) = context();
    let path = temp_dir.path().join("custom").join("audit.log");

    let logger = ctx
        .named_logger(
            LoggerConfig::new("Audit")
                .with_log_to_file(true)
                .with_log_file_path(&path),
        )
        .unwrap();
    logger.critical("recorded");

    assert_eq!(logger.log_file_path(), path.as_path());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains(" - Audit - CRITICAL - "));
    // The default directory is not touched
    assert!(!ctx.log_dir().exists());
}

#[test]
fn test_child_logger_writes_through_parent_file() {
    let (ctx, buffer, _temp_dir) = context();
    let parent = ctx
        .named_logger(LoggerConfig::new("Svc").with_log_to_file(true))
        .unwrap();

    let child = parent.get_logger(Some("cache"));
    child.warning("miss");
    child.debug("filtered by parent level");

    assert_eq!(buffer.lines().len(), 1);
    let content = std::fs::read_to_string(parent.log_file_path()).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains(" - Svc.cache - WARNING - "));
}

#[test]
fn test_set_level_suppresses_lower() {
    let (ctx, buffer, _temp_dir) = context();
    let mut logger = ctx.named_logger(LoggerConfig::new("Tune")).unwrap();

    logger.set_level("error");
    logger.warning("dropped");
    logger.error("kept");
    assert_eq!(logger.level(), Level::Error);
    assert_eq!(buffer.lines().len(), 1);

    logger.set_level("debug");
    logger.debug("kept too");
    assert_eq!(buffer.lines().len(), 2);
}
