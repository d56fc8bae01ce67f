use super::level::AtomicLevel;
use super::style::{DetailedStyle, NormalStyle, Style};
use super::{lock, Level, Record};
use crate::error::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

/// What kind of sink a handler writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Console,
    File,
    Custom,
}

/// A sink receiving formatted log records
///
/// Handlers are shared between loggers through `Arc`, so all state is behind
/// interior mutability.
pub trait Handler: Send + Sync {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Custom
    }

    /// Minimum level this handler emits
    fn level(&self) -> Level;

    fn set_level(&self, level: Level);

    /// Replace the formatter; handlers without a style ignore this
    fn set_style(&self, _style: Arc<dyn Style>) {}

    /// Write a record unconditionally
    fn emit(&self, record: &Record) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// Write a record if it passes this handler's level
    fn handle(&self, record: &Record) -> Result<()> {
        if record.level >= self.level() {
            self.emit(record)
        } else {
            Ok(())
        }
    }
}

/// In-memory byte sink, usable as a console target to capture output
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock(&self.0)).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        lock(&self.0).clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        lock(&self.0).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Where console handlers write
#[derive(Debug, Clone, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Buffer(SharedBuffer),
}

impl ConsoleTarget {
    fn writer(&self) -> Box<dyn Write + Send> {
        match self {
            ConsoleTarget::Stdout => Box::new(std::io::stdout()),
            ConsoleTarget::Buffer(buffer) => Box::new(buffer.clone()),
        }
    }
}

/// Handler writing one line per record to the console
pub struct ConsoleHandler {
    level: AtomicLevel,
    style: RwLock<Arc<dyn Style>>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleHandler {
    /// Console handler on stdout using the normal style
    pub fn new(level: Level) -> Self {
        Self::with_target(&ConsoleTarget::Stdout, level)
    }

    pub fn with_target(target: &ConsoleTarget, level: Level) -> Self {
        Self {
            level: AtomicLevel::new(Some(level)),
            style: RwLock::new(Arc::new(NormalStyle::new())),
            out: Mutex::new(target.writer()),
        }
    }

    pub fn with_style(self, style: Arc<dyn Style>) -> Self {
        self.set_style(style);
        self
    }
}

impl Handler for ConsoleHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Console
    }

    fn level(&self) -> Level {
        self.level.get().unwrap_or_default()
    }

    fn set_level(&self, level: Level) {
        self.level.set(Some(level));
    }

    fn set_style(&self, style: Arc<dyn Style>) {
        *self.style.write().unwrap_or_else(|e| e.into_inner()) = style;
    }

    fn emit(&self, record: &Record) -> Result<()> {
        let line = self
            .style
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .format(record);

        let mut out = lock(&self.out);
        writeln!(out, "{}", line)
            .map_err(|e| LoggerError::LogError(format!("Failed to write to console: {}", e)))?;

        // Flush per line so console output interleaves correctly
        out.flush()
            .map_err(|e| LoggerError::LogError(format!("Failed to flush console: {}", e)))
    }

    fn flush(&self) -> Result<()> {
        lock(&self.out)
            .flush()
            .map_err(|e| LoggerError::LogError(format!("Failed to flush console: {}", e)))
    }
}

/// Handler appending one detailed line per record to a file
pub struct FileHandler {
    path: PathBuf,
    level: AtomicLevel,
    style: RwLock<Arc<dyn Style>>,
    file: Mutex<File>,
}

impl FileHandler {
    /// Open `path` for append, creating its parent directories first
    ///
    /// # Returns
    /// * `Ok(FileHandler)` - File is open and ready
    /// * `Err(LoggerError)` - Directory could not be created or file could not be opened
    pub fn new(path: &Path, level: Level) -> Result<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| {
                LoggerError::LogError(format!(
                    "Failed to create log directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::LogFileError(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            path: path.to_path_buf(),
            level: AtomicLevel::new(Some(level)),
            style: RwLock::new(Arc::new(DetailedStyle)),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Handler for FileHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::File
    }

    fn level(&self) -> Level {
        self.level.get().unwrap_or_default()
    }

    fn set_level(&self, level: Level) {
        self.level.set(Some(level));
    }

    fn set_style(&self, style: Arc<dyn Style>) {
        *self.style.write().unwrap_or_else(|e| e.into_inner()) = style;
    }

    fn emit(&self, record: &Record) -> Result<()> {
        let mut line = self
            .style
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .format(record);
        line.push('\n');

        let mut file = lock(&self.file);
        file.write_all(line.as_bytes())
            .map_err(|e| LoggerError::LogError(format!("Failed to write to log: {}", e)))?;
        file.flush()
            .map_err(|e| LoggerError::LogError(format!("Failed to flush log: {}", e)))
    }

    fn flush(&self) -> Result<()> {
        lock(&self.file)
            .flush()
            .map_err(|e| LoggerError::LogError(format!("Failed to flush log: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::Location;
    use tempfile::TempDir;

    fn record(level: Level, message: &str) -> Record {
        Record::new("Test", level, message.to_string(), Location::caller(), None)
    }

    #[test]
    fn test_console_handler_writes_line() {
        let buffer = SharedBuffer::new();
        let handler = ConsoleHandler::with_target(&ConsoleTarget::Buffer(buffer.clone()), Level::Info);

        handler.handle(&record(Level::Info, "hello")).unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" - Test - INFO - hello"));
    }

    #[test]
    fn test_handler_filters_by_level() {
        let buffer = SharedBuffer::new();
        let handler =
            ConsoleHandler::with_target(&ConsoleTarget::Buffer(buffer.clone()), Level::Warning);

        handler.handle(&record(Level::Info, "quiet")).unwrap();
        handler.handle(&record(Level::Error, "loud")).unwrap();
        assert_eq!(buffer.lines().len(), 1);

        handler.set_level(Level::Debug);
        handler.handle(&record(Level::Debug, "now visible")).unwrap();
        assert_eq!(buffer.lines().len(), 2);
    }

    #[test]
    fn test_file_handler_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("app.log");

        let handler = FileHandler::new(&path, Level::Debug).unwrap();
        assert_eq!(handler.path(), path.as_path());
        assert!(path.exists());

        handler.handle(&record(Level::Debug, "first")).unwrap();
        handler.handle(&record(Level::Error, "second")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" - Test - DEBUG - writer.rs:"));
        assert!(lines[1].ends_with(" - - - second"));
    }

    #[test]
    fn test_file_handler_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");

        FileHandler::new(&path, Level::Info)
            .unwrap()
            .handle(&record(Level::Info, "one"))
            .unwrap();
        FileHandler::new(&path, Level::Info)
            .unwrap()
            .handle(&record(Level::Info, "two"))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_file_handler_open_failure() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened for append
        let result = FileHandler::new(temp_dir.path(), Level::Info);
        assert!(matches!(result, Err(LoggerError::LogFileError(_))));
    }

    #[test]
    fn test_file_handler_directory_failure() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = FileHandler::new(&blocker.join("app.log"), Level::Info);
        assert!(matches!(result, Err(LoggerError::LogError(_))));
    }
}
