use super::{Level, Record};
use colored::{Color, Colorize};
use std::io::IsTerminal;

/// Date format shared by the normal and detailed styles
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A style turns a record into a single output line (without trailing newline)
pub trait Style: Send + Sync {
    fn format(&self, record: &Record) -> String;
}

/// `timestamp - name - LEVEL - message`, the console default
#[derive(Debug, Clone)]
pub struct NormalStyle {
    date_format: String,
}

impl NormalStyle {
    pub fn new() -> Self {
        Self::with_date_format(DEFAULT_DATE_FORMAT)
    }

    pub fn with_date_format(date_format: &str) -> Self {
        Self {
            date_format: date_format.to_string(),
        }
    }
}

impl Default for NormalStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for NormalStyle {
    fn format(&self, record: &Record) -> String {
        format!(
            "{} - {} - {} - {}",
            record.timestamp.format(&self.date_format),
            record.logger,
            record.level,
            record.message
        )
    }
}

/// `timestamp - name - LEVEL - file:line - function - message`, used for log files
#[derive(Debug, Clone, Default)]
pub struct DetailedStyle;

impl Style for DetailedStyle {
    fn format(&self, record: &Record) -> String {
        format!(
            "{} - {} - {} - {}:{} - {} - {}",
            record.timestamp.format(DEFAULT_DATE_FORMAT),
            record.logger,
            record.level,
            record.file_name(),
            record.line,
            record.function(),
            record.message
        )
    }
}

/// Compact console style: `HH:MM:SS L Name: message`
///
/// `L` is the one-letter level and `Name` the last segment of the logger
/// name, shortened around an ellipsis when it exceeds `name_width`.
#[derive(Debug, Clone)]
pub struct CompactStyle {
    time_format: String,
    use_color: bool,
    name_width: usize,
}

impl CompactStyle {
    const MIN_NAME_WIDTH: usize = 6;
    const DEFAULT_NAME_WIDTH: usize = 18;

    /// Colors default to on unless `LOGGER_COLOR` is set to `0` or `false`
    pub fn new() -> Self {
        let use_color = !matches!(
            std::env::var("LOGGER_COLOR").as_deref(),
            Ok("0") | Ok("false") | Ok("False")
        );
        Self {
            time_format: "%H:%M:%S".to_string(),
            use_color,
            name_width: Self::DEFAULT_NAME_WIDTH,
        }
    }

    pub fn time_format(mut self, time_format: &str) -> Self {
        self.time_format = time_format.to_string();
        self
    }

    pub fn use_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn name_width(mut self, name_width: usize) -> Self {
        self.name_width = name_width.max(Self::MIN_NAME_WIDTH);
        self
    }

    fn shorten_name<'a>(&self, name: &'a str) -> std::borrow::Cow<'a, str> {
        let base = name.rsplit('.').next().unwrap_or(name);
        let len = base.chars().count();
        if len <= self.name_width {
            return base.into();
        }
        let keep = self.name_width - 1;
        let left = keep / 2;
        let right = keep - left;
        let head: String = base.chars().take(left).collect();
        let tail: String = base.chars().skip(len - right).collect();
        format!("{}…{}", head, tail).into()
    }

    fn color_for(level: Level) -> Color {
        match level {
            Level::Debug => Color::BrightBlack,
            Level::Info => Color::White,
            Level::Warning => Color::Yellow,
            Level::Error => Color::Red,
            Level::Critical => Color::Magenta,
        }
    }
}

impl Default for CompactStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for CompactStyle {
    fn format(&self, record: &Record) -> String {
        let time = record.timestamp.format(&self.time_format);
        let level_char = record.level.as_char().to_string();
        let name = self.shorten_name(&record.logger);

        if self.use_color && std::io::stdout().is_terminal() {
            let color = Self::color_for(record.level);
            format!(
                "{} {} {}: {}",
                time,
                level_char.color(color),
                name.color(color),
                record.message
            )
        } else {
            format!("{} {} {}: {}", time, level_char, name, record.message)
        }
    }
}
