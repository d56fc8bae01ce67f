// Logs module - Backend loggers, handlers and styles

mod level;
mod manager;
mod record;
mod style;
mod writer;

pub use level::Level;
pub use manager::{LogManager, Logger, DEFAULT_EFFECTIVE_LEVEL};
pub use record::Record;
pub use style::{CompactStyle, DetailedStyle, NormalStyle, Style, DEFAULT_DATE_FORMAT};
pub use writer::{ConsoleHandler, ConsoleTarget, FileHandler, Handler, HandlerKind, SharedBuffer};

use std::sync::{Arc, Mutex, MutexGuard};

/// Lock a mutex, recovering the data if another thread panicked while holding it
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Apply a style to every console handler of `logger`
///
/// A stdout console handler at the logger's effective level is attached
/// first when the logger has none.
pub fn apply_style(logger: &Logger, style: Arc<dyn Style>) {
    let mut consoles: Vec<Arc<dyn Handler>> = logger
        .handlers()
        .into_iter()
        .filter(|h| h.kind() == HandlerKind::Console)
        .collect();

    if consoles.is_empty() {
        let handler: Arc<dyn Handler> = Arc::new(ConsoleHandler::new(logger.effective_level()));
        logger.add_handler(Arc::clone(&handler));
        consoles.push(handler);
    }

    for handler in consoles {
        handler.set_style(Arc::clone(&style));
    }
}
