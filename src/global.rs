//! Process-wide default logger for top-level entry points.
//!
//! Uses `OnceLock` so the logger is initialized exactly once: either
//! explicitly through [`init`], or lazily from the environment on first use.
//! There is no teardown. Library code should prefer taking a `Logger` value.

use crate::level::Level;
use crate::logger::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Installs `logger` as the global one. Returns `false` (and drops `logger`)
/// when a global logger already exists.
pub fn init(logger: Logger) -> bool {
    let mut installed = false;
    GLOBAL.get_or_init(|| {
        installed = true;
        logger
    });
    installed
}

/// The global logger, built with [`Logger::from_env`] if nobody called [`init`].
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::from_env)
}

/// The global logger only if it already exists. Never initializes it.
pub fn try_logger() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Copy of the global logger with `tag` appended.
pub fn tagged(tag: impl Into<String>) -> Logger {
    logger().tagged(tag)
}

/// Crate diagnostics. Calls before the global logger exists vanish silently,
/// so loading config never initializes it behind the caller's back.
fn diag(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = try_logger() {
        logger.tagged(scope).at(level).log(msg);
    }
}

pub(crate) fn debug(scope: &str, msg: &str) {
    diag(Level::Debug, scope, msg);
}

pub(crate) fn warn(scope: &str, msg: &str) {
    diag(Level::Warn, scope, msg);
}
