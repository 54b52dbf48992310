//! Where rendered lines go. The terminal is the normal sink; [`MemoryOutput`]
//! captures lines for tests and for programs that post-process their own log.

mod memory;
mod terminal;

pub use memory::MemoryOutput;
pub use terminal::TerminalOutput;

use crate::level::Level;

/// The two standard streams a line can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Only `Info` shares stdout with the program's regular output; everything
    /// else is diagnostic and goes to stderr.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Info => Self::Stdout,
            _ => Self::Stderr,
        }
    }
}

/// `Send + Sync` so a `Logger` can be shared across threads behind an `Arc`.
pub trait Output: Send + Sync {
    /// Writes one line; the sink appends the newline.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn write(&self, stream: Stream, line: &str) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> Result<(), crate::Error>;
}
