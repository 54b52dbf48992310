//! In-memory sink. Clones share the same buffer, so a test can hand one clone
//! to the logger and read lines back through another.

use super::{Output, Stream};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    lines: Arc<Mutex<Vec<(Stream, String)>>>,
}

impl MemoryOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured line with the stream it was routed to, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Lines written to one stream.
    #[must_use]
    pub fn stream(&self, stream: Stream) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line)
            .collect()
    }

    #[must_use]
    pub fn stdout(&self) -> Vec<String> {
        self.stream(Stream::Stdout)
    }

    #[must_use]
    pub fn stderr(&self) -> Vec<String> {
        self.stream(Stream::Stderr)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Output for MemoryOutput {
    fn write(&self, stream: Stream, line: &str) -> Result<(), crate::Error> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((stream, line.to_string()));
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
