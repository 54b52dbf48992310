//! The process's real stdout and stderr.

use super::{Output, Stream};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write(&self, stream: Stream, line: &str) -> Result<(), crate::Error> {
        // One writeln on a locked handle keeps a line from tearing under threads
        match stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{line}")?,
            Stream::Stderr => writeln!(io::stderr().lock(), "{line}")?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
