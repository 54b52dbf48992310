//! Severity levels that gate which messages are emitted and where they go.

use crate::fmt::{Color, Painter, Style};
use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a call's level against its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Chatty tracing, normally only on inside test runs.
    Verbose = 0,
    /// Diagnostics for whoever is working on the tool.
    Debug = 1,
    /// Regular output meant for the user. The only level written to stdout.
    #[default]
    Info = 2,
    /// Something looks off but the program carries on.
    Warn = 3,
    /// The current operation failed.
    Error = 4,
    /// Broken invariant. `Logger::bug` exits the process after logging it.
    Bug = 5,
}

impl Level {
    /// Keyword accepted by `FromStr`, config files and the CLI.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Bug => "bug",
        }
    }

    /// Short display name, at most four characters so tags line up.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Verbose => "Verb",
            Self::Debug => "Debu",
            Self::Info => "Info",
            Self::Warn => "Warn",
            Self::Error => "Erro",
            Self::Bug => "Bug",
        }
    }

    /// Colour used for the level name.
    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            Self::Verbose => Style::new().fg(Color::LightRed),
            Self::Debug => Style::new().fg(Color::Cyan),
            Self::Info => Style::new().fg(Color::LightBlue),
            Self::Warn => Style::new().fg(Color::Yellow),
            Self::Error => Style::new().fg(Color::Red),
            Self::Bug => Style::new().fg(Color::Red).blink(),
        }
    }

    /// Display name wrapped in the level colour.
    #[must_use]
    pub fn styled_tag(self, painter: &Painter) -> String {
        painter.paint(self.name(), self.style())
    }

    /// Used by help output, the CLI and tests.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Verbose,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Bug,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Level {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|level| level.keyword() == s)
            .ok_or_else(|| crate::Error::InvalidLevel(s.to_string()))
    }
}
