//! Decides whether the process is writing somewhere that understands ANSI
//! escapes. Detection runs once; the answer is cached for the process.

use serde::Deserialize;
use std::io::{self, IsTerminal};
use std::str::FromStr;
use std::sync::OnceLock;

static CURRENT: OnceLock<OutputTarget> = OnceLock::new();

/// What kind of sink stdout is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Pipe, file, dumb terminal, or colour explicitly disabled.
    Unknown,
    /// An interactive terminal.
    Console,
    /// Colour forced on through `CLICOLOR_FORCE`, whatever the sink.
    ColorHost,
}

impl OutputTarget {
    /// Cached result of [`OutputTarget::detect`].
    pub fn current() -> Self {
        *CURRENT.get_or_init(Self::detect)
    }

    /// Reads the real environment and checks whether stdout is a tty.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), io::stdout().is_terminal())
    }

    /// `NO_COLOR` wins, then `CLICOLOR_FORCE`, then `TERM` plus the tty check.
    pub fn from_env(var: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        if var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return Self::Unknown;
        }

        if var("CLICOLOR_FORCE").is_some_and(|v| !v.is_empty() && v != "0") {
            return Self::ColorHost;
        }

        match var("TERM") {
            Some(term) if !term.eq_ignore_ascii_case("dumb") && is_tty => Self::Console,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn supports_color(self) -> bool {
        matches!(self, Self::Console | Self::ColorHost)
    }
}

/// User override for colour detection, read from config and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether colour ends up on under this mode.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => OutputTarget::current().supports_color(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(crate::Error::InvalidColorMode(s.to_string())),
        }
    }
}
