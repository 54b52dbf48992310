//! Unified error type for all taglog operations.
//!
//! Logging calls themselves never fail; errors only surface from parsing
//! (levels, styles, icons) and from loading configuration.

use std::path::PathBuf;

/// Error type for taglog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Cyclic `source = "..."` include in config files.
    CyclicInclude(PathBuf),
    /// Level keyword not in `verbose|debug|info|warn|error|bug`.
    InvalidLevel(String),
    /// Style spec contained an unknown word or malformed colour.
    InvalidStyle(String),
    /// Colour mode other than `auto`, `always` or `never`.
    InvalidColorMode(String),
    /// Icon name not known to the built-in set.
    UnknownIcon(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::InvalidLevel(level) => write!(f, "Invalid level: '{level}'"),
            Self::InvalidStyle(style) => write!(f, "invalid style: '{style}'"),
            Self::InvalidColorMode(mode) => {
                write!(f, "invalid color mode: '{mode}' (expected auto, always or never)")
            }
            Self::UnknownIcon(name) => write!(f, "unknown icon: '{name}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
