//! Configuration struct definitions.

use crate::fmt::ColorMode;
use crate::logger::trace;
use serde::Deserialize;

/// Settings every logger built from this config starts with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Threshold keyword. Absent means "resolve from environment and argv".
    pub level: Option<String>,
    /// Prefix status lines with a timestamp.
    pub time: bool,
    /// Initial tag stack.
    pub tags: Vec<String>,
}

/// Terminal rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// `auto`, `always` or `never`.
    pub colors: ColorMode,
    /// Caller frames printed under `error` lines.
    pub trace_frames: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            colors: ColorMode::Auto,
            trace_frames: trace::DEFAULT_FRAMES,
        }
    }
}

/// Per-app overrides. Every field is optional so partial overrides work.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub level: Option<String>,
    pub time: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub colors: Option<ColorMode>,
    pub trace_frames: Option<usize>,
}
