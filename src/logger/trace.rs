//! Best-effort call-stack capture for `Logger::error`.
//!
//! Frames come from parsing the text form of `std::backtrace::Backtrace`.
//! Anything that does not parse is skipped; capture never fails.

use regex::Regex;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::sync::LazyLock;

/// Frames shown under an error line unless configured otherwise.
pub const DEFAULT_FRAMES: usize = 3;

static FRAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+:\s+(\S.*)$").expect("Invalid frame regex"));

static LOCATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+at\s+(\S.*)$").expect("Invalid location regex"));

/// Symbol prefixes belonging to the capture machinery or to this crate.
const SKIPPED: &[&str] = &[
    "std::backtrace",
    "std::backtrace_rs",
    "backtrace::",
    "taglog::",
    "<taglog::",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub symbol: String,
    pub location: Option<String>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} ({location})", self.symbol),
            None => f.write_str(&self.symbol),
        }
    }
}

impl Frame {
    fn is_internal(&self) -> bool {
        SKIPPED.iter().any(|prefix| self.symbol.starts_with(prefix))
    }
}

/// Up to `limit` caller frames, innermost first. Empty when `limit` is 0 or
/// the platform gives no usable backtrace.
#[must_use]
pub fn capture(limit: usize) -> Vec<Frame> {
    if limit == 0 {
        return Vec::new();
    }

    let backtrace = Backtrace::force_capture();
    if backtrace.status() != BacktraceStatus::Captured {
        return Vec::new();
    }

    parse(&backtrace.to_string())
        .into_iter()
        .filter(|frame| !frame.is_internal())
        .take(limit)
        .collect()
}

/// Parses the `Display` output of a backtrace into frames.
#[must_use]
pub fn parse(text: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();

    for line in text.lines() {
        if let Some(caps) = FRAME_REGEX.captures(line) {
            frames.push(Frame {
                symbol: caps[1].trim().to_string(),
                location: None,
            });
        } else if let Some(caps) = LOCATION_REGEX.captures(line)
            && let Some(frame) = frames.last_mut()
            && frame.location.is_none()
        {
            frame.location = Some(caps[1].trim().to_string());
        }
    }

    frames
}
