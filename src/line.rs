//! Turns one gated-open log call into the exact text written to the terminal.
//!
//! Segments, left to right, joined by single spaces:
//!
//! ```text
//! <marker> [indent] [time] [tag › tag ›] <body>
//! ```
//!
//! Continuation rows (list rows, stack frames) keep only marker, indent and body,
//! and their body is never scanned for markup.

use crate::fmt::{Color, Icon, Painter, Style};
use crate::level::Level;
use chrono::{Local, NaiveTime};

/// Separator between tags, and the glyph that closes the tag trail.
pub const TAG_SEPARATOR: &str = "›";

/// Marker glyph for status rows when colour is available.
pub const BULLET: &str = "●";

/// Everything needed to render one line. Built per call and thrown away.
#[derive(Debug, Clone)]
pub struct Line {
    level: Level,
    body: String,
    tags: Vec<String>,
    icon: Option<Icon>,
    depth: usize,
    time: bool,
    blink: bool,
    status: bool,
    threshold: Level,
}

impl Line {
    /// Status row at `level`. The threshold defaults to `level` itself.
    pub fn new(level: Level, body: impl Into<String>) -> Self {
        Self {
            level,
            body: body.into(),
            tags: Vec::new(),
            icon: None,
            depth: 0,
            time: false,
            blink: false,
            status: true,
            threshold: level,
        }
    }

    /// Row without status marker, timestamp or tags.
    pub fn continuation(level: Level, body: impl Into<String>) -> Self {
        Self {
            status: false,
            ..Self::new(level, body)
        }
    }

    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Appends one explicit tag after the others.
    #[must_use]
    pub fn tag(mut self, tag: Option<String>) -> Self {
        if let Some(tag) = tag {
            self.tags.push(tag);
        }
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Option<Icon>) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub const fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub const fn time(mut self, time: bool) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub const fn blink(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }

    /// Threshold of the emitting logger; tags only show at `Debug` or below.
    #[must_use]
    pub const fn threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub const fn is_status(&self) -> bool {
        self.status
    }

    /// Renders with the current local time.
    #[must_use]
    pub fn render(&self, painter: &Painter) -> String {
        self.render_at(painter, Local::now().time())
    }

    /// Renders with a fixed clock so output is reproducible.
    #[must_use]
    pub fn render_at(&self, painter: &Painter, now: NaiveTime) -> String {
        let mut params = Vec::new();

        if let Some(icon) = &self.icon {
            params.push(icon.render(painter));
        } else if self.status {
            params.push(marker(self.level, painter));
        } else {
            params.push(" ".to_string());
        }

        if let Some(indent) = indentation(self.depth) {
            params.push(indent);
        }

        if !self.status {
            params.push(self.body.clone());
            return params.join(" ");
        }

        if self.time {
            let raw = now.format("%H:%M:%S");
            params.push(painter.dim(&format!("[{raw}]")));
        }

        if self.threshold <= Level::Debug && !self.tags.is_empty() {
            let sep = format!(" {TAG_SEPARATOR} ");
            params.push(painter.dim(&self.tags.join(&sep)));
            params.push(painter.dim(TAG_SEPARATOR));
        }

        if self.blink
            && let Some(last) = params.last_mut()
        {
            *last = painter.blink(last);
        }

        params.push(painter.markup(&self.body));

        params.join(" ")
    }
}

/// Coloured bullet per level, or a bracketed letter when colour is off.
#[must_use]
pub fn marker(level: Level, painter: &Painter) -> String {
    if !painter.enabled() {
        return plain_marker(level).to_string();
    }

    let color = match level {
        Level::Info => Color::LightBlue,
        Level::Warn => Color::Yellow,
        Level::Error | Level::Bug => Color::Red,
        Level::Debug => Color::LightMagenta,
        Level::Verbose => Color::LightCyan,
    };
    painter.paint(BULLET, Style::new().fg(color))
}

#[must_use]
pub const fn plain_marker(level: Level) -> &'static str {
    match level {
        Level::Info => "[I]",
        Level::Warn => "[W]",
        Level::Error => "[E]",
        Level::Bug => "[B]",
        Level::Debug => "[D]",
        Level::Verbose => "[V]",
    }
}

/// Leading whitespace for `depth`. Depth 0 adds no segment at all.
#[must_use]
pub fn indentation(depth: usize) -> Option<String> {
    match depth {
        0 => None,
        1 => Some(" ".to_string()),
        n => Some("  ".repeat(n)),
    }
}
