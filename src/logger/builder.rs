//! Stepwise construction of a [`Logger`]. Anything not set explicitly falls
//! back to the environment: the threshold through [`Signals`], colour through
//! [`OutputTarget`](crate::fmt::OutputTarget).

use super::resolve::{Resolution, Signals};
use super::{Logger, trace};
use crate::fmt::{ColorMode, Painter, Style};
use crate::level::Level;
use crate::output::{Output, TerminalOutput};
use std::sync::Arc;

pub struct LoggerBuilder {
    level: Option<Level>,
    signals: Option<Signals>,
    tags: Vec<String>,
    time: bool,
    colors: ColorMode,
    styles: Vec<(String, Style)>,
    trace_frames: usize,
    output: Option<Arc<dyn Output>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: None,
            signals: None,
            tags: Vec::new(),
            time: false,
            colors: ColorMode::Auto,
            styles: Vec::new(),
            trace_frames: trace::DEFAULT_FRAMES,
            output: None,
        }
    }

    /// Fixed threshold. Skips environment and argv resolution entirely.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Resolves the threshold from `signals` instead of the live process.
    #[must_use]
    pub fn signals(mut self, signals: Signals) -> Self {
        self.signals = Some(signals);
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
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

    /// Prefix status lines with `[HH:MM:SS]`.
    #[must_use]
    pub const fn time(mut self, enabled: bool) -> Self {
        self.time = enabled;
        self
    }

    /// Forces colour on or off, overriding detection.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = if enabled {
            ColorMode::Always
        } else {
            ColorMode::Never
        };
        self
    }

    #[must_use]
    pub const fn color_mode(mut self, mode: ColorMode) -> Self {
        self.colors = mode;
        self
    }

    /// Registers a named style usable as `<name>...</name>` in messages.
    #[must_use]
    pub fn style(mut self, name: impl Into<String>, style: Style) -> Self {
        self.styles.push((name.into(), style));
        self
    }

    /// How many caller frames `error` prints. 0 turns capture off.
    #[must_use]
    pub const fn trace_frames(mut self, frames: usize) -> Self {
        self.trace_frames = frames;
        self
    }

    /// Replaces the terminal with another sink.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output = Some(Arc::new(output));
        self
    }

    /// Threshold this builder would use, and why.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        match self.level {
            Some(level) => Resolution::explicit(level),
            None => self
                .signals
                .as_ref()
                .map_or_else(|| Signals::from_process().resolve(), Signals::resolve),
        }
    }

    /// When the threshold came from the environment, the new logger says so
    /// on its debug channel.
    #[must_use]
    pub fn build(self) -> Logger {
        let resolution = self.resolution();

        let mut painter = Painter::new(self.colors.enabled());
        for (name, style) in self.styles {
            painter.register(name, style);
        }

        let logger = Logger {
            threshold: resolution.level,
            tags: self.tags,
            depth: 0,
            time: self.time,
            gate: None,
            trace_frames: self.trace_frames,
            painter: Arc::new(painter),
            output: self
                .output
                .unwrap_or_else(|| Arc::new(TerminalOutput::new())),
        };

        if let Some(notice) = resolution.notice() {
            logger.tagged("taglog").debug(notice);
        }

        logger
    }
}
