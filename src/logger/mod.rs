//! The logging facade.
//!
//! A `Logger` is an immutable bundle of settings (threshold, tags, depth,
//! timestamp flag) plus shared handles to the painter and the output sink.
//! Specialising it (`tagged`, `indent`, or the value a severity call returns)
//! always produces a new, independent `Logger`.

mod builder;
mod from_config;
pub mod resolve;
pub mod trace;

pub use builder::LoggerBuilder;
pub use resolve::{Resolution, Signals, Source};

use crate::fmt::{Icon, Painter};
use crate::level::Level;
use crate::line::Line;
use crate::list::{List, ListBuffer, Value};
use crate::message::Printable;
use crate::output::{Output, Stream};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    threshold: Level,
    tags: Vec<String>,
    depth: usize,
    time: bool,
    gate: Option<Level>,
    trace_frames: usize,
    painter: Arc<Painter>,
    output: Arc<dyn Output>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("tags", &self.tags)
            .field("depth", &self.depth)
            .field("time", &self.time)
            .field("gate", &self.gate)
            .field("trace_frames", &self.trace_frames)
            .field("colors", &self.painter.enabled())
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Terminal logger whose threshold comes from the process environment and argv.
    #[must_use]
    pub fn from_env() -> Self {
        LoggerBuilder::new().build()
    }

    /// Terminal logger with a fixed threshold.
    #[must_use]
    pub fn with_level(level: Level) -> Self {
        LoggerBuilder::new().level(level).build()
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.threshold
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub const fn time(&self) -> bool {
        self.time
    }

    /// Level of the call that produced this logger, if any.
    #[must_use]
    pub const fn gate(&self) -> Option<Level> {
        self.gate
    }

    #[must_use]
    pub fn painter(&self) -> &Painter {
        &self.painter
    }

    /// True when the threshold is `Debug` or more verbose.
    #[must_use]
    pub fn in_debug_mode(&self) -> bool {
        self.threshold <= Level::Debug
    }

    /// Copy with `tag` appended to the tag stack.
    #[must_use]
    pub fn tagged(&self, tag: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.tags.push(tag.into());
        child
    }

    /// Copy nested one level deeper.
    #[must_use]
    pub fn indent(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self.clone()
        }
    }

    /// Appends to this logger's own tag stack. Existing copies are unaffected.
    pub fn push_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Whether a call at `level` would be written.
    ///
    /// A logger returned by a severity call also stays silent when that call
    /// itself was below the threshold, so nested rows never show up under a
    /// hidden parent.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.threshold && self.gate.is_none_or(|gate| gate >= self.threshold)
    }

    /// Starts a call at `level` with per-call options (tags, icon, blink).
    pub const fn at(&self, level: Level) -> Entry<'_> {
        Entry {
            logger: self,
            level,
            tags: Vec::new(),
            tag: None,
            icon: None,
            blink: false,
        }
    }

    pub fn verbose(&self, msg: impl Printable) -> Self {
        self.at(Level::Verbose).log(msg)
    }

    pub fn debug(&self, msg: impl Printable) -> Self {
        self.at(Level::Debug).log(msg)
    }

    pub fn info(&self, msg: impl Printable) -> Self {
        self.at(Level::Info).log(msg)
    }

    pub fn warn(&self, msg: impl Printable) -> Self {
        self.at(Level::Warn).log(msg)
    }

    /// Also prints the first few caller frames underneath.
    pub fn error(&self, msg: impl Printable) -> Self {
        self.at(Level::Error).log(msg)
    }

    /// Warning tagged `TODO`.
    pub fn todo(&self, msg: impl Printable) -> Self {
        self.at(Level::Warn).tag("TODO").log(msg)
    }

    /// Warning with blinking decoration.
    pub fn blink(&self, msg: impl Printable) -> Self {
        self.at(Level::Warn).blink().log(msg)
    }

    /// Logs a warning and exits with status 0.
    pub fn abort(&self, msg: impl Printable) -> ! {
        self.warn(msg).exit(0)
    }

    /// Logs at `Bug` and exits with status 1.
    pub fn bug(&self, msg: impl Printable) -> ! {
        self.at(Level::Bug).log(msg).exit(1)
    }

    /// Flushes the sink and ends the process with `code`.
    pub fn exit(&self, code: i32) -> ! {
        self.flush();
        std::process::exit(code)
    }

    /// Empty line on stdout, under the same gate as `info`.
    pub fn ln(&self) {
        if self.is_enabled(Level::Info) {
            self.write(Stream::Stdout, "");
        }
    }

    /// Single `key: value` row one level below this logger.
    pub fn kv(&self, key: impl Into<String>, value: impl Into<Value>) -> &Self {
        let mut buffer = ListBuffer::new();
        buffer.kv(key, value);
        self.flush_list(&mut buffer);
        self
    }

    /// Aligned key/value block under the current line, written when the
    /// returned guard is dropped.
    pub fn list(&self) -> List {
        List::new(self.clone())
    }

    /// Flushes the output sink. Write errors are ignored, like every other write.
    pub fn flush(&self) {
        let _ = self.output.flush();
    }

    pub(crate) fn flush_list(&self, buffer: &mut ListBuffer) {
        let level = self.row_level();
        if !self.is_enabled(level) {
            buffer.clear();
            return;
        }
        let depth = self.depth + 1;
        buffer.flush(&self.painter, |row| self.write_row(level, depth, &row));
    }

    /// Rows follow the call that opened them; a root logger treats them as info.
    fn row_level(&self) -> Level {
        self.gate.unwrap_or(Level::Info)
    }

    fn emit(&self, entry: Entry<'_>, body: String) {
        let level = entry.level;
        if !self.is_enabled(level) {
            return;
        }

        let line = Line::new(level, body)
            .tags(self.tags.iter().cloned())
            .tags(entry.tags)
            .tag(entry.tag)
            .icon(entry.icon)
            .depth(self.depth)
            .time(self.time)
            .blink(entry.blink)
            .threshold(self.threshold);
        self.write(Stream::for_level(level), &line.render(&self.painter));

        if level == Level::Error {
            for frame in trace::capture(self.trace_frames) {
                let row = self.painter.dim(&frame.to_string());
                self.write_row(level, self.depth + 1, &row);
            }
        }
    }

    fn write_row(&self, level: Level, depth: usize, body: &str) {
        let line = Line::continuation(level, body).depth(depth);
        self.write(Stream::for_level(level), &line.render(&self.painter));
    }

    fn write(&self, stream: Stream, text: &str) {
        let _ = self.output.write(stream, text);
    }

    /// Child handed back from a call at `level`; its gate is the lowest level
    /// along the chain of calls that produced it.
    fn spawned(&self, level: Level) -> Self {
        Self {
            gate: Some(self.gate.map_or(level, |gate| gate.min(level))),
            ..self.clone()
        }
    }
}

/// One log call being assembled. Finish it with [`Entry::log`].
///
/// ```
/// use taglog::{Icon, Level, Logger, MemoryOutput};
///
/// let out = MemoryOutput::new();
/// let log = Logger::builder().level(Level::Debug).output(out.clone()).colors(false).build();
///
/// log.at(Level::Info).icon(Icon::DONE).tag("build").log("compiled");
/// assert_eq!(out.stdout(), vec!["✔ build › compiled".to_string()]);
/// ```
#[must_use = "nothing is logged until `log` is called"]
pub struct Entry<'a> {
    logger: &'a Logger,
    level: Level,
    tags: Vec<String>,
    tag: Option<String>,
    icon: Option<Icon>,
    blink: bool,
}

impl Entry<'_> {
    /// Explicit single tag, rendered after all other tags.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Extra tags for this call only, after the logger's own stack.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Replaces the status bullet with `icon`.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub const fn blink(mut self) -> Self {
        self.blink = true;
        self
    }

    /// Gates, renders and writes the line. Returns a logger for nested rows
    /// that stays silent whenever this line was.
    pub fn log(self, msg: impl Printable) -> Logger {
        let logger = self.logger;
        let level = self.level;
        if logger.is_enabled(level) {
            logger.emit(self, msg.printable());
        }
        logger.spawned(level)
    }
}
