//! Key/value rows logged under a parent line, with keys padded to a common width.

use crate::Logger;
use crate::fmt::{Color, Painter, Style};
use std::fmt;

/// Right-hand side of a list row. Booleans get their own rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Text(String),
}

impl Value {
    /// Any `Display` value.
    pub fn text(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    /// Any `Debug` value, for types without `Display`.
    pub fn debug(value: impl fmt::Debug) -> Self {
        Self::Text(format!("{value:?}"))
    }

    /// A sequence, rendered as `a, b, c`.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        Self::Text(
            items
                .into_iter()
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// `yes`/`no` for booleans (light green/light red, dimmed), the text otherwise.
    #[must_use]
    pub fn render(&self, painter: &Painter) -> String {
        match self {
            Self::Bool(true) => painter.paint("yes", Style::new().fg(Color::LightGreen).dim()),
            Self::Bool(false) => painter.paint("no", Style::new().fg(Color::LightRed).dim()),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

macro_rules! value_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

value_from_display!(
    char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// One buffered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub key: String,
    pub value: Value,
}

impl ListItem {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Key length in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.key.chars().count()
    }

    /// `key: value` with the key padded to `width`, without the outer dimming.
    #[must_use]
    pub fn formatted(&self, width: usize, painter: &Painter) -> String {
        format!("{:<width$}: {}", self.key, self.value.render(painter))
    }
}

/// Collects rows until flushed. Nothing is rendered while buffering.
#[derive(Debug, Clone, Default)]
pub struct ListBuffer {
    items: Vec<ListItem>,
}

impl ListBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn kv(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.items.push(ListItem::new(key, value));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Width every key is padded to: the longest key, in characters.
    #[must_use]
    pub fn key_width(&self) -> usize {
        self.items.iter().map(ListItem::width).max().unwrap_or(0)
    }

    /// Rendered rows in insertion order, each dimmed.
    #[must_use]
    pub fn rows(&self, painter: &Painter) -> Vec<String> {
        let width = self.key_width();
        self.items
            .iter()
            .map(|item| painter.dim(&item.formatted(width, painter)))
            .collect()
    }

    /// Hands each rendered row to `emit` and empties the buffer.
    /// An empty buffer never calls `emit`.
    pub fn flush(&mut self, painter: &Painter, mut emit: impl FnMut(String)) {
        if self.items.is_empty() {
            return;
        }
        for row in self.rows(painter) {
            emit(row);
        }
        self.items.clear();
    }

    /// Drops buffered rows without rendering them.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Scoped list under a logger's current line. Rows are written when the
/// guard is dropped, or earlier through [`List::finish`].
///
/// ```
/// use taglog::{Level, Logger, MemoryOutput};
///
/// let out = MemoryOutput::new();
/// let log = Logger::builder().level(Level::Info).output(out.clone()).colors(false).build();
///
/// let mut list = log.info("Config").list();
/// list.kv("name", "demo").kv("debug", false);
/// list.finish();
///
/// assert_eq!(out.lines().len(), 3);
/// ```
#[must_use = "rows are written when the list is dropped"]
pub struct List {
    logger: Logger,
    buffer: ListBuffer,
}

impl List {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            logger,
            buffer: ListBuffer::new(),
        }
    }

    pub fn kv(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.buffer.kv(key, value);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Writes the rows now instead of at the end of the scope.
    pub fn finish(self) {}
}

impl Drop for List {
    fn drop(&mut self) {
        self.logger.flush_list(&mut self.buffer);
    }
}
