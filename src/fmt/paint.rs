//! The one place that decides whether escapes are emitted. Everything that
//! styles text goes through a `Painter`, so turning colour off is a single switch.

use super::style::{self, Style};
use super::OutputTarget;
use std::collections::HashMap;

/// Colour switch plus the registry of named styles usable as `<name>` markup.
#[derive(Debug, Clone)]
pub struct Painter {
    enabled: bool,
    styles: HashMap<String, Style>,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new(OutputTarget::current().supports_color())
    }
}

impl Painter {
    /// Empty registry: markup only resolves names the program registers, so
    /// text like `<red>` in a message is printed as written.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            styles: HashMap::new(),
        }
    }

    /// Never emits escapes. Convenient for tests and piped output.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Registers (or replaces) a named style adapter.
    pub fn register(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    #[must_use]
    pub fn style(&self, name: &str) -> Option<Style> {
        self.styles.get(name).copied()
    }

    /// `text` in `style`, or untouched when colour is off.
    #[must_use]
    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            style.apply(text)
        } else {
            text.to_string()
        }
    }

    #[must_use]
    pub fn dim(&self, text: &str) -> String {
        self.paint(text, Style::new().dim())
    }

    #[must_use]
    pub fn blink(&self, text: &str) -> String {
        self.paint(text, Style::new().blink())
    }

    /// Applies a registered style by name; unknown names leave the text as is.
    #[must_use]
    pub fn named(&self, name: &str, text: &str) -> String {
        self.style(name)
            .map_or_else(|| text.to_string(), |style| self.paint(text, style))
    }

    /// Resolves `<name>...</name>` markup against the registry. With colour off
    /// the tags are stripped and only the text remains.
    #[must_use]
    pub fn markup(&self, text: &str) -> String {
        if !text.contains('<') {
            return text.to_string();
        }
        let segments = style::parse(text, &self.styles);
        if self.enabled {
            style::render(&segments)
        } else {
            style::render_plain(&segments)
        }
    }
}

/// Highlights `text` the way quoted values are highlighted in messages.
#[must_use]
pub fn hl(text: &str) -> String {
    Painter::default().paint(text, Style::hl())
}
