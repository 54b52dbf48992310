//! Optional glyph that replaces the status bullet of a line.
//!
//! The built-in set is small on purpose; programs that want their own glyphs
//! build an `Icon` value instead of extending an enum.

use super::{Color, Painter, Style};
use std::borrow::Cow;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    glyph: Cow<'static, str>,
    style: Style,
}

impl Icon {
    /// Check mark, light green.
    pub const DONE: Self = Self::from_static("✔", Style::new().fg(Color::LightGreen));
    /// Heart, light red.
    pub const HEART: Self = Self::from_static("♥", Style::new().fg(Color::LightRed));

    #[must_use]
    pub fn new(glyph: impl Into<Cow<'static, str>>, style: Style) -> Self {
        Self {
            glyph: glyph.into(),
            style,
        }
    }

    #[must_use]
    pub const fn from_static(glyph: &'static str, style: Style) -> Self {
        Self {
            glyph: Cow::Borrowed(glyph),
            style,
        }
    }

    /// Raw glyph without escapes.
    #[must_use]
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Glyph as it appears in the terminal.
    #[must_use]
    pub fn render(&self, painter: &Painter) -> String {
        painter.paint(&self.glyph, self.style)
    }
}

impl FromStr for Icon {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "done" => Ok(Self::DONE),
            "heart" => Ok(Self::HEART),
            _ => Err(crate::Error::UnknownIcon(s.to_string())),
        }
    }
}
