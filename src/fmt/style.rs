//! Text attributes plus an optional colour, and the inline `<name>text</name>`
//! markup that lets message bodies reference named styles.

use super::Color;
use std::collections::HashMap;
use std::str::FromStr;

/// A set of SGR attributes. `Style::new()` is plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bold: false,
            dim: false,
            italic: false,
            underline: false,
            blink: false,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub const fn blink(mut self) -> Self {
        self.blink = true;
        self
    }

    /// Highlight for values quoted inside a message: italic light yellow.
    #[must_use]
    pub const fn hl() -> Self {
        Self::new().italic().fg(Color::LightYellow)
    }

    /// True when applying this style would not change the text.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.fg.is_none() && !self.bold && !self.dim && !self.italic && !self.underline && !self.blink
    }

    /// Opening escape sequence, empty for a plain style.
    #[must_use]
    pub fn prefix(&self) -> String {
        let mut out = String::new();
        for (on, code) in [
            (self.bold, 1),
            (self.dim, 2),
            (self.italic, 3),
            (self.underline, 4),
            (self.blink, 5),
        ] {
            if on {
                out.push_str(&format!("\x1b[{code}m"));
            }
        }
        if let Some(color) = self.fg {
            out.push_str(&color.fg_ansi());
        }
        out
    }

    /// Wraps `text` in this style, always emitting escapes.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        format!("{}{text}{}", self.prefix(), Color::RESET)
    }
}

/// Space-separated words: any of `bold dim italic underline blink`, at most one
/// colour name or `#RRGGBB`. Example: `"italic light-yellow"`.
impl FromStr for Style {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = Self::new();
        for word in s.split_whitespace() {
            style = match word.to_lowercase().as_str() {
                "bold" => style.bold(),
                "dim" => style.dim(),
                "italic" => style.italic(),
                "underline" => style.underline(),
                "blink" => style.blink(),
                other => {
                    let color = if other.starts_with('#') {
                        Color::from_hex(other)
                    } else {
                        Color::from_name(other)
                    };
                    match color {
                        Some(color) if style.fg.is_none() => style.fg(color),
                        _ => return Err(crate::Error::InvalidStyle(s.to_string())),
                    }
                }
            };
        }
        Ok(style)
    }
}

/// Message text split into unstyled runs and runs wrapped in a known style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Styled(String, Style),
}

impl Segment {
    /// Text without any escapes.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(t) | Self::Styled(t, _) => t,
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Plain(t) => t.clone(),
            Self::Styled(t, style) => style.apply(t),
        }
    }
}

/// Splits `msg` on `<name>...</name>` pairs whose name is registered in `styles`.
/// Unknown or unclosed tags stay in the text verbatim, so arbitrary `<...>`
/// content in a message is never eaten.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn parse(msg: &str, styles: &HashMap<String, Style>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut i = 0;
    let bytes = msg.as_bytes();

    while i < bytes.len() {
        if bytes[i] == b'<'
            && let Some(tag_end) = find_char(bytes, i + 1, b'>')
        {
            let tag_name = &msg[i + 1..tag_end];
            if let Some(style) = styles.get(tag_name) {
                let close_tag = format!("</{tag_name}>");
                if let Some(offset) = msg[tag_end + 1..].find(&close_tag) {
                    let content_start = tag_end + 1;
                    let content_end = content_start + offset;

                    if !plain.is_empty() {
                        segments.push(Segment::Plain(std::mem::take(&mut plain)));
                    }
                    segments.push(Segment::Styled(
                        msg[content_start..content_end].to_string(),
                        *style,
                    ));
                    i = content_end + close_tag.len();
                    continue;
                }
            }
        }

        // Copy up to the next '<' (or the '<' itself when it opened nothing)
        let next_tag = find_char(bytes, i + 1, b'<').unwrap_or(bytes.len());
        plain.push_str(&msg[i..next_tag]);
        i = next_tag;
    }

    if !plain.is_empty() {
        segments.push(Segment::Plain(plain));
    }

    segments
}

fn find_char(bytes: &[u8], start: usize, c: u8) -> Option<usize> {
    bytes
        .get(start..)?
        .iter()
        .position(|&b| b == c)
        .map(|p| start + p)
}

/// Styled rendering of parsed segments.
#[must_use]
pub fn render(segments: &[Segment]) -> String {
    segments.iter().map(Segment::render).collect()
}

/// Plain rendering: markup removed, no escapes.
#[must_use]
pub fn render_plain(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}
