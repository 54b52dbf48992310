//! The sixteen classic ANSI colours, plus 24-bit colours for config-defined styles.

use std::fmt;

/// Named colours map to the basic SGR codes every terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    LightBlack,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    LightWhite,
    /// True colour, written as `#RRGGBB` in config files.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// Every named colour, in SGR order. Used for name lookups.
    pub const NAMED: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::LightBlack,
        Self::LightRed,
        Self::LightGreen,
        Self::LightYellow,
        Self::LightBlue,
        Self::LightMagenta,
        Self::LightCyan,
        Self::LightWhite,
    ];

    /// Parses `#RRGGBB`. Anything else yields `None`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::Rgb(r, g, b))
    }

    /// Looks up a named colour. Accepts `light-red`, `light_red` and `lightred`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Self::NAMED.into_iter().find(|c| c.name().replace('-', "") == wanted)
    }

    /// Kebab-case name, matching what `from_name` and config files accept.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::LightBlack => "light-black",
            Self::LightRed => "light-red",
            Self::LightGreen => "light-green",
            Self::LightYellow => "light-yellow",
            Self::LightBlue => "light-blue",
            Self::LightMagenta => "light-magenta",
            Self::LightCyan => "light-cyan",
            Self::LightWhite => "light-white",
            Self::Rgb(..) => "rgb",
        }
    }

    /// Foreground escape sequence for this colour.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        match self {
            Self::Rgb(r, g, b) => format!("\x1b[38;2;{r};{g};{b}m"),
            named => {
                let index = Self::NAMED.iter().position(|c| *c == named).unwrap_or(7);
                let code = if index < 8 { 30 + index } else { 90 + index - 8 };
                format!("\x1b[{code}m")
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            named => f.write_str(named.name()),
        }
    }
}

/// Wraps `text` in a foreground colour and a trailing reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
