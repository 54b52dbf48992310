use taglog::fmt::{Color, colorize};

#[test]
fn from_hex_parses_valid_colors() {
    assert_eq!(Color::from_hex("#ff00aa"), Some(Color::Rgb(255, 0, 170)));
    assert_eq!(Color::from_hex("#01A2FF"), Some(Color::Rgb(1, 162, 255)));
}

#[test]
fn from_hex_rejects_malformed_input() {
    for input in ["ff00aa", "#fff", "#zz00aa", "#ff00aa00", ""] {
        assert_eq!(Color::from_hex(input), None, "{input}");
    }
}

#[test]
fn from_name_accepts_separators() {
    for name in ["light-red", "light_red", "lightred", "LightRed"] {
        assert_eq!(Color::from_name(name), Some(Color::LightRed));
    }
    assert_eq!(Color::from_name("red"), Some(Color::Red));
    assert_eq!(Color::from_name("purple"), None);
}

#[test]
fn named_colours_use_basic_codes() {
    assert_eq!(Color::Black.fg_ansi(), "\x1b[30m");
    assert_eq!(Color::Yellow.fg_ansi(), "\x1b[33m");
    assert_eq!(Color::LightBlack.fg_ansi(), "\x1b[90m");
    assert_eq!(Color::LightWhite.fg_ansi(), "\x1b[97m");
}

#[test]
fn rgb_uses_truecolor_code() {
    assert_eq!(Color::Rgb(10, 20, 30).fg_ansi(), "\x1b[38;2;10;20;30m");
}

#[test]
fn display_round_trips_through_parsers() {
    for color in Color::NAMED {
        assert_eq!(Color::from_name(&color.to_string()), Some(color));
    }
    assert_eq!(Color::Rgb(1, 2, 255).to_string(), "#0102ff");
}

#[test]
fn colorize_wraps_with_reset() {
    assert_eq!(colorize("hi", Color::Red), "\x1b[31mhi\x1b[0m");
}
