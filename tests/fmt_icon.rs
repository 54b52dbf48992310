use taglog::{Color, Error, Icon, Painter, Style};

#[test]
fn builtin_icons() {
    assert_eq!(Icon::DONE.glyph(), "✔");
    assert_eq!(Icon::DONE.style(), Style::new().fg(Color::LightGreen));
    assert_eq!(Icon::HEART.glyph(), "♥");
    assert_eq!(Icon::HEART.style(), Style::new().fg(Color::LightRed));
}

#[test]
fn render_follows_painter() {
    assert_eq!(Icon::DONE.render(&Painter::plain()), "✔");
    assert_eq!(Icon::DONE.render(&Painter::new(true)), "\x1b[92m✔\x1b[0m");
}

#[test]
fn custom_icon() {
    let icon = Icon::new(String::from("→"), Style::new().bold());
    assert_eq!(icon.glyph(), "→");
    assert_eq!(icon.render(&Painter::new(true)), "\x1b[1m→\x1b[0m");
}

#[test]
fn parse_known_names_only() {
    assert_eq!("done".parse::<Icon>().unwrap(), Icon::DONE);
    assert_eq!("heart".parse::<Icon>().unwrap(), Icon::HEART);
    assert!(matches!("star".parse::<Icon>(), Err(Error::UnknownIcon(s)) if s == "star"));
}
