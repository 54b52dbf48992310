use std::fs;
use taglog::{ColorMode, Config, Error, Level, Logger, MemoryOutput, Style};
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert!(config.general.level.is_none());
    assert!(!config.general.time);
    assert!(config.general.tags.is_empty());
    assert_eq!(config.terminal.colors, ColorMode::Auto);
    assert_eq!(config.terminal.trace_frames, 3);
    assert!(config.styles.is_empty());
    assert!(config.apps.is_empty());
}

#[test]
fn parse_all_sections() {
    let config = Config::parse(
        r##"
[general]
level = "debug"
time = true
tags = ["app", "net"]

[terminal]
colors = "never"
trace_frames = 5

[styles]
path = "underline cyan"
accent = "bold #ff8800"

[apps.worker]
level = "warn"
"##,
    )
    .unwrap();

    assert_eq!(config.level().unwrap(), Some(Level::Debug));
    assert!(config.general.time);
    assert_eq!(config.general.tags, ["app", "net"]);
    assert_eq!(config.terminal.colors, ColorMode::Never);
    assert_eq!(config.terminal.trace_frames, 5);
    assert_eq!(config.styles.len(), 2);
    assert!(config.apps.contains_key("worker"));
}

#[test]
fn invalid_level_is_rejected() {
    let err = Config::parse("[general]\nlevel = \"loud\"\n").unwrap_err();
    assert!(matches!(err, Error::InvalidLevel(ref s) if s == "loud"));
}

#[test]
fn invalid_app_level_is_rejected() {
    let err = Config::parse("[apps.x]\nlevel = \"chatty\"\n").unwrap_err();
    assert!(matches!(err, Error::InvalidLevel(_)));
}

#[test]
fn invalid_style_is_rejected() {
    let err = Config::parse("[styles]\nbad = \"sparkly\"\n").unwrap_err();
    assert!(matches!(err, Error::InvalidStyle(_)));
}

#[test]
fn toml_syntax_error_is_parse_error() {
    let err = Config::parse("[general\nlevel = 1").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn parsed_styles_are_typed() {
    let config = Config::parse("[styles]\npath = \"underline\"\n").unwrap();
    let styles = config.parsed_styles().unwrap();
    assert_eq!(styles, vec![("path".to_string(), Style::new().underline())]);
}

#[test]
fn for_app_overrides_only_given_fields() {
    let config = Config::parse(
        r#"
[general]
level = "info"
tags = ["base"]

[apps.worker]
level = "verbose"
trace_frames = 0
"#,
    )
    .unwrap();

    let worker = config.for_app("worker");
    assert_eq!(worker.level().unwrap(), Some(Level::Verbose));
    assert_eq!(worker.terminal.trace_frames, 0);
    assert_eq!(worker.general.tags, ["base"]);

    let other = config.for_app("unknown");
    assert_eq!(other.level().unwrap(), Some(Level::Info));
    assert_eq!(other.terminal.trace_frames, 3);
}

#[test]
fn missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert!(config.general.level.is_none());
}

#[test]
fn load_with_sources_merges_maps() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    let child_path = tmp_dir.path().join("child.toml");

    fs::write(
        &base_path,
        r#"
source = "child.toml"

[styles]
path = "underline"
"#,
    )
    .unwrap();
    fs::write(
        &child_path,
        r#"
[styles]
path = "bold"
accent = "italic"

[apps.worker]
time = true
"#,
    )
    .unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.styles["path"], "underline");
    assert_eq!(config.styles["accent"], "italic");
    assert_eq!(config.apps["worker"].time, Some(true));
}

#[test]
fn load_with_missing_source_is_ignored() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    fs::write(
        &base_path,
        "source = \"missing.toml\"\n[general]\nlevel = \"warn\"\n",
    )
    .unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.level().unwrap(), Some(Level::Warn));
}

#[test]
fn cyclic_sources_are_detected() {
    let tmp_dir = TempDir::new().unwrap();
    let a = tmp_dir.path().join("a.toml");
    let b = tmp_dir.path().join("b.toml");
    fs::write(&a, "source = \"b.toml\"\n").unwrap();
    fs::write(&b, "source = \"a.toml\"\n").unwrap();

    let err = Config::load_from(&a).unwrap_err();
    assert!(matches!(err, Error::CyclicInclude(_)));
}

#[test]
fn shared_include_is_not_a_cycle() {
    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path();
    fs::write(dir.join("a.toml"), "source = \"b.toml\"\nsource = \"c.toml\"\n").unwrap();
    fs::write(dir.join("b.toml"), "source = \"d.toml\"\n[styles]\nfrom_b = \"bold\"\n").unwrap();
    fs::write(dir.join("c.toml"), "source = \"d.toml\"\n[styles]\nfrom_c = \"dim\"\n").unwrap();
    fs::write(dir.join("d.toml"), "[styles]\nfrom_d = \"italic\"\n").unwrap();

    let config = Config::load_from(&dir.join("a.toml")).unwrap();
    for name in ["from_b", "from_c", "from_d"] {
        assert!(config.styles.contains_key(name), "{name}");
    }
}

#[test]
fn self_include_is_a_cycle() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("self.toml");
    fs::write(&path, "source = \"self.toml\"\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(Error::CyclicInclude(_))
    ));
}

#[test]
fn extract_sources_strips_source_lines() {
    let (sources, rest) =
        taglog::config::extract_sources("source = \"a.toml\"\nsource = 'b.toml'\n[general]\n");
    assert_eq!(sources, ["a.toml", "b.toml"]);
    assert_eq!(rest, "[general]\n");
}

#[test]
fn logger_from_config_applies_settings() {
    let config = Config::parse(
        r#"
[general]
level = "debug"
tags = ["svc"]

[terminal]
colors = "never"
"#,
    )
    .unwrap();

    let out = MemoryOutput::new();
    let logger = Logger::builder().config(&config).output(out.clone()).build();
    assert_eq!(logger.level(), Level::Debug);
    logger.info("up");
    assert_eq!(out.stdout(), vec!["[I] svc › up"]);
}

#[test]
fn config_styles_reach_markup() {
    let config = Config::parse(
        r#"
[general]
level = "info"

[terminal]
colors = "always"

[styles]
path = "underline"
"#,
    )
    .unwrap();

    let out = MemoryOutput::new();
    let logger = Logger::builder().config(&config).output(out.clone()).build();
    logger.info("<path>x</path>");
    assert!(out.stdout()[0].ends_with("\x1b[4mx\x1b[0m"));
}
