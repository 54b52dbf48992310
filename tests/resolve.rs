use taglog::{Level, Resolution, Signals, Source};

fn resolve(signals: Signals) -> Resolution {
    signals.resolve()
}

#[test]
fn nothing_set_is_info() {
    let r = resolve(Signals::new());
    assert_eq!(r.level, Level::Info);
    assert_eq!(r.source, Source::Default);
    assert!(r.notice().is_none());
}

#[test]
fn debug_env_in_either_case() {
    for key in ["DEBUG", "debug"] {
        let r = resolve(Signals::new().env(key));
        assert_eq!(r.level, Level::Debug);
        assert_eq!(r.source, Source::Env(key.to_string()));
    }
}

#[test]
fn debug_env_beats_verbose_env() {
    let r = resolve(Signals::new().env("VERBOSE").env("debug"));
    assert_eq!(r.level, Level::Debug);
}

#[test]
fn verbose_env_beats_arguments() {
    let r = resolve(Signals::new().env("verbose").args(["tool", "--debug"]));
    assert_eq!(r.level, Level::Verbose);
    assert_eq!(r.source, Source::Env("verbose".to_string()));
}

#[test]
fn debug_argument_beats_verbose_argument() {
    let r = resolve(Signals::new().args(["tool", "--verbose", "--debug"]));
    assert_eq!(r.level, Level::Debug);
    assert_eq!(r.source, Source::Argument("--debug".to_string()));
}

#[test]
fn verbose_argument() {
    let r = resolve(Signals::new().args(["tool", "x", "--verbose"]));
    assert_eq!(r.level, Level::Verbose);
}

#[test]
fn arguments_beat_info_env() {
    let r = resolve(Signals::new().env("INFO").args(["tool", "--verbose"]));
    assert_eq!(r.level, Level::Verbose);
}

#[test]
fn info_env_beats_path_markers() {
    let r = resolve(Signals::new().env("info").args(["tool", "/build/debug/x"]));
    assert_eq!(r.level, Level::Info);
    assert_eq!(r.source, Source::Env("info".to_string()));
    assert_eq!(
        r.notice().as_deref(),
        Some("Found info as env variable, use info level")
    );
}

#[test]
fn debug_path_in_first_argument() {
    let r = resolve(Signals::new().args(["tool", "/home/u/target/debug/run"]));
    assert_eq!(r.level, Level::Debug);
    assert_eq!(r.source, Source::Path("/debug/"));
    assert_eq!(
        r.notice().as_deref(),
        Some("Found /debug/ in path, use debug level")
    );
}

#[test]
fn xctest_in_first_argument() {
    let r = resolve(Signals::new().args(["tool", "Bundle.xctest"]));
    assert_eq!(r.level, Level::Verbose);
}

#[test]
fn markers_only_count_in_first_argument() {
    let r = resolve(Signals::new().args(["tool", "run", "/x/debug/y"]));
    assert_eq!(r.level, Level::Info);
    assert_eq!(r.source, Source::Default);
}

#[test]
fn program_path_is_not_inspected() {
    let r = resolve(Signals::new().args(["/x/debug/tool"]));
    assert_eq!(r.level, Level::Info);
}

#[test]
fn argument_notice_text() {
    let r = resolve(Signals::new().args(["tool", "--debug"]));
    assert_eq!(
        r.notice().as_deref(),
        Some("Found --debug as argument, use debug level")
    );
}

#[test]
fn explicit_has_no_notice() {
    let r = Resolution::explicit(Level::Warn);
    assert!(r.notice().is_none());
    assert_eq!(r.to_string(), "use warn level");
}

#[test]
fn builder_level_skips_resolution() {
    let builder = taglog::Logger::builder()
        .signals(Signals::new().env("DEBUG"))
        .level(Level::Error);
    assert_eq!(builder.resolution(), Resolution::explicit(Level::Error));
}
