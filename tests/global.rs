use taglog::{Level, Logger, MemoryOutput, global};

// One test: the global logger is process-wide and can only be installed once.
#[test]
fn init_once_then_shared() {
    assert!(global::try_logger().is_none());

    let out = MemoryOutput::new();
    let logger = Logger::builder()
        .level(Level::Debug)
        .colors(false)
        .output(out.clone())
        .build();
    assert!(global::init(logger));
    assert!(!global::init(Logger::with_level(Level::Bug)));

    assert_eq!(global::logger().level(), Level::Debug);
    global::tagged("db").info("ready");

    let missing = std::env::temp_dir().join("taglog-global-test-missing.toml");
    taglog::Config::load_from(&missing).unwrap();

    assert_eq!(
        out.stdout(),
        vec!["[I] db › ready".to_string()]
    );
    assert_eq!(out.stderr().len(), 1);
    assert!(out.stderr()[0].starts_with("[D] config › Config loaded from "));
}
