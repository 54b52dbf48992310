#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn taglog(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_taglog"));
    for key in ["DEBUG", "debug", "VERBOSE", "verbose", "INFO", "info", "CLICOLOR_FORCE"] {
        cmd.env_remove(key);
    }
    cmd.env("TAGLOG_CONFIG", "/nonexistent/taglog/config.toml")
        .env("NO_COLOR", "1")
        .args(args)
        .args(["--colors", "never"])
        .output()
        .unwrap()
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn info_goes_to_stdout() {
    let out = taglog(&["info", "hello", "world"]);
    assert!(out.status.success());
    assert_eq!(lines(&out.stdout), ["[I] hello world"]);
    assert!(out.stderr.is_empty());
}

#[test]
fn debug_hidden_by_default() {
    let out = taglog(&["debug", "quiet"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());
}

#[test]
fn debug_flag_lowers_threshold_and_says_so() {
    let out = taglog(&["debug", "loud", "--debug"]);
    assert!(out.status.success());
    assert_eq!(
        lines(&out.stderr),
        [
            "[D] taglog › Found --debug as argument, use debug level",
            "[D] loud",
        ]
    );
}

#[test]
fn debug_env_lowers_threshold() {
    let out = Command::new(env!("CARGO_BIN_EXE_taglog"))
        .env("DEBUG", "1")
        .env("TAGLOG_CONFIG", "/nonexistent/taglog/config.toml")
        .args(["warn", "w", "--tag", "t", "--colors", "never"])
        .output()
        .unwrap();
    assert_eq!(
        lines(&out.stderr),
        [
            "[D] taglog › Found DEBUG as env variable, use debug level",
            "[W] t › w",
        ]
    );
}

#[test]
fn tags_need_debug_threshold() {
    let out = taglog(&["info", "x", "--tag", "t"]);
    assert_eq!(lines(&out.stdout), ["[I] x"]);

    let out = taglog(&["info", "x", "--tag", "a", "-t", "b", "--threshold", "debug"]);
    assert_eq!(lines(&out.stdout), ["[I] a › b › x"]);
}

#[test]
fn icon_and_indent() {
    let out = taglog(&["info", "ok", "--icon", "done", "--indent", "1"]);
    assert_eq!(lines(&out.stdout), ["✔   ok"]);
}

#[test]
fn todo_is_tagged_warning() {
    let out = taglog(&["todo", "later", "--threshold", "debug"]);
    assert_eq!(lines(&out.stderr), ["[W] TODO › later"]);
}

#[test]
fn kv_rows_follow_parent() {
    let out = taglog(&["info", "hello", "--kv", "a=1", "--kv", "long=true"]);
    assert_eq!(lines(&out.stdout), ["[I] hello", "    a   : 1", "    long: yes"]);
}

#[test]
fn kv_rows_hidden_with_hidden_parent() {
    let out = taglog(&["verbose", "x", "--kv", "a=1"]);
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());
}

#[test]
fn bug_exits_with_one() {
    let out = taglog(&["bug", "z"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(lines(&out.stderr), ["[B] z"]);
}

#[test]
fn abort_exits_cleanly() {
    let out = taglog(&["abort", "bye"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(lines(&out.stderr), ["[W] bye"]);
}

#[test]
fn bug_keeps_icon_and_kv_rows() {
    let out = taglog(&["bug", "broken", "--icon", "heart", "--kv", "code=7"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(lines(&out.stderr), ["♥ broken", "    code: 7"]);
}

#[test]
fn abort_keeps_tags_and_kv_rows() {
    let out = taglog(&[
        "abort", "stop", "--tag", "job", "--threshold", "debug", "--kv", "done=false",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(lines(&out.stderr), ["[W] job › stop", "    done: no"]);
}

#[test]
fn malformed_arguments_are_usage_errors() {
    assert_eq!(taglog(&["info", "x", "--kv", "novalue"]).status.code(), Some(2));
    assert_eq!(taglog(&["info", "x", "--kv", "=v"]).status.code(), Some(2));
    assert_eq!(taglog(&["loud", "x"]).status.code(), Some(2));
    assert_eq!(taglog(&["info", "x", "--icon", "star"]).status.code(), Some(2));
    assert_eq!(taglog(&["info", "x", "--threshold", "DEBUG"]).status.code(), Some(2));
}

#[test]
fn unreadable_config_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general]\nlevel = \"loud\"\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_taglog"))
        .env("TAGLOG_CONFIG", &path)
        .args(["info", "x"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid level: 'loud'"));
}

#[test]
fn app_overrides_apply() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[apps.ci]\nlevel = \"warn\"\n").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_taglog"))
        .env("TAGLOG_CONFIG", &path)
        .args(["info", "x", "--app", "ci", "--colors", "never"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}
