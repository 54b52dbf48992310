//! CLI module for taglog.
//!
//! Shell scripts get the same lines a Rust program would print:
//!
//! ```text
//! taglog info "Deploy finished" --tag deploy --icon done --kv host=web1 --kv dry-run=false
//! ```

use crate::config::Config;
use crate::fmt::{ColorMode, Icon};
use crate::level::Level;
use crate::list::Value;
use crate::logger::Logger;
use clap::Parser;
use std::process::ExitCode;

/// What to log. The level keywords plus the warning shorthands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    /// Logs at bug level and exits with status 1.
    Bug,
    /// Warning tagged TODO.
    Todo,
    /// Blinking warning.
    Blink,
    /// Warning, then exit with status 0.
    Abort,
}

impl Kind {
    /// Level the line is rendered at.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Verbose => Level::Verbose,
            Self::Debug => Level::Debug,
            Self::Info => Level::Info,
            Self::Warn | Self::Todo | Self::Blink | Self::Abort => Level::Warn,
            Self::Error => Level::Error,
            Self::Bug => Level::Bug,
        }
    }
}

/// Colour switch for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Colors {
    Auto,
    Always,
    Never,
}

impl From<Colors> for ColorMode {
    fn from(colors: Colors) -> Self {
        match colors {
            Colors::Auto => Self::Auto,
            Colors::Always => Self::Always,
            Colors::Never => Self::Never,
        }
    }
}

/// taglog - print leveled, tagged log lines from the command line.
#[derive(Debug, Parser)]
#[command(name = "taglog", version, about = "Print leveled, tagged log lines")]
pub struct Cli {
    /// Severity of the line
    #[arg(value_enum)]
    pub kind: Kind,

    /// Message words, joined by single spaces
    #[arg(required = true)]
    pub message: Vec<String>,

    /// Tag for this line (repeatable, shown at debug threshold or below)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Nesting depth
    #[arg(long, default_value_t = 0)]
    pub indent: usize,

    /// Icon replacing the status bullet
    #[arg(long, value_parser = parse_icon)]
    pub icon: Option<Icon>,

    /// Prefix the line with the current time
    #[arg(long)]
    pub time: bool,

    /// Make the decoration blink
    #[arg(long)]
    pub blink: bool,

    /// Key/value row under the line (repeatable; `true`/`false` render as yes/no)
    #[arg(long = "kv", value_name = "KEY=VALUE", value_parser = parse_kv)]
    pub kv: Vec<(String, Value)>,

    /// Explicit threshold, overriding environment and config
    #[arg(long, value_parser = parse_level)]
    pub threshold: Option<Level>,

    /// Use debug threshold
    #[arg(long)]
    pub debug: bool,

    /// Use verbose threshold
    #[arg(long)]
    pub verbose: bool,

    /// Colour output
    #[arg(long, value_enum)]
    pub colors: Option<Colors>,

    /// Apply `[apps.<APP>]` overrides from the config file
    #[arg(long)]
    pub app: Option<String>,
}

fn parse_icon(s: &str) -> Result<Icon, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

fn parse_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

/// `key=value`. Splits on the first `=`; the key must not be empty.
///
/// # Errors
/// Returns a message when the `=` is missing or the key is empty.
pub fn parse_kv(s: &str) -> Result<(String, Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }

    let value = match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::from(other),
    };
    Ok((key.to_string(), value))
}

/// Logger for one CLI invocation. `--debug`/`--verbose` need no handling
/// here: threshold resolution reads them straight from argv.
#[must_use]
pub fn build_logger(cli: &Cli, config: &Config) -> Logger {
    let config = cli
        .app
        .as_deref()
        .map_or_else(|| config.clone(), |app| config.for_app(app));

    let mut builder = Logger::builder().config(&config);
    if let Some(level) = cli.threshold {
        builder = builder.level(level);
    }
    if let Some(colors) = cli.colors {
        builder = builder.color_mode(colors.into());
    }
    if cli.time {
        builder = builder.time(true);
    }

    let mut logger = builder.build();
    for _ in 0..cli.indent {
        logger = logger.indent();
    }
    logger
}

/// Runs one invocation. `bug` and `abort` exit the process from inside,
/// after the line and its key/value rows are written.
#[must_use]
pub fn run(cli: &Cli, config: &Config) -> ExitCode {
    let logger = build_logger(cli, config);

    let mut entry = logger.at(cli.kind.level()).tags(cli.tags.iter().cloned());
    if cli.kind == Kind::Todo {
        entry = entry.tag("TODO");
    }
    if cli.kind == Kind::Blink || cli.blink {
        entry = entry.blink();
    }
    if let Some(icon) = &cli.icon {
        entry = entry.icon(icon.clone());
    }

    let nested = entry.log(cli.message.join(" "));
    let mut list = nested.list();
    for (key, value) in &cli.kv {
        list.kv(key.clone(), value.clone());
    }
    list.finish();

    match cli.kind {
        Kind::Bug => nested.exit(1),
        Kind::Abort => nested.exit(0),
        _ => {
            nested.flush();
            ExitCode::SUCCESS
        }
    }
}
