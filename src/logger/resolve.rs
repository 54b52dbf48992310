//! Picks a threshold from the invocation context when the caller gave none,
//! so a CLI gets `--debug`/`DEBUG=1` handling without wiring flags itself.

use crate::level::Level;
use std::collections::HashSet;
use std::fmt;

/// Snapshot of the process signals that drive level selection: which
/// environment variables are set (values are irrelevant) and the full argv.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signals {
    env: HashSet<String>,
    args: Vec<String>,
}

/// Where a resolved threshold came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The caller passed a level.
    Explicit,
    /// An environment variable was present.
    Env(String),
    /// An argument equal to `--debug` or `--verbose`.
    Argument(String),
    /// A marker found inside the first positional argument.
    Path(&'static str),
    /// Nothing matched.
    Default,
}

/// Outcome of threshold resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub level: Level,
    pub source: Source,
}

impl Resolution {
    #[must_use]
    pub const fn explicit(level: Level) -> Self {
        Self {
            level,
            source: Source::Explicit,
        }
    }

    const fn new(level: Level, source: Source) -> Self {
        Self { level, source }
    }

    /// One-line explanation for thresholds picked up from the environment.
    /// `None` when the level was explicit or defaulted.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        let level = self.level;
        match &self.source {
            Source::Env(key) => Some(format!("Found {key} as env variable, use {level} level")),
            Source::Argument(arg) => Some(format!("Found {arg} as argument, use {level} level")),
            Source::Path(marker) => Some(format!("Found {marker} in path, use {level} level")),
            Source::Explicit | Source::Default => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notice() {
            Some(notice) => f.write_str(&notice),
            None => write!(f, "use {} level", self.level),
        }
    }
}

impl Signals {
    /// No environment, no arguments. Resolves to `Info`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the live process environment and `argv`.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            env: std::env::vars_os()
                .map(|(key, _)| key.to_string_lossy().into_owned())
                .collect(),
            args: std::env::args_os()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        }
    }

    /// Marks an environment variable as present.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>) -> Self {
        self.env.insert(key.into());
        self
    }

    /// Replaces argv. The first element is the program path, as in `std::env::args`.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn has_env(&self, key: &str) -> bool {
        self.env.contains(key)
    }

    fn first_env(&self, keys: [&str; 2]) -> Option<String> {
        keys.into_iter()
            .find(|key| self.has_env(key))
            .map(ToString::to_string)
    }

    fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }

    /// First matching signal wins:
    ///
    /// 1. `DEBUG`/`debug` set → debug
    /// 2. `VERBOSE`/`verbose` set → verbose
    /// 3. `--debug` argument → debug
    /// 4. `--verbose` argument → verbose
    /// 5. `INFO`/`info` set → info
    /// 6. first positional argument containing `/debug/` → debug, `.xctest` → verbose, else info
    /// 7. info
    #[must_use]
    pub fn resolve(&self) -> Resolution {
        if let Some(key) = self.first_env(["DEBUG", "debug"]) {
            return Resolution::new(Level::Debug, Source::Env(key));
        }

        if let Some(key) = self.first_env(["VERBOSE", "verbose"]) {
            return Resolution::new(Level::Verbose, Source::Env(key));
        }

        for (arg, level) in [("--debug", Level::Debug), ("--verbose", Level::Verbose)] {
            if self.has_arg(arg) {
                return Resolution::new(level, Source::Argument(arg.to_string()));
            }
        }

        if let Some(key) = self.first_env(["INFO", "info"]) {
            return Resolution::new(Level::Info, Source::Env(key));
        }

        if let Some(first) = self.args.get(1) {
            if first.contains("/debug/") {
                return Resolution::new(Level::Debug, Source::Path("/debug/"));
            }
            if first.contains(".xctest") {
                return Resolution::new(Level::Verbose, Source::Path(".xctest"));
            }
        }

        Resolution::new(Level::Info, Source::Default)
    }
}
