//! `config.toml`: defaults for every logger the program builds, named styles
//! for markup, and per-app overrides. A file may pull in others with
//! `source = "path"` lines; includes are followed recursively.

mod structs;

pub use structs::{AppConfig, GeneralConfig, TerminalConfig};

use crate::fmt::Style;
use crate::global;
use crate::level::Level;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "TAGLOG_CONFIG";

/// An empty file is a valid config: every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    /// Named styles for `<name>` markup, e.g. `hl = "italic light-yellow"`.
    pub styles: HashMap<String, String>,
    /// Overrides keyed by application name.
    pub apps: HashMap<String, AppConfig>,
}

/// Splits raw file content into the `source = "..."` include paths and the
/// TOML that remains. Include lines are not valid in the serde schema.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let (includes, rest): (Vec<&str>, Vec<&str>) = content
        .lines()
        .partition(|line| source_value(line).is_some());

    let sources = includes
        .into_iter()
        .filter_map(source_value)
        .filter(|path| !path.is_empty())
        .map(ToString::to_string)
        .collect();
    let toml = rest.iter().fold(String::new(), |mut acc, line| {
        acc.push_str(line);
        acc.push('\n');
        acc
    });

    (sources, toml)
}

/// Right-hand side of a `source = ...` line, unquoted.
fn source_value(line: &str) -> Option<&str> {
    let (key, value) = line.trim().split_once('=')?;
    (key.trim() == "source").then(|| value.trim().trim_matches(['"', '\'']))
}

impl Config {
    /// Loads `$TAGLOG_CONFIG` if set, else the default path. A missing file
    /// yields the defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be read
    /// or parsed, includes form a cycle, or a level/style value is invalid.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, contains cyclic
    /// includes, or holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let config = Self::load_with_sources(path, &mut HashSet::new())?;
        config.validate()?;
        global::debug("config", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Parses a config from a string. `source` lines are ignored.
    ///
    /// # Errors
    /// TOML syntax errors and invalid level/style values.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        let config: Self = toml::from_str(&toml_content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` and everything it includes. `seen` holds the canonical
    /// paths on the current include chain.
    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if seen.contains(&key) {
            return Err(crate::Error::CyclicInclude(key));
        }
        seen.insert(key.clone());

        let (sources, toml) = extract_sources(&fs::read_to_string(path)?);
        let mut config: Self = toml::from_str(&toml)?;

        for source in sources {
            let include = Self::include_path(path, &source);
            if include.exists() {
                config.merge(Self::load_with_sources(&include, seen)?);
            } else {
                global::warn("config", &format!("Source file not found: {source}"));
            }
        }

        // Leaving this file's subtree; a sibling may include the same file again
        seen.remove(&key);
        Ok(config)
    }

    /// `~` expands to the home directory; relative paths are taken from the
    /// including file's directory.
    fn include_path(from: &Path, source: &str) -> PathBuf {
        let expanded = PathBuf::from(shellexpand::tilde(source).as_ref());
        match from.parent() {
            Some(dir) if expanded.is_relative() => dir.join(expanded),
            _ => expanded,
        }
    }

    /// Folds an included config's map fields into `self` without overwriting
    /// existing keys, so the including file wins.
    pub fn merge(&mut self, other: Self) {
        for (k, v) in other.styles {
            self.styles.entry(k).or_insert(v);
        }
        for (k, v) in other.apps {
            self.apps.entry(k).or_insert(v);
        }
    }

    /// Config with the `[apps.<name>]` overrides applied. Unknown names return
    /// an unchanged copy.
    #[must_use]
    pub fn for_app(&self, app_name: &str) -> Self {
        let mut config = self.clone();

        if let Some(app) = self.apps.get(app_name) {
            if let Some(ref level) = app.level {
                config.general.level = Some(level.clone());
            }
            if let Some(time) = app.time {
                config.general.time = time;
            }
            if let Some(ref tags) = app.tags {
                config.general.tags.clone_from(tags);
            }
            if let Some(colors) = app.colors {
                config.terminal.colors = colors;
            }
            if let Some(frames) = app.trace_frames {
                config.terminal.trace_frames = frames;
            }
        }

        config
    }

    /// Rejects level keywords and style specs that would not parse.
    ///
    /// # Errors
    /// `InvalidLevel` or `InvalidStyle` for the first offending value.
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.level()?;
        self.parsed_styles()?;
        for app in self.apps.values() {
            if let Some(ref level) = app.level {
                level.parse::<Level>()?;
            }
        }
        Ok(())
    }

    /// `$TAGLOG_CONFIG` (tilde-expanded) or `<config dir>/taglog/config.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        if let Ok(path) = std::env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(shellexpand::tilde(&path).as_ref()));
        }

        directories::ProjectDirs::from("", "", "taglog")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Typed threshold, `None` when the config leaves it to the environment.
    ///
    /// # Errors
    /// `InvalidLevel` for an unknown keyword.
    pub fn level(&self) -> Result<Option<Level>, crate::Error> {
        self.general
            .level
            .as_deref()
            .map(str::parse::<Level>)
            .transpose()
    }

    /// Typed `[styles]` table.
    ///
    /// # Errors
    /// `InvalidStyle` for the first spec that does not parse.
    pub fn parsed_styles(&self) -> Result<Vec<(String, Style)>, crate::Error> {
        self.styles
            .iter()
            .map(|(name, spec)| Ok((name.clone(), spec.parse::<Style>()?)))
            .collect()
    }
}
