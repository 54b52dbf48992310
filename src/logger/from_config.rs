//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;

impl LoggerBuilder {
    /// Applies `[general]`, `[terminal]` and `[styles]`. A config without a
    /// level leaves threshold resolution to the environment.
    ///
    /// Values are expected to be validated already ([`Config::load`] does
    /// that); anything invalid here is skipped.
    #[must_use]
    pub fn config(mut self, config: &Config) -> Self {
        if let Ok(Some(level)) = config.level() {
            self = self.level(level);
        }

        self = self
            .tags(config.general.tags.iter().cloned())
            .time(config.general.time)
            .color_mode(config.terminal.colors)
            .trace_frames(config.terminal.trace_frames);

        for (name, spec) in &config.styles {
            if let Ok(style) = spec.parse() {
                self = self.style(name.clone(), style);
            }
        }

        self
    }
}

impl Logger {
    /// Terminal logger configured from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::builder().config(config).build()
    }

    /// Terminal logger from `config` with the `[apps.<app_name>]` overrides applied.
    #[must_use]
    pub fn for_app(config: &Config, app_name: &str) -> Self {
        Self::from_config(&config.for_app(app_name))
    }
}
