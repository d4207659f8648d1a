//! Configuration and settings management
//!
//! Loads hook settings from the project's `.claude/autopilot.json` and
//! `AUTOPILOT__*` environment variables, on top of built-in defaults.

use crate::prompt::template_contains;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Flag that opts a command into autonomous mode
pub const DEFAULT_TRIGGER: &str = "--auto";

/// Project-relative location of the settings file
pub const PROJECT_CONFIG_PATH: &str = ".claude/autopilot.json";

/// Prefix for environment overrides, e.g. `AUTOPILOT__ENABLED=false`
pub const ENV_PREFIX: &str = "AUTOPILOT";

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "AUTOPILOT_LOG";

/// Hook settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Whether the filter is active at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Substring that activates the filter
    #[serde(default = "default_trigger")]
    pub trigger: String,
}

const fn default_enabled() -> bool {
    true
}

fn default_trigger() -> String {
    DEFAULT_TRIGGER.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            trigger: default_trigger(),
        }
    }
}

impl Settings {
    /// Load settings for the current working directory.
    ///
    /// Never fails: any loading problem is logged and the defaults are used,
    /// so a broken config file cannot break the host's tool pipeline.
    #[must_use]
    pub fn load() -> Self {
        let path = std::env::current_dir()
            .map(|dir| dir.join(PROJECT_CONFIG_PATH))
            .unwrap_or_else(|_| PathBuf::from(PROJECT_CONFIG_PATH));

        match Self::from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring invalid configuration");
                Self::default()
            }
        }
    }

    /// Load settings from an explicit file plus the environment.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file or an override cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::from(path).format(FileFormat::Json).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = s.try_deserialize()?;
        Ok(settings.validated())
    }

    /// Replace triggers the filter cannot honor with the default.
    ///
    /// Blank triggers would match every command, and a trigger that occurs
    /// in the fixed feedback text would always reappear in the feedback.
    fn validated(mut self) -> Self {
        if self.trigger.trim().is_empty() {
            warn!("Empty trigger configured, using {DEFAULT_TRIGGER}");
            self.trigger = default_trigger();
        } else if template_contains(&self.trigger) {
            warn!(
                trigger = %self.trigger,
                "Trigger occurs in the feedback template, using {DEFAULT_TRIGGER}"
            );
            self.trigger = default_trigger();
        }
        self
    }
}
