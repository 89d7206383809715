//! Console settings and the ways a host can build them.
//!
//! Settings start from the defaults of a [`Profile`] and can then be
//! overlaid with a JSON settings file and with `DEVCONSOLE_*` environment
//! variables.
use crate::error::ConfigError;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default upper bound on retained history lines.
pub const DEFAULT_MAX_HISTORY_SIZE: usize = 100;

/// Build profile the host runs under.
///
/// Only the default of [`ConsoleSettings::enabled`] depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Development,
    Production,
}

impl Profile {
    /// Maps the compiler's debug-assertions setting to a profile.
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Profile::Development
        } else {
            Profile::Production
        }
    }
}

/// The settings every log call reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Lines below this severity are dropped.
    pub min_level: Severity,
    /// Prefix lines with an RFC 3339 UTC timestamp.
    pub show_timestamp: bool,
    /// Put the severity's glyph before the label.
    pub show_emoji: bool,
    /// Wrap emitted lines in ANSI color. History always stays plain.
    pub use_colors: bool,
    /// Master switch; nothing is rendered, stored or written while false.
    pub enabled: bool,
    /// Upper bound on history length. Zero disables history.
    pub max_history_size: usize,
}

impl ConsoleSettings {
    /// Returns the defaults for `profile`.
    ///
    /// Everything is shown and colored, the minimum level is debug and
    /// history keeps [`DEFAULT_MAX_HISTORY_SIZE`] lines. Output is enabled
    /// only for [`Profile::Development`].
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            min_level: Severity::Debug,
            show_timestamp: true,
            show_emoji: true,
            use_colors: true,
            enabled: profile == Profile::Development,
            max_history_size: DEFAULT_MAX_HISTORY_SIZE,
        }
    }

    /// Loads settings from a JSON object, filling missing keys from the
    /// profile defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a settings object. Unknown keys and
    /// negative sizes are rejected as parse errors.
    pub fn from_json_file(path: impl AsRef<Path>, profile: Profile) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SettingsFile = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = file.merge_into(Self::for_profile(profile));
        debug!("Loaded console settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Applies `DEVCONSOLE_*` overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup`.
    ///
    /// Recognized keys: `DEVCONSOLE_MIN_LEVEL`, `DEVCONSOLE_ENABLED`,
    /// `DEVCONSOLE_COLORS`, `DEVCONSOLE_MAX_HISTORY`.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("DEVCONSOLE_MIN_LEVEL") {
            self.min_level = level.parse()?;
        }
        if let Some(value) = lookup("DEVCONSOLE_ENABLED") {
            self.enabled = parse_flag("DEVCONSOLE_ENABLED", &value)?;
        }
        if let Some(value) = lookup("DEVCONSOLE_COLORS") {
            self.use_colors = parse_flag("DEVCONSOLE_COLORS", &value)?;
        }
        if let Some(value) = lookup("DEVCONSOLE_MAX_HISTORY") {
            self.max_history_size = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "DEVCONSOLE_MAX_HISTORY",
                value: value.clone(),
            })?;
        }
        Ok(self)
    }
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self::for_profile(Profile::from_build())
    }
}

/// On-disk shape of a settings file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    min_level: Option<Severity>,
    show_timestamp: Option<bool>,
    show_emoji: Option<bool>,
    use_colors: Option<bool>,
    enabled: Option<bool>,
    max_history_size: Option<usize>,
}

impl SettingsFile {
    fn merge_into(self, base: ConsoleSettings) -> ConsoleSettings {
        ConsoleSettings {
            min_level: self.min_level.unwrap_or(base.min_level),
            show_timestamp: self.show_timestamp.unwrap_or(base.show_timestamp),
            show_emoji: self.show_emoji.unwrap_or(base.show_emoji),
            use_colors: self.use_colors.unwrap_or(base.use_colors),
            enabled: self.enabled.unwrap_or(base.enabled),
            max_history_size: self.max_history_size.unwrap_or(base.max_history_size),
        }
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
