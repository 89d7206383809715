//! Errors raised at the configuration boundary.
//!
//! Logging calls themselves never fail; only loading settings from a file or
//! from the environment can be rejected.
use std::path::PathBuf;
use thiserror::Error;

/// An error produced while building [`crate::ConsoleSettings`] from outside input.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read settings file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not a valid settings object.
    #[error("invalid settings file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A severity name did not match any known severity.
    #[error("unknown severity '{0}' (expected debug/verbose/info/success/warning/error/critical)")]
    UnknownSeverity(String),

    /// An override carried a value that cannot be used for its key.
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}
