//! A small, chainable console logger for application code.
//!
//! Each call renders a value with an optional timestamp, glyph, severity
//! label and name, drops it if the console is disabled or the severity is
//! below the configured minimum, keeps the plain line in a bounded history
//! for warnings and above, and hands the (optionally colored) line to a
//! [`Sink`].
//!
//! ```
//! use devconsole::{Console, ConsoleSettings, Profile, sink::MemorySink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let settings = ConsoleSettings::for_profile(Profile::Development);
//! let console = Console::with_settings(settings, sink.clone());
//! console.warning("low disk space", "storage");
//! assert_eq!(console.history().len(), 1);
//! assert_eq!(sink.len(), 1);
//! ```
pub mod console;
pub mod error;
pub mod history;
pub mod logging;
pub mod record;
pub mod settings;
pub mod severity;
pub mod sink;
pub mod store;

pub use console::{status_severity, ApiRequest, ApiResponse, Console};
pub use error::ConfigError;
pub use settings::{ConsoleSettings, Profile};
pub use severity::Severity;
pub use sink::Sink;
pub use store::ConfigStore;
