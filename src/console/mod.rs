//! The log pipeline every console call goes through.
//!
//! A [`Console`] is an explicitly constructed handle: the host builds one
//! [`ConfigStore`] and one [`Sink`] at startup and clones the console into
//! whatever needs to log. Clones share the same settings and history.
mod helpers;
mod logged;

pub use helpers::{status_severity, ApiRequest, ApiResponse, DIVIDER_WIDTH};

use crate::record::{colorize, LogRecord};
use crate::settings::ConsoleSettings;
use crate::severity::Severity;
use crate::sink::Sink;
use crate::store::ConfigStore;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Cheaply clonable handle onto the shared console.
#[derive(Clone)]
pub struct Console {
    store: Arc<ConfigStore>,
    sink: Arc<dyn Sink>,
    clock: fn() -> DateTime<Utc>,
}

impl Console {
    /// Creates a console over an existing store and sink.
    pub fn new(store: Arc<ConfigStore>, sink: Arc<dyn Sink>) -> Self {
        Self {
            store,
            sink,
            clock: Utc::now,
        }
    }

    /// Creates a console with a fresh store built from `settings`.
    pub fn with_settings(settings: ConsoleSettings, sink: Arc<dyn Sink>) -> Self {
        Self::new(Arc::new(ConfigStore::new(settings)), sink)
    }

    /// Replaces the time source used for timestamps.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// The shared settings and history.
    pub fn store(&self) -> &Arc<ConfigStore> {
        &self.store
    }

    /// Shorthand for `self.store().read_history()`.
    pub fn history(&self) -> Vec<String> {
        self.store.read_history()
    }

    /// Renders `value` and writes it to the sink.
    ///
    /// Nothing happens while the console is disabled or when `severity` is
    /// below the minimum level. The plain line goes to history when
    /// `force_history` is set or the severity is warning or above.
    ///
    /// # Arguments
    ///
    /// * `value` - Anything with a display form.
    /// * `name` - Optional key shown as `@name`; pass `""` for none.
    /// * `severity` - Severity used for filtering, labeling and coloring.
    /// * `stack_trace` - Handed to the sink alongside the line.
    /// * `force_history` - Record the line in history regardless of severity.
    pub fn emit(
        &self,
        value: impl fmt::Display,
        name: &str,
        severity: Severity,
        stack_trace: Option<&str>,
        force_history: bool,
    ) {
        let settings = self.store.settings();
        if !settings.enabled || severity < settings.min_level {
            return;
        }

        let record = LogRecord::new(&settings, severity, name, value.to_string(), (self.clock)());
        let plain = record.render_plain();

        let emitted = if settings.use_colors {
            colorize(&plain, severity)
        } else {
            plain.clone()
        };

        if force_history || severity.is_history_eligible() {
            self.store.append_to_history(plain);
        }

        self.sink.write(&emitted, severity.weight(), stack_trace);
    }

    /// Logs `value` at debug level.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to render.
    /// * `name` - Optional key shown as `@name`; pass `""` for none.
    pub fn debug(&self, value: impl fmt::Display, name: &str) {
        self.emit(value, name, Severity::Debug, None, false);
    }

    /// Logs `value` at verbose level.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to render.
    /// * `name` - Optional key shown as `@name`; pass `""` for none.
    pub fn verbose(&self, value: impl fmt::Display, name: &str) {
        self.emit(value, name, Severity::Verbose, None, false);
    }

    /// Logs `value` at info level.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to render.
    /// * `name` - Optional key shown as `@name`; pass `""` for none.
    pub fn info(&self, value: impl fmt::Display, name: &str) {
        self.emit(value, name, Severity::Info, None, false);
    }

    /// Logs `value` at success level.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to render.
    /// * `name` - Optional key shown as `@name`; pass `""` for none.
    pub fn success(&self, value: impl fmt::Display, name: &str) {
        self.emit(value, name, Severity::Success, None, false);
    }

    /// Logs `value` at warning level and always records it in history.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to render.
    /// * `name` - Optional key shown as `@name`; pass `""` for none.
    pub fn warning(&self, value: impl fmt::Display, name: &str) {
        self.emit(value, name, Severity::Warning, None, true);
    }

    /// Logs `value` at error level and always records it in history.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to render.
    /// * `name` - Optional key shown as `@name`; pass `""` for none.
    /// * `stack_trace` - Passed to the sink untouched; never rendered into
    ///   the line or history.
    pub fn error(&self, value: impl fmt::Display, name: &str, stack_trace: Option<&str>) {
        self.emit(value, name, Severity::Error, stack_trace, true);
    }

    /// Logs `value` at critical level and always records it in history.
    ///
    /// Takes the same arguments as [`Console::error`].
    pub fn critical(&self, value: impl fmt::Display, name: &str, stack_trace: Option<&str>) {
        self.emit(value, name, Severity::Critical, stack_trace, true);
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Profile;
    use crate::sink::MemorySink;

    fn plain_console() -> (Console, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let settings = ConsoleSettings {
            show_timestamp: false,
            show_emoji: false,
            use_colors: false,
            ..ConsoleSettings::for_profile(Profile::Development)
        };
        (Console::with_settings(settings, sink.clone()), sink)
    }

    #[test]
    fn below_min_level_is_dropped() {
        let (console, sink) = plain_console();
        console.store().set_min_level(Severity::Critical);

        for severity in Severity::ALL.into_iter().filter(|s| *s < Severity::Critical) {
            console.emit("x", "", severity, None, true);
        }

        assert!(sink.is_empty());
        assert!(console.history().is_empty());
    }

    #[test]
    fn disabled_console_does_nothing() {
        let (console, sink) = plain_console();
        console.store().set_enabled(false);

        for severity in Severity::ALL {
            console.emit("x", "", severity, None, true);
        }

        assert!(sink.is_empty());
        assert!(console.history().is_empty());
    }

    #[test]
    fn low_severities_skip_history_unless_forced() {
        let (console, sink) = plain_console();
        console.info("skipped", "");
        console.success("skipped", "");
        console.emit("kept", "", Severity::Debug, None, true);

        assert_eq!(sink.len(), 3);
        assert_eq!(console.history(), [" [DEBUG] kept"]);
    }

    #[test]
    fn stack_trace_and_weight_reach_the_sink() {
        let (console, sink) = plain_console();
        console.error("boom", "", Some("at frame 0"));

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, " [ERROR] boom");
        assert_eq!(lines[0].weight, Severity::Error.weight());
        assert_eq!(lines[0].stack_trace.as_deref(), Some("at frame 0"));
    }

    #[test]
    fn colored_output_keeps_plain_history() {
        let (console, sink) = plain_console();
        console.store().set_use_colors(true);
        console.warning("careful", "disk");

        let emitted = &sink.texts()[0];
        assert!(emitted.contains('\x1b'));
        assert_eq!(emitted, &colorize(" [WARNING] @disk careful", Severity::Warning));
        assert_eq!(console.history(), [" [WARNING] @disk careful"]);
    }

    #[test]
    fn timestamp_comes_from_clock() {
        use chrono::TimeZone;

        fn fixed() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
        }

        let (console, sink) = plain_console();
        let console = console.with_clock(fixed);
        console.store().set_show_timestamp(true);
        console.info("tick", "");

        assert_eq!(sink.texts(), ["[2025-01-02T03:04:05.000Z]  [INFO] tick"]);
    }
}
