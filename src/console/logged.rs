//! Inline logging: log a value and hand it straight back.
use super::Console;
use crate::severity::Severity;
use std::fmt;

impl Console {
    /// Logs `value` at `severity` and returns it unchanged, so it can sit in
    /// the middle of an expression.
    ///
    /// ```
    /// # use devconsole::{Console, ConsoleSettings, Profile, Severity, sink::MemorySink};
    /// # use std::sync::Arc;
    /// let console = Console::with_settings(
    ///     ConsoleSettings::for_profile(Profile::Development),
    ///     Arc::new(MemorySink::new()),
    /// );
    /// let total = console.logged(2 + 3, "total", Severity::Debug) * 2;
    /// assert_eq!(total, 10);
    /// ```
    pub fn logged<T: fmt::Display>(&self, value: T, name: &str, severity: Severity) -> T {
        self.emit(&value, name, severity, None, false);
        value
    }

    /// Like [`Console::logged`], for values that only implement `Debug`.
    pub fn logged_debug<T: fmt::Debug>(&self, value: T, name: &str, severity: Severity) -> T {
        self.emit(format_args!("{:?}", value), name, severity, None, false);
        value
    }
}

#[cfg(test)]
mod tests {
    use crate::settings::{ConsoleSettings, Profile};
    use crate::sink::MemorySink;
    use crate::{Console, Severity};
    use std::sync::Arc;

    fn console() -> (Console, Arc<MemorySink>) {
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
    fn returns_value_and_logs_it() {
        let (console, sink) = console();
        let name = console.logged(String::from("ada"), "user", Severity::Info);
        assert_eq!(name, "ada");
        assert_eq!(sink.texts(), [" [INFO] @user ada"]);
    }

    #[test]
    fn debug_values_use_debug_form() {
        let (console, sink) = console();
        let items = console.logged_debug(vec![1, 2], "items", Severity::Verbose);
        assert_eq!(items, vec![1, 2]);
        assert_eq!(sink.texts(), [" [VERBOSE] @items [1, 2]"]);
    }

    #[test]
    fn filtered_values_still_pass_through() {
        let (console, sink) = console();
        console.store().set_enabled(false);
        assert_eq!(console.logged(7, "n", Severity::Critical), 7);
        assert!(sink.is_empty());
    }
}
