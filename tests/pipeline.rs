use devconsole::record::colorize;
use devconsole::sink::MemorySink;
use devconsole::{Console, ConsoleSettings, Profile, Severity};
use std::sync::Arc;

fn console_with(settings: ConsoleSettings) -> (Console, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (Console::with_settings(settings, sink.clone()), sink)
}

fn quiet_settings() -> ConsoleSettings {
    ConsoleSettings {
        show_timestamp: false,
        show_emoji: false,
        use_colors: false,
        ..ConsoleSettings::for_profile(Profile::Development)
    }
}

fn call_wrapper(console: &Console, severity: Severity, value: &str) {
    match severity {
        Severity::Debug => console.debug(value, ""),
        Severity::Verbose => console.verbose(value, ""),
        Severity::Info => console.info(value, ""),
        Severity::Success => console.success(value, ""),
        Severity::Warning => console.warning(value, ""),
        Severity::Error => console.error(value, "", None),
        Severity::Critical => console.critical(value, "", None),
    }
}

#[test]
fn wrappers_below_min_level_are_silent() {
    for min in Severity::ALL {
        let (console, sink) = console_with(quiet_settings());
        console.store().set_min_level(min);

        for severity in Severity::ALL {
            call_wrapper(&console, severity, "x");
        }

        let expected = Severity::ALL.iter().filter(|s| **s >= min).count();
        assert_eq!(sink.len(), expected, "min level {}", min);
        let expected_history = Severity::ALL
            .iter()
            .filter(|s| **s >= min && s.is_history_eligible())
            .count();
        assert_eq!(console.history().len(), expected_history, "min level {}", min);
    }
}

#[test]
fn disabled_console_ignores_every_wrapper() {
    let (console, sink) = console_with(ConsoleSettings::for_profile(Profile::Production));

    for severity in Severity::ALL {
        call_wrapper(&console, severity, "x");
    }
    console.navigation("/a", "/b");
    console.divider(None);

    assert!(sink.is_empty());
    assert!(console.history().is_empty());
}

#[test]
fn history_never_holds_color_codes() {
    let (console, sink) = console_with(ConsoleSettings::for_profile(Profile::Development));

    for severity in Severity::ALL {
        console.emit("value", "key", severity, None, true);
    }

    assert!(sink.texts().iter().all(|line| line.contains('\x1b')));
    let history = console.history();
    assert_eq!(history.len(), Severity::ALL.len());
    assert!(history.iter().all(|line| !line.contains('\x1b')));
}

#[test]
fn history_keeps_last_entries_in_order() {
    let (console, _sink) = console_with(quiet_settings());
    console.store().set_max_history_size(3);

    for i in 1..=4 {
        console.warning(i, "");
    }

    assert_eq!(
        console.history(),
        [" [WARNING] 2", " [WARNING] 3", " [WARNING] 4"]
    );
}

#[test]
fn clear_then_read_is_empty() {
    let (console, _sink) = console_with(quiet_settings());
    console.error("x", "", None);
    console.store().clear_history();
    assert!(console.store().read_history().is_empty());
}

#[test]
fn all_toggles_off_rendering() {
    let (console, sink) = console_with(quiet_settings());
    console.info("value", "");
    assert_eq!(sink.texts(), [" [INFO] value"]);
}

#[test]
fn warning_threshold_scenario() {
    let (console, sink) = console_with(ConsoleSettings {
        show_timestamp: false,
        show_emoji: false,
        ..ConsoleSettings::for_profile(Profile::Development)
    });
    console.store().set_min_level(Severity::Warning);

    console.info("x", "");
    assert!(sink.is_empty());
    assert!(console.history().is_empty());

    console.error("y", "", None);
    assert_eq!(console.history(), [" [ERROR] y"]);
    assert_eq!(sink.texts(), [colorize(" [ERROR] y", Severity::Error)]);
}

#[test]
fn default_rendering_has_timestamp_and_glyph() {
    let (console, _sink) = console_with(ConsoleSettings::for_profile(Profile::Development));
    console.error("y", "", None);

    let line = &console.history()[0];
    let (stamp, rest) = line.split_once("] ").unwrap();
    let stamp = stamp.strip_prefix('[').unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    assert!(stamp.ends_with('Z'));
    assert_eq!(rest, "❌ [ERROR] y");
}

#[test]
fn reading_history_twice_is_stable() {
    let (console, _sink) = console_with(quiet_settings());
    console.warning("a", "");
    console.critical("b", "", None);
    assert_eq!(console.history(), console.history());
}

#[test]
fn clones_share_settings_and_history() {
    let (console, sink) = console_with(quiet_settings());
    let other = console.clone();

    other.store().set_min_level(Severity::Error);
    console.warning("dropped", "");
    other.error("kept", "", None);

    assert_eq!(sink.len(), 1);
    assert_eq!(console.history(), [" [ERROR] kept"]);
}
