//! The shared configuration store.
//!
//! One `ConfigStore` is created by the host and shared by every
//! [`crate::Console`] handle. Settings and history sit behind a single mutex
//! so an append and its eviction are never observed half-done.
use crate::history::History;
use crate::settings::ConsoleSettings;
use crate::severity::Severity;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Debug)]
struct StoreState {
    settings: ConsoleSettings,
    history: History,
}

/// Holds the console settings and the history buffer.
#[derive(Debug)]
pub struct ConfigStore {
    state: Mutex<StoreState>,
}

impl ConfigStore {
    /// Creates a store with `settings` and an empty history.
    pub fn new(settings: ConsoleSettings) -> Self {
        Self {
            state: Mutex::new(StoreState {
                settings,
                history: History::new(),
            }),
        }
    }

    // A panic while holding the lock cannot leave the state inconsistent, so
    // poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the current settings.
    pub fn settings(&self) -> ConsoleSettings {
        self.lock().settings
    }

    /// Replaces every setting at once, trimming history to the new bound.
    pub fn replace(&self, settings: ConsoleSettings) {
        let mut state = self.lock();
        state.settings = settings;
        state.history.truncate_front(settings.max_history_size);
        debug!("Console settings replaced: {:?}", settings);
    }

    /// Sets the minimum severity; lower lines are dropped from then on.
    pub fn set_min_level(&self, level: Severity) {
        self.lock().settings.min_level = level;
        debug!("Console minimum level set to {}", level);
    }

    /// Shows or hides the timestamp prefix.
    pub fn set_show_timestamp(&self, show: bool) {
        self.lock().settings.show_timestamp = show;
    }

    /// Shows or hides the severity glyph.
    pub fn set_show_emoji(&self, show: bool) {
        self.lock().settings.show_emoji = show;
    }

    /// Turns ANSI coloring of emitted lines on or off.
    pub fn set_use_colors(&self, use_colors: bool) {
        self.lock().settings.use_colors = use_colors;
    }

    /// Turns all console output on or off.
    ///
    /// While disabled, log calls return before rendering anything and
    /// history is left untouched.
    pub fn set_enabled(&self, enabled: bool) {
        self.lock().settings.enabled = enabled;
        debug!("Console output {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Sets the history bound. Lines beyond it are evicted immediately.
    pub fn set_max_history_size(&self, max_size: usize) {
        let mut state = self.lock();
        state.settings.max_history_size = max_size;
        state.history.truncate_front(max_size);
    }

    /// Appends a line, evicting the oldest lines past the bound.
    pub fn append_to_history(&self, entry: impl Into<String>) {
        let mut state = self.lock();
        let max_size = state.settings.max_history_size;
        state.history.push(entry.into(), max_size);
    }

    /// Returns a snapshot of the history, oldest first.
    pub fn read_history(&self) -> Vec<String> {
        self.lock().history.snapshot()
    }

    /// Removes every history line.
    pub fn clear_history(&self) {
        self.lock().history.clear();
    }

    /// Number of lines currently in history.
    pub fn history_len(&self) -> usize {
        self.lock().history.len()
    }

    /// The whole history as one newline-separated block.
    pub fn history_report(&self) -> String {
        self.lock().history.report()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(ConsoleSettings::default())
    }
}
