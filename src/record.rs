//! This module defines the ephemeral record built for a single console line.
use crate::settings::ConsoleSettings;
use crate::severity::Severity;
use chrono::{DateTime, SecondsFormat, Utc};
use crossterm::style::{ResetColor, SetForegroundColor};

/// Everything needed to render one line. Never stored.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    /// Present only when timestamps are shown.
    pub timestamp: Option<DateTime<Utc>>,
    pub severity: Severity,
    /// Present only when glyphs are shown.
    pub glyph: Option<&'static str>,
    /// May be empty.
    pub name: &'a str,
    /// The value already converted to its display form.
    pub value: String,
}

impl<'a> LogRecord<'a> {
    /// Builds a record, dropping the parts the settings switch off.
    pub fn new(
        settings: &ConsoleSettings,
        severity: Severity,
        name: &'a str,
        value: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp: settings.show_timestamp.then_some(now),
            severity,
            glyph: settings.show_emoji.then(|| severity.glyph()),
            name,
            value,
        }
    }

    /// Renders the uncolored line.
    ///
    /// Layout: `[timestamp]` + space + glyph + ` [LABEL] ` + `@name ` + value,
    /// with absent parts omitted entirely.
    pub fn render_plain(&self) -> String {
        let mut line = String::with_capacity(self.value.len() + 48);
        if let Some(timestamp) = self.timestamp {
            line.push('[');
            line.push_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true));
            line.push(']');
        }
        line.push(' ');
        if let Some(glyph) = self.glyph {
            line.push_str(glyph);
        }
        line.push_str(" [");
        line.push_str(self.severity.label());
        line.push_str("] ");
        if !self.name.is_empty() {
            line.push('@');
            line.push_str(self.name);
            line.push(' ');
        }
        line.push_str(&self.value);
        line
    }
}

/// Wraps `plain` in the severity's ANSI foreground color and a reset.
pub fn colorize(plain: &str, severity: Severity) -> String {
    format!("{}{}{}", SetForegroundColor(severity.color()), plain, ResetColor)
}
