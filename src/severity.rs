//! The closed, totally ordered set of console severities.
use crate::error::ConfigError;
use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency of a console line, ordered from least to most urgent.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug = 0,
    Verbose = 1,
    Info = 2,
    Success = 3,
    Warning = 4,
    Error = 5,
    Critical = 6,
}

/// Display data attached to one severity.
struct Style {
    label: &'static str,
    glyph: &'static str,
    color: Color,
    weight: u16,
}

// Indexed by `Severity as usize`.
static STYLES: [Style; 7] = [
    Style {
        label: "DEBUG",
        glyph: "🐛",
        color: Color::DarkGrey,
        weight: 500,
    },
    Style {
        label: "VERBOSE",
        glyph: "📝",
        color: Color::Grey,
        weight: 500,
    },
    Style {
        label: "INFO",
        glyph: "💡",
        color: Color::Blue,
        weight: 800,
    },
    Style {
        label: "SUCCESS",
        glyph: "✅",
        color: Color::Green,
        weight: 800,
    },
    Style {
        label: "WARNING",
        glyph: "⚠️",
        color: Color::Yellow,
        weight: 900,
    },
    Style {
        label: "ERROR",
        glyph: "❌",
        color: Color::Red,
        weight: 1000,
    },
    Style {
        label: "CRITICAL",
        glyph: "🔥",
        color: Color::Magenta,
        weight: 1200,
    },
];

impl Severity {
    /// Every severity, in ascending priority.
    pub const ALL: [Severity; 7] = [
        Severity::Debug,
        Severity::Verbose,
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    fn style(self) -> &'static Style {
        &STYLES[self as usize]
    }

    /// Numeric priority used for filtering.
    pub const fn priority(self) -> u8 {
        self as u8
    }

    /// Upper-case label shown between brackets, e.g. `WARNING`.
    pub fn label(self) -> &'static str {
        self.style().label
    }

    /// Emoji shown before the label when glyphs are enabled.
    pub fn glyph(self) -> &'static str {
        self.style().glyph
    }

    /// Foreground color used when colors are enabled.
    pub fn color(self) -> Color {
        self.style().color
    }

    /// Weight handed to the sink.
    ///
    /// Debug and verbose share a weight, as do info and success; the value
    /// only grows with priority.
    pub fn weight(self) -> u16 {
        self.style().weight
    }

    /// Whether lines of this severity are kept in history without being forced.
    pub const fn is_history_eligible(self) -> bool {
        matches!(self, Severity::Warning | Severity::Error | Severity::Critical)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" | "trace" => Ok(Severity::Debug),
            "verbose" => Ok(Severity::Verbose),
            "info" => Ok(Severity::Info),
            "success" => Ok(Severity::Success),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            _ => Err(ConfigError::UnknownSeverity(s.to_string())),
        }
    }
}
