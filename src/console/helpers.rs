//! Structured helpers layered over [`Console::emit`].
use super::Console;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Column width of a divider line.
pub const DIVIDER_WIDTH: usize = 60;

const RULE: char = '═';

/// An outgoing HTTP request worth logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: String,
    pub endpoint: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<Value>,
}

/// A received HTTP response worth logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub method: String,
    pub endpoint: String,
    pub status_code: u16,
    #[serde(default)]
    pub duration: Option<Duration>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Picks the severity of a response status line.
///
/// 2xx is a success, 4xx and 5xx are errors, anything else is informational.
pub fn status_severity(status_code: u16) -> Severity {
    match status_code {
        200..=299 => Severity::Success,
        400.. => Severity::Error,
        _ => Severity::Info,
    }
}

fn divider_line(title: Option<&str>) -> String {
    let Some(title) = title else {
        return RULE.to_string().repeat(DIVIDER_WIDTH);
    };

    let text = format!(" {} ", title);
    let remaining = DIVIDER_WIDTH.saturating_sub(text.width());
    let left = (remaining / 2).max(3);
    let right = (remaining - remaining / 2).max(3);

    let mut line = String::with_capacity(text.len() + (left + right) * RULE.len_utf8());
    line.extend(std::iter::repeat(RULE).take(left));
    line.push_str(&text);
    line.extend(std::iter::repeat(RULE).take(right));
    line
}

impl Console {
    /// Writes a horizontal rule, with `title` centered in it if given.
    ///
    /// Dividers ignore the minimum level and never enter history; only
    /// disabling the console suppresses them.
    pub fn divider(&self, title: Option<&str>) {
        if !self.store.settings().enabled {
            return;
        }
        self.sink
            .write(&divider_line(title), Severity::Info.weight(), None);
    }

    /// Logs an outgoing request: a divider, the method and endpoint, then
    /// headers and body at verbose level when present.
    pub fn api_request(&self, request: &ApiRequest) {
        self.divider(Some("API REQUEST"));
        self.info(
            format_args!("{} {}", request.method.to_uppercase(), request.endpoint),
            "API",
        );
        if !request.headers.is_empty() {
            self.verbose(format_args!("Headers: {}", JsonMap(&request.headers)), "API");
        }
        if let Some(body) = &request.body {
            self.verbose(format_args!("Body: {}", body), "API");
        }
    }

    /// Logs a received response. The status line's severity follows
    /// [`status_severity`].
    pub fn api_response(&self, response: &ApiResponse) {
        self.divider(Some("API RESPONSE"));
        self.info(
            format_args!("{} {}", response.method.to_uppercase(), response.endpoint),
            "API",
        );
        self.emit(
            format_args!("Status: {}", response.status_code),
            "API",
            status_severity(response.status_code),
            None,
            false,
        );
        if let Some(duration) = response.duration {
            self.verbose(format_args!("Duration: {}ms", duration.as_millis()), "API");
        }
        if let Some(data) = &response.data {
            self.verbose(format_args!("Data: {}", data), "API");
        }
    }

    /// Logs a route change as `from → to`.
    pub fn navigation(&self, from: &str, to: &str) {
        self.info(format_args!("{} → {}", from, to), "Navigation");
    }

    /// Logs a lifecycle event; `details` replaces the event name when given.
    pub fn lifecycle(&self, event: &str, details: Option<&str>) {
        self.verbose(details.unwrap_or(event), "Lifecycle");
    }

    /// Logs a new value for a piece of named state.
    pub fn state_change(&self, state_name: &str, value: impl fmt::Display) {
        self.debug(value, &format!("State: {}", state_name));
    }
}

/// Renders a header map as a compact JSON object.
struct JsonMap<'a>(&'a BTreeMap<String, String>);

impl fmt::Display for JsonMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self.0).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
