//! Forwards console lines into the `tracing` ecosystem.
use super::Sink;
use tracing::Level;

/// Re-emits each line as a `tracing` event under the `devconsole` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Maps a sink weight onto a `tracing` level.
    pub fn level_for(weight: u16) -> Level {
        match weight {
            w if w >= 1000 => Level::ERROR,
            w if w >= 900 => Level::WARN,
            w if w >= 800 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

impl Sink for TracingSink {
    fn write(&self, line: &str, weight: u16, stack_trace: Option<&str>) {
        // `event!` needs a constant level, hence one branch per level.
        let level = Self::level_for(weight);
        if level == Level::ERROR {
            tracing::error!(target: "devconsole", weight, stack_trace, "{}", line);
        } else if level == Level::WARN {
            tracing::warn!(target: "devconsole", weight, stack_trace, "{}", line);
        } else if level == Level::INFO {
            tracing::info!(target: "devconsole", weight, stack_trace, "{}", line);
        } else {
            tracing::debug!(target: "devconsole", weight, stack_trace, "{}", line);
        }
    }
}
