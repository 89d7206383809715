//! This module turns command-line arguments into a ready console.
use super::args::{AppArgs, SinkKind};
use anyhow::{Context, Result};
use devconsole::sink::{ChannelSink, ConsoleLine, StderrSink, TracingSink};
use devconsole::{Console, ConsoleSettings, Sink};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Everything the demo needs to run.
pub struct PreparedApp {
    pub console: Console,
    /// Receiving end of the channel sink, when that sink was chosen.
    pub lines: Option<mpsc::UnboundedReceiver<ConsoleLine>>,
}

/// Prepares the console.
///
/// Settings are resolved in order: profile defaults, settings file,
/// `DEVCONSOLE_*` environment variables, then command-line flags.
///
/// # Errors
///
/// Returns an error if the settings file or an environment override is
/// invalid.
pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    devconsole::logging::init(devconsole::logging::DEFAULT_FILTER);

    let settings = resolve_settings(&args)?;
    debug!("Resolved console settings: {:?}", settings);

    let (sink, lines) = match args.sink {
        SinkKind::Stderr => (Arc::new(StderrSink) as Arc<dyn Sink>, None),
        SinkKind::Tracing => (Arc::new(TracingSink) as Arc<dyn Sink>, None),
        SinkKind::Channel => {
            let (sink, receiver) = ChannelSink::channel();
            (Arc::new(sink) as Arc<dyn Sink>, Some(receiver))
        }
    };

    Ok(PreparedApp {
        console: Console::with_settings(settings, sink),
        lines,
    })
}

fn resolve_settings(args: &AppArgs) -> Result<ConsoleSettings> {
    let mut settings = match &args.config {
        Some(path) => ConsoleSettings::from_json_file(path, args.profile)
            .with_context(|| format!("Could not load console settings from '{}'", path))?,
        None => ConsoleSettings::for_profile(args.profile),
    };

    settings = settings
        .apply_env()
        .context("Invalid DEVCONSOLE_* environment override")?;

    if let Some(level) = args.min_level {
        settings.min_level = level;
    }
    if args.no_color {
        settings.use_colors = false;
    }
    if args.no_timestamp {
        settings.show_timestamp = false;
    }
    Ok(settings)
}
