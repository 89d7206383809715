//! This module sets up `tracing` output for the crate's own diagnostics.
//!
//! Console lines routed through [`crate::sink::TracingSink`] also end up in
//! the subscriber installed here.
use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,devconsole=debug";

/// Installs a formatting subscriber filtered by `RUST_LOG`, or by
/// `default_filter` when the variable is unset or invalid.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
