//! The entry point for the devconsole demo.
mod app;

use anyhow::Result;

/// Runs the demo walkthrough with the sink and settings chosen on the
/// command line.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded or the printer task
/// fails.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
