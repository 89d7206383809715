pub mod args;
mod setup;

pub use args::AppArgs;

use anyhow::Result;
use devconsole::sink::ConsoleLine;
use devconsole::{ApiRequest, ApiResponse, Console, Severity};
use serde_json::json;
use std::time::Duration;
use tokio::sync::mpsc;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp { console, lines } = setup::prepare(args)?;

    let printer = lines.map(|receiver| tokio::spawn(print_lines(receiver)));

    walkthrough(&console);
    print_history(&console);

    // Dropping the console closes the channel so the printer can finish.
    drop(console);
    if let Some(printer) = printer {
        printer.await?;
    }
    Ok(())
}

/// Prints lines handed over by the channel sink until every sender is gone.
async fn print_lines(mut receiver: mpsc::UnboundedReceiver<ConsoleLine>) {
    while let Some(line) = receiver.recv().await {
        println!("{}", line.text);
        if let Some(trace) = line.stack_trace {
            println!("{}", trace);
        }
    }
}

fn walkthrough(console: &Console) {
    console.divider(Some("devconsole"));
    console.debug("cache warmed", "startup");
    console.verbose("3 plugins registered", "startup");
    console.info("ready", "");
    console.success("signed in", "auth");
    console.warning("token expires in 60s", "auth");
    console.error("profile request failed", "api", Some("at fetch_profile (profile.rs:42)"));
    console.critical("render loop stalled", "", None);

    console.api_request(&ApiRequest {
        method: "post".to_string(),
        endpoint: "/api/v1/sessions".to_string(),
        headers: [("Content-Type".to_string(), "application/json".to_string())]
            .into_iter()
            .collect(),
        body: Some(json!({ "user": "ada" })),
    });
    console.api_response(&ApiResponse {
        method: "post".to_string(),
        endpoint: "/api/v1/sessions".to_string(),
        status_code: 401,
        duration: Some(Duration::from_millis(87)),
        data: Some(json!({ "error": "invalid credentials" })),
    });

    console.navigation("/login", "/home");
    console.lifecycle("resumed", None);
    console.state_change("cart_items", 2);

    let doubled = console.logged(21, "answer", Severity::Info) * 2;
    console.logged_debug(vec![doubled], "doubled", Severity::Debug);
}

fn print_history(console: &Console) {
    console.divider(Some("history"));
    let report = console.store().history_report();
    if !report.is_empty() {
        console.emit(report, "", Severity::Info, None, false);
    }
}
