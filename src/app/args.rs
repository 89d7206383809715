use clap::{Parser, ValueEnum};
use devconsole::{Profile, Severity};

/// Where the demo sends rendered lines.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Write straight to standard error.
    Stderr,
    /// Forward as `tracing` events.
    Tracing,
    /// Hand off over a channel to a printer task.
    Channel,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "devconsole")]
#[command(about = "Walks through every devconsole call against a chosen sink")]
pub struct AppArgs {
    #[arg(long, help = "JSON settings file")]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value = "development", help = "Build profile for defaults")]
    pub profile: Profile,

    #[arg(
        long,
        help = "Minimum severity to show (debug, verbose, info, success, warning, error, critical)"
    )]
    pub min_level: Option<Severity>,

    #[arg(long, help = "Disable ANSI colors")]
    pub no_color: bool,

    #[arg(long, help = "Hide timestamps")]
    pub no_timestamp: bool,

    #[arg(long, value_enum, default_value = "channel", help = "Output sink")]
    pub sink: SinkKind,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
