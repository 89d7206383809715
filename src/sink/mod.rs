//! Output sinks that receive fully rendered console lines.
//!
//! A sink never reports failure back to the caller: each implementation
//! swallows its own errors so a broken output cannot disturb the code that
//! is logging.
pub mod channel;
pub mod memory;
pub mod stderr;
pub mod trace;

pub use channel::ChannelSink;
pub use memory::MemorySink;
pub use stderr::StderrSink;
pub use trace::TracingSink;

/// Destination for rendered console lines.
pub trait Sink: Send + Sync {
    /// Writes one line.
    ///
    /// `weight` grows with severity and is meant for sink-side filtering or
    /// highlighting only.
    fn write(&self, line: &str, weight: u16, stack_trace: Option<&str>);
}

/// An owned copy of one sink write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub text: String,
    pub weight: u16,
    pub stack_trace: Option<String>,
}

impl ConsoleLine {
    pub fn new(line: &str, weight: u16, stack_trace: Option<&str>) -> Self {
        Self {
            text: line.to_string(),
            weight,
            stack_trace: stack_trace.map(str::to_string),
        }
    }
}
