//! A sink that hands lines to another task without blocking.
//!
//! Useful when the real output can block (a slow terminal, a socket): the
//! logging call only pushes onto an unbounded channel and returns.
use super::{ConsoleLine, Sink};
use tokio::sync::mpsc;

/// Sends every line over an unbounded `tokio` channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<ConsoleLine>,
}

impl ChannelSink {
    /// Wraps an existing sender.
    pub fn new(sender: mpsc::UnboundedSender<ConsoleLine>) -> Self {
        Self { sender }
    }

    /// Creates a sink together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ConsoleLine>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl Sink for ChannelSink {
    fn write(&self, line: &str, weight: u16, stack_trace: Option<&str>) {
        // The receiver going away only means nobody is listening any more.
        let _ = self.sender.send(ConsoleLine::new(line, weight, stack_trace));
    }
}
