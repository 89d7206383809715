use super::{ConsoleLine, Sink};
use std::sync::{Mutex, PoisonError};

/// Keeps every written line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<ConsoleLine>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far.
    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns only the rendered text of each line.
    pub fn texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|line| line.text).collect()
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets every captured line.
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, line: &str, weight: u16, stack_trace: Option<&str>) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ConsoleLine::new(line, weight, stack_trace));
    }
}
