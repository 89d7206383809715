//! This module provides the bounded buffer that keeps past console lines.
//!
//! Only plain (uncolored) lines are stored so the history can be dumped
//! into crash reports as-is.
use std::collections::VecDeque;

/// An insertion-ordered buffer of lines with front eviction.
///
/// The bound is passed in by the caller on every mutation so it always
/// matches the current settings.
#[derive(Debug, Default, Clone)]
pub struct History {
    /// The retained lines, oldest first.
    entries: VecDeque<String>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry`, then evicts from the front until at most `max_size`
    /// lines remain.
    pub fn push(&mut self, entry: String, max_size: usize) {
        self.entries.push_back(entry);
        self.truncate_front(max_size);
    }

    /// Evicts the oldest lines until at most `max_size` remain.
    pub fn truncate_front(&mut self, max_size: usize) {
        while self.entries.len() > max_size {
            self.entries.pop_front();
        }
    }

    /// Returns an owned copy of the retained lines, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Joins the retained lines with newlines.
    pub fn report(&self) -> String {
        self.entries
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
