//! Diagnostics Log Buffer
//!
//! Fixed-capacity, most-recent-first event log for the diagnostics panel.

use std::collections::VecDeque;

pub const LOG_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    /// CSS class suffix for the log row.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub severity: Severity,
    pub message: String,
    /// Opaque payload, already rendered to text.
    pub data: Option<String>,
}

/// Prepend-only deque capped at LOG_CAPACITY entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }

    /// Prepend an entry, evicting the oldest one past capacity.
    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "12:00:00".to_string(),
            severity: Severity::Info,
            message: message.to_string(),
            data: None,
        }
    }

    #[test]
    fn test_most_recent_first() {
        let mut buf = LogBuffer::new();
        buf.push(entry("first"));
        buf.push(entry("second"));
        let messages: Vec<&str> = buf.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut buf = LogBuffer::new();
        for i in 0..LOG_CAPACITY {
            buf.push(entry(&format!("entry {i}")));
        }
        assert_eq!(buf.len(), LOG_CAPACITY);

        buf.push(entry("overflow"));
        assert_eq!(buf.len(), LOG_CAPACITY);
        assert_eq!(buf.iter().next().unwrap().message, "overflow");
        // "entry 0" was the oldest and is gone.
        assert_eq!(buf.iter().last().unwrap().message, "entry 1");
    }

    #[test]
    fn test_clear_then_log_cleared_entry() {
        let mut buf = LogBuffer::new();
        for i in 0..10 {
            buf.push(entry(&format!("entry {i}")));
        }
        buf.clear();
        assert!(buf.is_empty());

        buf.push(entry("Logs cleared"));
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.iter().next().unwrap().severity, Severity::Info);
    }
}
