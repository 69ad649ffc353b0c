use std::fmt;

use observer_types::LiveFeedToggles;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{LogCategory, LogEntry};

/// A rendered log line headed for a live display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveLine {
    pub category: LogCategory,
    pub text: String,
}

impl fmt::Display for LiveLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Mirrors log entries to subscribers, one toggle per category.
///
/// Sending is unbounded and never blocks the event thread. Subscribers whose
/// receiver was dropped are pruned on the next send.
#[derive(Debug, Default)]
pub struct LiveFeed {
    toggles: LiveFeedToggles,
    subscribers: Vec<UnboundedSender<LiveLine>>,
}

impl LiveFeed {
    pub fn new(toggles: LiveFeedToggles) -> Self {
        Self {
            toggles,
            subscribers: Vec::new(),
        }
    }

    pub fn toggles(&self) -> &LiveFeedToggles {
        &self.toggles
    }

    pub fn set_toggles(&mut self, toggles: LiveFeedToggles) {
        self.toggles = toggles;
    }

    pub fn subscribe(&mut self) -> UnboundedReceiver<LiveLine> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns true when the entry was rendered and sent.
    pub fn mirror(&mut self, entry: &LogEntry) -> bool {
        let category = entry.category();
        if self.subscribers.is_empty() || !category.is_enabled(&self.toggles) {
            return false;
        }
        let line = LiveLine {
            category,
            text: entry.marked_line(),
        };
        self.subscribers.retain(|tx| tx.send(line.clone()).is_ok());
        true
    }
}
