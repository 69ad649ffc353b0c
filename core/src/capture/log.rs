use std::collections::BTreeMap;
use std::sync::Mutex;

use super::{LogCategory, LogEntry};
use crate::sync::lock;

/// Append-only log of everything observed in the current session.
///
/// The event thread is the only writer; exports and displays read copies.
#[derive(Debug, Default)]
pub struct CaptureLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl CaptureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: LogEntry) {
        lock(&self.entries).push(entry);
    }

    pub fn clear(&self) {
        lock(&self.entries).clear();
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }

    /// Copy of every entry in arrival order.
    pub fn entries(&self) -> Vec<LogEntry> {
        lock(&self.entries).clone()
    }

    pub fn count_by_category(&self) -> BTreeMap<LogCategory, usize> {
        let entries = lock(&self.entries);
        let mut counts = BTreeMap::new();
        for entry in entries.iter() {
            *counts.entry(entry.category()).or_insert(0) += 1;
        }
        counts
    }
}
