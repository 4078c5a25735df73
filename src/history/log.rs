use serde::Serialize;

use super::types::HistoryEntry;

/// Maximum retained entries; the oldest is evicted beyond this.
pub const HISTORY_CAPACITY: usize = 5;

/// Newest-first log of recalculation outcomes.
///
/// Entries are immutable once recorded; the log only ever prepends and
/// truncates.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a log with one seeded entry.
    pub fn seeded(entry: HistoryEntry) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    /// Prepend an entry and drop anything past capacity.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
