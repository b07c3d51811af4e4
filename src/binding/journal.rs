//! Replay journal of dispatched actions.
//!
//! Every dispatched action can be recorded together with the snapshot it
//! produced. Because snapshots are immutable and share structure, keeping
//! them around is cheap, and stepping through `snapshots()` replays the
//! session exactly as the UI saw it.

use crate::core::{ActionKind, Snapshot, Stack};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Record of a single dispatched action.
#[derive(Clone, Debug, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct JournalEntry<T> {
    /// Position in the journal, starting at 0
    pub sequence: u64,
    /// Which action was dispatched
    pub kind: ActionKind,
    /// When the action was dispatched
    pub timestamp: DateTime<Utc>,
    /// False when the action was a no-op (undo/redo at the boundary)
    pub changed: bool,
    /// Snapshot current after the action
    pub snapshot: Snapshot<T>,
}

/// Ordered journal of dispatched actions.
///
/// The journal is immutable - `record` returns a new journal with the
/// entry appended and leaves the original as it was.
///
/// # Example
///
/// ```rust
/// use rewind::binding::Journal;
/// use rewind::core::{ActionKind, HistoryState};
///
/// let journal = Journal::new();
/// let snapshot = HistoryState::snapshot(1);
///
/// let recorded = journal.record(ActionKind::Set, true, &snapshot);
/// assert_eq!(recorded.len(), 1);
/// assert!(journal.is_empty()); // Original unchanged
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct Journal<T> {
    entries: Stack<JournalEntry<T>>,
}

impl<T> Default for Journal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Journal<T> {
    pub fn new() -> Self {
        Self {
            entries: Stack::new(),
        }
    }

    /// Record a dispatched action, returning a new journal.
    #[must_use]
    pub fn record(&self, kind: ActionKind, changed: bool, snapshot: &Snapshot<T>) -> Self {
        let entry = JournalEntry {
            sequence: self.entries.len() as u64,
            kind,
            timestamp: Utc::now(),
            changed,
            snapshot: Arc::clone(snapshot),
        };
        Self {
            entries: self.entries.push(entry),
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<&JournalEntry<T>> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.reverse();
        entries
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&JournalEntry<T>> {
        self.entries.peek_top()
    }

    /// The snapshot after each entry, oldest first.
    ///
    /// Entries for no-op actions repeat the previous snapshot.
    pub fn snapshots(&self) -> Vec<&Snapshot<T>> {
        self.entries().into_iter().map(|e| &e.snapshot).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time between the first and last entry, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let last = self.entries.peek_top()?;
        let first = self.entries.iter().last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
