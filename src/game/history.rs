//! Move history: one board snapshot per step.

use super::{Board, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A board snapshot and the move that produced it.
///
/// The origin entry has no move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Cell that was played to reach this board.
    position: Option<Position>,
}

impl HistoryEntry {
    /// The entry every history starts with: empty board, no move.
    pub fn origin() -> Self {
        Self::new(Board::new(), None)
    }
}

/// Ordered board snapshots from game start to the latest move.
///
/// Never empty; entry 0 is always [`HistoryEntry::origin`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the origin entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::origin()],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries (always at least 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the most recent entry.
    pub fn latest_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// Entry at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All entries in order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Keeps entries `0..=step`, appends `entry`, and returns its step.
    ///
    /// Anything after `step` is discarded.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub(crate) fn branch(&mut self, step: usize, entry: HistoryEntry) -> usize {
        self.entries.truncate(step + 1);
        self.entries.push(entry);
        self.latest_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
