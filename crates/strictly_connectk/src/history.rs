//! Snapshot history for time travel.
//!
//! Each entry owns an independent board, so jumping backwards never aliases a
//! board that a later entry still uses.

use crate::rules::WinResult;
use crate::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One point in game time: the board after a move, and what it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Board snapshot after the move.
    pub(crate) board: Board,
    /// Coordinates of the move, `"(col, row)"`; empty for the initial entry.
    pub(crate) label: String,
    /// Win detected when the move was played.
    pub(crate) win: Option<WinResult>,
}

impl HistoryEntry {
    /// The starting entry: an empty board with no label.
    pub fn initial(size: usize) -> Self {
        Self {
            board: Board::new(size),
            label: String::new(),
            win: None,
        }
    }

    pub(crate) fn new(board: Board, label: String, win: Option<WinResult>) -> Self {
        Self { board, label, win }
    }

    /// Text shown for this entry in a move list.
    pub fn description(&self, step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}: {}", step, self.label)
        }
    }
}

/// Ordered list of snapshots, never empty.
///
/// Entry 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(crate) entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            entries: vec![HistoryEntry::initial(size)],
        }
    }

    /// Number of entries (moves played plus one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// The most recent entry.
    pub fn last(&self) -> &HistoryEntry {
        // entries always holds the initial snapshot
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in step order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Discards every entry after `step`.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub(crate) fn truncate_after(&mut self, step: usize) {
        let keep = step + 1;
        if keep < self.entries.len() {
            debug!(discarded = self.entries.len() - keep, "Discarding future branch");
            self.entries.truncate(keep);
        }
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn entry_at(board: &Board, cell: usize, player: Player) -> HistoryEntry {
        let next = board.placed(cell, player).unwrap();
        HistoryEntry::new(next, board.label(cell), None)
    }

    #[test]
    fn test_new_history_has_initial_entry() {
        let history = History::new(5);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().label(), "");
        assert_eq!(history.last().board().occupied(), 0);
    }

    #[test]
    fn test_truncate_after_discards_future() {
        let mut history = History::new(5);
        let first = entry_at(history.last().board(), 0, Player::X);
        history.push(first);
        let second = entry_at(history.last().board(), 1, Player::O);
        history.push(second);
        assert_eq!(history.len(), 3);

        history.truncate_after(0);
        assert_eq!(history.len(), 1);

        history.truncate_after(4);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_descriptions() {
        let mut history = History::new(5);
        let entry = entry_at(history.last().board(), 7, Player::X);
        history.push(entry);
        assert_eq!(history.get(0).unwrap().description(0), "Go to game start");
        assert_eq!(history.get(1).unwrap().description(1), "Go to move #1: (3, 2)");
    }
}
