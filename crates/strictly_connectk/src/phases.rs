//! Play state of a session at its current step.
//!
//! Turn, winner and winning line live in one sum type so they can only change
//! together.

use crate::history::HistoryEntry;
use crate::rules;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// State of play at the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    /// Moves are accepted from `next`.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// The move that produced the current entry completed a line.
    Won {
        /// Owner of the line.
        winner: Player,
        /// Every cell of the winning line(s).
        line: BTreeSet<usize>,
    },
    /// Every cell is filled and nobody won.
    Drawn,
}

impl PlayState {
    /// State for a fresh board: X to move.
    pub fn new() -> Self {
        PlayState::InProgress { next: Player::X }
    }

    /// Derives the state for `entry` viewed at `step`.
    pub fn at(entry: &HistoryEntry, step: usize) -> Self {
        match entry.win() {
            Some(win) => PlayState::Won {
                winner: win.player,
                line: win.line.clone(),
            },
            None if rules::is_draw(entry.board(), step, false) => PlayState::Drawn,
            None => PlayState::InProgress {
                next: Player::for_step(step),
            },
        }
    }

    /// Player to move, if the game is still going.
    pub fn next_player(&self) -> Option<Player> {
        match self {
            PlayState::InProgress { next } => Some(*next),
            _ => None,
        }
    }

    /// The winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            PlayState::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Cells of the winning line, if there is one.
    pub fn winning_line(&self) -> Option<&BTreeSet<usize>> {
        match self {
            PlayState::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_finished(&self) -> bool {
        !matches!(self, PlayState::InProgress { .. })
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, PlayState::Drawn)
    }
}

impl Default for PlayState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayState::InProgress { next } => write!(f, "Next player: {}", next),
            PlayState::Won { winner, .. } => write!(f, "Winner: {}", winner),
            PlayState::Drawn => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(PlayState::new().to_string(), "Next player: X");
        assert_eq!(PlayState::InProgress { next: Player::O }.to_string(), "Next player: O");
        assert_eq!(
            PlayState::Won {
                winner: Player::O,
                line: BTreeSet::new()
            }
            .to_string(),
            "Winner: O"
        );
        assert_eq!(PlayState::Drawn.to_string(), "Draw");
    }

    #[test]
    fn test_initial_entry_is_in_progress() {
        let entry = HistoryEntry::initial(5);
        let state = PlayState::at(&entry, 0);
        assert_eq!(state.next_player(), Some(Player::X));
        assert!(!state.is_finished());
        assert_eq!(state.winning_line(), None);
    }
}
