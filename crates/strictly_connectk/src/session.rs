//! Game session: history, current step and play state.
//!
//! The session is the single mutable root of a game. All changes go through
//! the operations below, each of which either completes or leaves the session
//! untouched.

use crate::action::Move;
use crate::contracts::{Contract, MoveContract};
use crate::error::{MoveError, SessionError};
use crate::history::{History, HistoryEntry};
use crate::phases::PlayState;
use crate::rules;
use crate::types::{Board, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Player};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// One row of a move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListEntry {
    /// History step this row jumps to.
    pub step: usize,
    /// `"Go to game start"` or `"Go to move #k: (col, row)"`.
    pub description: String,
    /// Whether this step was the last one played or jumped to.
    pub selected: bool,
}

/// A connect-K game with time travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(crate) size: usize,
    pub(crate) history: History,
    pub(crate) current_step: usize,
    pub(crate) state: PlayState,
    pub(crate) sort_ascending: bool,
    pub(crate) selected_step: Option<usize>,
}

impl GameSession {
    /// Creates a session with an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidSize`] if `size` is below
    /// [`MIN_BOARD_SIZE`] or above [`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, SessionError> {
        validate_size(size)?;
        info!(size, "Creating new game session");
        Ok(Self::fresh(size, true))
    }

    fn fresh(size: usize, sort_ascending: bool) -> Self {
        Self {
            size,
            history: History::new(size),
            current_step: 0,
            state: PlayState::new(),
            sort_ascending,
            selected_step: None,
        }
    }

    /// Rebuilds a session by playing `cells` in order from an empty board.
    ///
    /// # Errors
    ///
    /// Fails on an invalid size or on the first move that would be rejected.
    #[instrument]
    pub fn replay(size: usize, cells: &[usize]) -> Result<Self, SessionError> {
        let mut session = Self::new(size)?;
        for &cell in cells {
            session.apply_move(cell)?;
        }
        Ok(session)
    }

    /// Plays the current player's mark at `cell`.
    ///
    /// Any entries after the current step are discarded first, so playing
    /// from an earlier step replaces the previously explored future.
    ///
    /// # Errors
    ///
    /// Rejects moves once the game at the current step is finished, on
    /// occupied cells, and on cells off the board. A rejected move changes
    /// nothing.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, cell: usize) -> Result<Move, MoveError> {
        if let Err(e) = MoveContract::pre(self, &cell) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let Some(player) = self.state.next_player() else {
            return Err(MoveError::GameOver);
        };
        let board = self.current_entry().board();
        let next = board.placed(cell, player)?;
        let win = rules::detect_win(&next, cell);
        let label = board.label(cell);

        self.history.truncate_after(self.current_step);
        self.history.push(HistoryEntry::new(next, label, win));
        self.current_step = self.history.len() - 1;
        self.selected_step = Some(self.current_step);
        self.state = PlayState::at(self.history.last(), self.current_step);
        debug!(%player, cell, state = %self.state, "Move applied");

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Postcondition failed, restoring previous state");
            *self = before;
            return Err(e);
        }

        Ok(Move::new(player, cell))
    }

    /// Makes `step` the current step without touching history.
    ///
    /// Turn, winner and winning line are re-derived from the entry at `step`:
    /// jumping to a winning move shows that win, jumping earlier resumes play.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::OutOfRangeStep`] if `step` has no entry.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), SessionError> {
        let Some(entry) = self.history.get(step) else {
            warn!(step, "Step out of range");
            return Err(SessionError::OutOfRangeStep {
                step,
                len: self.history.len(),
            });
        };
        self.state = PlayState::at(entry, step);
        self.current_step = step;
        self.selected_step = Some(step);
        debug!(step, state = %self.state, "Jumped");
        Ok(())
    }

    /// Starts over on an empty `new_size`×`new_size` board.
    ///
    /// The sort order is kept.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidSize`] and leaves the session unchanged
    /// if `new_size` is outside [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    #[instrument(skip(self), fields(size = self.size))]
    pub fn resize(&mut self, new_size: usize) -> Result<(), SessionError> {
        if let Err(e) = validate_size(new_size) {
            warn!(new_size, "Resize rejected");
            return Err(e);
        }
        info!(new_size, "Resizing board");
        *self = Self::fresh(new_size, self.sort_ascending);
        Ok(())
    }

    /// Starts over with the same size and sort order.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn rematch(&mut self) {
        info!("Starting rematch");
        *self = Self::fresh(self.size, self.sort_ascending);
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_ascending = !self.sort_ascending;
        debug!(ascending = self.sort_ascending, "Sort order toggled");
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Full history, including entries after the current step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Step being viewed and played from.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Entry at the current step.
    pub fn current_entry(&self) -> &HistoryEntry {
        // current_step always indexes an existing entry
        &self.history.entries()[self.current_step]
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.current_entry().board()
    }

    /// State of play at the current step.
    pub fn status(&self) -> &PlayState {
        &self.state
    }

    /// Player to move, if the game at the current step is still going.
    pub fn next_player(&self) -> Option<Player> {
        self.state.next_player()
    }

    /// Winner at the current step.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Winning line at the current step.
    pub fn winning_line(&self) -> Option<&BTreeSet<usize>> {
        self.state.winning_line()
    }

    /// Whether `cell` should be highlighted as part of the winning line.
    pub fn is_winning_cell(&self, cell: usize) -> bool {
        self.winning_line().is_some_and(|line| line.contains(&cell))
    }

    /// Whether the move list is shown oldest first.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Step most recently played or jumped to; cleared by resets.
    pub fn selected_step(&self) -> Option<usize> {
        self.selected_step
    }

    /// Moves that produced each history entry, in step order.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .entries()
            .windows(2)
            .filter_map(|pair| {
                let cell = *pair[0].board().changed_cells(pair[1].board()).first()?;
                let player = pair[1].board().get(cell)?.player()?;
                Some(Move::new(player, cell))
            })
            .collect()
    }

    /// Move list rows, ordered by the current sort order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let mut list: Vec<MoveListEntry> = self
            .history
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListEntry {
                step,
                description: entry.description(step),
                selected: self.selected_step == Some(step),
            })
            .collect();
        if !self.sort_ascending {
            list.reverse();
        }
        list
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::fresh(DEFAULT_BOARD_SIZE, true)
    }
}

fn validate_size(size: usize) -> Result<(), SessionError> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(SessionError::InvalidSize {
            size,
            min: MIN_BOARD_SIZE,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}
