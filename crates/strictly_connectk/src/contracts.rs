//! Contract-based validation for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use crate::error::MoveError;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::session::GameSession;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game at the current step is not won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the session still accepts moves.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.status().is_finished() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell lies on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Checks `cell` indexes the current board.
    #[instrument(skip(session))]
    pub fn check(cell: usize, session: &GameSession) -> Result<(), MoveError> {
        let cells = session.board().cell_count();
        if cell >= cells {
            Err(MoveError::OutOfBounds { cell, cells })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell is empty on the current board.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks `cell` has no mark yet.
    #[instrument(skip(session))]
    pub fn check(cell: usize, session: &GameSession) -> Result<(), MoveError> {
        if session.board().is_empty(cell) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(cell))
        }
    }
}

/// Composite precondition for placing a mark.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in order.
    #[instrument(skip(session))]
    pub fn check(cell: usize, session: &GameSession) -> Result<(), MoveError> {
        GameNotOver::check(session)?;
        CellInBounds::check(cell, session)?;
        CellIsEmpty::check(cell, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark on a cell.
///
/// Preconditions:
/// - Game at the current step is not over
/// - Cell is on the board and empty
///
/// Postconditions:
/// - History grew by one entry and the current step is the last entry
/// - All session invariants hold
pub struct MoveContract;

impl Contract<GameSession, usize> for MoveContract {
    fn pre(session: &GameSession, cell: &usize) -> Result<(), MoveError> {
        LegalMove::check(*cell, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        let expected_len = before.current_step() + 2;
        if after.history().len() != expected_len
            || after.current_step() != after.history().len() - 1
        {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} entries with the last one current, found {} at step {}",
                expected_len,
                after.history().len(),
                after.current_step()
            )));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
