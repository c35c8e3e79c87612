//! Strictly Connect-K - rule engine and history manager for N×N connect-K
//!
//! Tic-tac-toe generalised to any board of five or more cells per side, where
//! five in a row wins.
//!
//! # Architecture
//!
//! - **Rules**: incremental win detection around the last move
//! - **History**: immutable board snapshots supporting time travel
//! - **Session**: the state machine tying history, turn and result together
//! - **Contracts/Invariants**: pre- and postconditions checked on every move
//!
//! # Example
//!
//! ```
//! use strictly_connectk::{GameSession, Player};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = GameSession::new(5)?;
//! for cell in [0, 1, 5, 2, 10, 3, 15, 4, 20] {
//!     session.apply_move(cell)?;
//! }
//! assert_eq!(session.winner(), Some(Player::X));
//! assert_eq!(session.status().to_string(), "Winner: X");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod history;
mod invariants;
mod phases;
pub mod rules;
mod session;
mod types;

// Crate-level exports - Domain types
pub use action::Move;
pub use types::{Board, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Player, Square};

// Crate-level exports - Rules
pub use rules::{Axis, WinResult, detect_win, win_point};

// Crate-level exports - Session state machine
pub use history::{History, HistoryEntry};
pub use phases::PlayState;
pub use session::{GameSession, MoveListEntry};

// Crate-level exports - Errors
pub use error::{MoveError, SessionError};

// Crate-level exports - Contracts and invariants
pub use contracts::{CellInBounds, CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, SessionInvariants,
    SnapshotChainInvariant, StepBoundsInvariant,
};
