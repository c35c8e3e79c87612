//! Error types for moves and session transitions.
//!
//! Every error leaves the session exactly as it was before the call.

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game at the current step already has a result.
    #[display("Game is already over")]
    GameOver,

    /// The square at the cell is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The cell index lies outside the board.
    #[display("Cell {cell} is outside a board of {cells} cells")]
    OutOfBounds {
        /// Requested cell.
        cell: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error raised by session-level operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// Requested board size is outside the accepted range.
    #[display("Board size {size} is out of range, it must be between {min} and {max}")]
    #[from(ignore)]
    InvalidSize {
        /// Requested size.
        size: usize,
        /// Minimum accepted size.
        min: usize,
        /// Maximum accepted size.
        max: usize,
    },

    /// Requested history step does not exist.
    #[display("Step {step} is out of range for a history of {len} entries")]
    #[from(ignore)]
    OutOfRangeStep {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },

    /// A move was rejected while replaying.
    #[display("Move rejected: {}", _0)]
    Move(MoveError),
}

impl std::error::Error for SessionError {}
