//! First-class move events.
//!
//! A move records who played where. Sessions replay sequences of moves and
//! report the move they just accepted.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Row-major cell index.
    pub cell: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, cell: usize) -> Self {
        Self { player, cell }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}
