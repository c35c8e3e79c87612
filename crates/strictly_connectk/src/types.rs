//! Core domain types for connect-K.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest board dimension a session accepts.
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest board dimension a session accepts.
pub const MAX_BOARD_SIZE: usize = 100;

/// Board dimension used when no size is given.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player whose turn it is once `step` moves have been played.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Square N×N board stored in row-major order.
///
/// Cell `i` lives at row `i / size`, column `i % size`. Boards are treated as
/// snapshots: placing a mark produces a new board via [`Board::placed`] and
/// leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardFields")]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

/// Unchecked board fields as they appear on the wire.
#[derive(Deserialize)]
struct BoardFields {
    size: usize,
    squares: Vec<Square>,
}

impl TryFrom<BoardFields> for Board {
    type Error = String;

    fn try_from(fields: BoardFields) -> Result<Self, Self::Error> {
        let BoardFields { size, squares } = fields;
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(format!("board size {} is out of range", size));
        }
        if squares.len() != size * size {
            return Err(format!(
                "board of size {} needs {} squares, got {}",
                size,
                size * size,
                squares.len()
            ));
        }
        Ok(Self { size, squares })
    }
}

impl Board {
    /// Creates an empty board with `size * size` squares.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Returns the board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells (`size²`).
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given cell index.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Checks if a square is empty. Out-of-range cells are never empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[cfg(test)]
    pub(crate) fn squares_mut(&mut self) -> &mut [Square] {
        &mut self.squares
    }

    /// Returns a copy of this board with `player`'s mark at `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for a cell past the end of the board
    /// and [`MoveError::SquareOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn placed(&self, cell: usize, player: Player) -> Result<Board, MoveError> {
        match self.get(cell) {
            None => Err(MoveError::OutOfBounds {
                cell,
                cells: self.cell_count(),
            }),
            Some(Square::Occupied(_)) => Err(MoveError::SquareOccupied(cell)),
            Some(Square::Empty) => {
                let mut next = self.clone();
                next.squares[cell] = Square::Occupied(player);
                Ok(next)
            }
        }
    }

    /// Converts a cell index to zero-based `(row, col)`.
    pub fn coords(&self, cell: usize) -> (usize, usize) {
        (cell / self.size, cell % self.size)
    }

    /// Converts zero-based `(row, col)` to a cell index, if on the board.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Human-readable label for a cell: `"(col, row)"`, both 1-indexed.
    pub fn label(&self, cell: usize) -> String {
        let (row, col) = self.coords(cell);
        format!("({}, {})", col + 1, row + 1)
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Cells whose contents differ between `self` and `other`.
    ///
    /// Boards of different sizes compare over their common prefix only.
    pub fn changed_cells(&self, other: &Board) -> Vec<usize> {
        self.squares
            .iter()
            .zip(other.squares.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.squares.chunks(self.size.max(1)) {
            let line = row
                .iter()
                .map(|square| match square {
                    Square::Empty => ".",
                    Square::Occupied(Player::X) => "X",
                    Square::Occupied(Player::O) => "O",
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6);
        assert_eq!(board.cell_count(), 36);
        assert_eq!(board.occupied(), 0);
        assert!((0..36).all(|cell| board.is_empty(cell)));
    }

    #[test]
    fn test_placed_leaves_source_untouched() {
        let board = Board::new(5);
        let next = board.placed(7, Player::X).unwrap();
        assert!(board.is_empty(7));
        assert_eq!(next.get(7), Some(Square::Occupied(Player::X)));
        assert_eq!(board.changed_cells(&next), vec![7]);
    }

    #[test]
    fn test_placed_rejects_occupied_and_out_of_bounds() {
        let board = Board::new(5).placed(3, Player::O).unwrap();
        assert_eq!(board.placed(3, Player::X), Err(MoveError::SquareOccupied(3)));
        assert_eq!(
            board.placed(25, Player::X),
            Err(MoveError::OutOfBounds { cell: 25, cells: 25 })
        );
    }

    #[test]
    fn test_label_is_column_then_row() {
        let board = Board::new(5);
        assert_eq!(board.label(0), "(1, 1)");
        assert_eq!(board.label(7), "(3, 2)");
        assert_eq!(board.label(24), "(5, 5)");
    }

    #[test]
    fn test_index_and_coords_agree() {
        let board = Board::new(7);
        assert_eq!(board.coords(23), (3, 2));
        assert_eq!(board.index(3, 2), Some(23));
        assert_eq!(board.index(7, 0), None);
    }

    #[test]
    fn test_player_for_step_alternates() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(10), Player::X);
        assert_eq!(Player::X.opponent(), Player::O);
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let board = Board::new(5).placed(4, Player::O).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let empty_size = r#"{"size":0,"squares":[{"Occupied":"X"}]}"#;
        assert!(serde_json::from_str::<Board>(empty_size).is_err());

        let short = r#"{"size":5,"squares":["Empty","Empty"]}"#;
        let err = serde_json::from_str::<Board>(short).unwrap_err();
        assert!(err.to_string().contains("needs 25 squares, got 2"));
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new(5)
            .placed(0, Player::X)
            .and_then(|b| b.placed(6, Player::O))
            .unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "X . . . .");
        assert_eq!(lines[1], ". O . . .");
    }
}
