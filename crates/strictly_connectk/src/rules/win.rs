//! Incremental win detection around the most recent move.
//!
//! Instead of rescanning the whole board, the detector walks outward from the
//! last placed mark along the four axes and counts matching neighbours.

use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A completed line: the winning player and every cell that forms it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    /// The player owning the line.
    pub player: Player,
    /// Cells of all winning axes, including the last move.
    pub line: BTreeSet<usize>,
}

/// One of the four lines through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub enum Axis {
    /// Down and up.
    Vertical,
    /// Right and left.
    Horizontal,
    /// Down-right and up-left.
    MainDiagonal,
    /// Down-left and up-right.
    AntiDiagonal,
}

impl Axis {
    /// The two opposite `(row, col)` steps walked along this axis.
    pub fn directions(self) -> [(isize, isize); 2] {
        match self {
            Axis::Vertical => [(1, 0), (-1, 0)],
            Axis::Horizontal => [(0, 1), (0, -1)],
            Axis::MainDiagonal => [(1, 1), (-1, -1)],
            Axis::AntiDiagonal => [(1, -1), (-1, 1)],
        }
    }
}

/// Number of matching neighbours (excluding the placed mark) one axis needs.
///
/// Boards of five or more need four neighbours, so five in a row wins.
/// Smaller boards need `size - 1`.
pub fn win_point(size: usize) -> usize {
    if size >= 5 { 4 } else { size.saturating_sub(1) }
}

/// Determines whether the mark at `last_move` completes a winning line.
///
/// Returns `None` when no axis reaches [`win_point`], or when `last_move` is
/// off the board or empty. Several axes can win with the same move; their
/// cells are all part of the returned line.
#[instrument(skip(board), fields(size = board.size()))]
pub fn detect_win(board: &Board, last_move: usize) -> Option<WinResult> {
    let player = board.get(last_move)?.player()?;
    let threshold = win_point(board.size());

    let mut line = BTreeSet::new();
    for axis in Axis::iter() {
        let cells = axis_run(board, last_move, player, axis);
        // An axis without neighbours never wins, even when the threshold is zero.
        if !cells.is_empty() && cells.len() >= threshold {
            debug!(%axis, count = cells.len(), "Winning axis");
            line.extend(cells);
        }
    }

    if line.is_empty() {
        return None;
    }

    line.insert(last_move);
    Some(WinResult { player, line })
}

/// Cells matching `player` along both directions of `axis`, excluding `origin`.
fn axis_run(board: &Board, origin: usize, player: Player, axis: Axis) -> Vec<usize> {
    let (row, col) = board.coords(origin);
    axis.directions()
        .into_iter()
        .flat_map(|(dr, dc)| walk(board, row, col, dr, dc, player))
        .collect()
}

/// Walks from `(row, col)` in one direction until the edge or a mismatch.
fn walk(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: Player,
) -> Vec<usize> {
    let mut cells = Vec::new();
    let (mut r, mut c) = (row, col);
    loop {
        let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc)) else {
            break;
        };
        let Some(cell) = board.index(nr, nc) else {
            break;
        };
        if board.get(cell) != Some(Square::Occupied(player)) {
            break;
        }
        cells.push(cell);
        (r, c) = (nr, nc);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, Player)]) -> Board {
        marks.iter().fold(Board::new(size), |board, &(cell, player)| {
            board.placed(cell, player).unwrap()
        })
    }

    fn set(cells: &[usize]) -> BTreeSet<usize> {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_win_point_thresholds() {
        assert_eq!(win_point(3), 2);
        assert_eq!(win_point(4), 3);
        assert_eq!(win_point(5), 4);
        assert_eq!(win_point(19), 4);
    }

    #[test]
    fn test_single_mark_no_winner() {
        let board = board_with(5, &[(12, Player::X)]);
        assert_eq!(detect_win(&board, 12), None);
    }

    #[test]
    fn test_empty_cell_no_winner() {
        let board = board_with(5, &[(0, Player::X)]);
        assert_eq!(detect_win(&board, 1), None);
        assert_eq!(detect_win(&board, 99), None);
    }

    #[test]
    fn test_vertical_win() {
        let marks: Vec<_> = [0, 5, 10, 15, 20].iter().map(|&c| (c, Player::X)).collect();
        let board = board_with(5, &marks);
        let result = detect_win(&board, 20).unwrap();
        assert_eq!(result.player, Player::X);
        assert_eq!(result.line, set(&[0, 5, 10, 15, 20]));
    }

    #[test]
    fn test_horizontal_win_from_middle() {
        let marks: Vec<_> = (7..12).map(|c| (c, Player::O)).collect();
        let board = board_with(7, &marks);
        let result = detect_win(&board, 9).unwrap();
        assert_eq!(result.player, Player::O);
        assert_eq!(result.line, set(&[7, 8, 9, 10, 11]));
    }

    #[test]
    fn test_main_diagonal_win() {
        let marks: Vec<_> = [0, 6, 12, 18, 24].iter().map(|&c| (c, Player::X)).collect();
        let board = board_with(5, &marks);
        assert_eq!(detect_win(&board, 12).unwrap().line, set(&[0, 6, 12, 18, 24]));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let marks: Vec<_> = [4, 8, 12, 16, 20].iter().map(|&c| (c, Player::O)).collect();
        let board = board_with(5, &marks);
        assert_eq!(detect_win(&board, 4).unwrap().line, set(&[4, 8, 12, 16, 20]));
    }

    #[test]
    fn test_one_short_is_not_a_win() {
        let marks: Vec<_> = [0, 1, 2, 3].iter().map(|&c| (c, Player::X)).collect();
        let board = board_with(5, &marks);
        assert_eq!(detect_win(&board, 3), None);
    }

    #[test]
    fn test_no_wraparound_across_rows() {
        // 4 and 5 end row 0, 6 to 8 start row 1.
        let marks: Vec<_> = [4, 5, 6, 7, 8].iter().map(|&c| (c, Player::X)).collect();
        let board = board_with(6, &marks);
        assert_eq!(detect_win(&board, 6), None);
    }

    #[test]
    fn test_mismatch_stops_walk() {
        let board = board_with(
            7,
            &[
                (0, Player::X),
                (1, Player::X),
                (2, Player::O),
                (3, Player::X),
                (4, Player::X),
                (5, Player::X),
            ],
        );
        assert_eq!(detect_win(&board, 3), None);
    }

    #[test]
    fn test_two_axes_union() {
        // Row 2 and column 2 both complete through the center of a 5x5 board.
        let mut marks: Vec<_> = (10..15).map(|c| (c, Player::X)).collect();
        marks.extend([2, 7, 17, 22].iter().map(|&c| (c, Player::X)));
        let board = board_with(5, &marks);
        let result = detect_win(&board, 12).unwrap();
        assert_eq!(result.line, set(&[2, 7, 10, 11, 12, 13, 14, 17, 22]));
    }

    #[test]
    fn test_small_board_uses_size_minus_one() {
        let board = board_with(3, &[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(detect_win(&board, 1).unwrap().line, set(&[0, 1, 2]));

        let board = board_with(3, &[(0, Player::X), (1, Player::X)]);
        assert_eq!(detect_win(&board, 1), None);
    }
}
