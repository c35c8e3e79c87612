//! Draw detection logic for connect-K.

use crate::types::Board;
use tracing::instrument;

/// Checks whether the game at `step` is a draw.
///
/// A game is drawn once every cell has been played (`step == size²`) and the
/// final move did not win.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board, step: usize, has_winner: bool) -> bool {
    !has_winner && step == board.cell_count()
}
