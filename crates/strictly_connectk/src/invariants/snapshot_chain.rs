//! Snapshot chain invariant: each entry adds exactly one mark to the last.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Square;

/// Invariant: consecutive snapshots differ by exactly one newly filled cell.
///
/// The only change between entry `k - 1` and entry `k` is one empty square
/// becoming occupied. Marks are never overwritten or removed.
pub struct SnapshotChainInvariant;

impl Invariant<GameSession> for SnapshotChainInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().entries().windows(2).all(|pair| {
            let (prev, next) = (pair[0].board(), pair[1].board());
            if prev.cell_count() != next.cell_count() {
                return false;
            }
            match prev.changed_cells(next).as_slice() {
                [cell] => {
                    prev.get(*cell) == Some(Square::Empty)
                        && next.get(*cell).is_some_and(|s| s != Square::Empty)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to the previous one"
    }
}
