//! Step bounds invariant: the current step and every snapshot are well formed.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: the session's indices and snapshot shapes agree.
///
/// - `current_step` indexes an existing entry
/// - every board has `size²` cells for the session size
/// - entry 0 is the empty, unlabeled board
pub struct StepBoundsInvariant;

impl Invariant<GameSession> for StepBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        let size = session.size();
        let entries = session.history().entries();

        let step_valid = session.current_step() < entries.len();
        let shapes_valid = entries
            .iter()
            .all(|e| e.board().size() == size && e.board().cell_count() == size * size);
        let start_valid = entries
            .first()
            .is_some_and(|e| e.board().occupied() == 0 && e.label().is_empty() && e.win().is_none());

        step_valid && shapes_valid && start_valid
    }

    fn description() -> &'static str {
        "Current step is in range and every snapshot matches the board size"
    }
}
