//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::session::GameSession;
use crate::types::Player;

/// Invariant: Players alternate turns.
///
/// The mark added at step `k` belongs to X for odd `k` and to O for even `k`,
/// and the player to move matches the parity of the current step.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let alternates = session
            .moves()
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.player == Player::for_step(i));

        let turn_matches = session
            .next_player()
            .is_none_or(|next| next == Player::for_step(session.current_step()));

        alternates && turn_matches
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_new_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameSession::default()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let session = GameSession::replay(5, &[0, 12, 4, 20, 24]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.next_player(), Some(Player::O));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = GameSession::replay(5, &[0, 1]).unwrap();
        session.history.entries[2].board.squares_mut()[1] = Square::Occupied(Player::X);
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
