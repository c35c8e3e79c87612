//! Plain-text rendering of a session.

use strictly_connectk::{GameSession, Square};
use tracing::instrument;

/// Renders the board at the current step.
///
/// Columns and rows are numbered from 1 to match move labels. Cells of the
/// winning line are bracketed.
#[instrument(skip(session), fields(size = session.size()))]
pub fn render_board(session: &GameSession) -> String {
    let board = session.board();
    let size = board.size();

    let header: String = (1..=size).map(|col| format!("{:>3}", col)).collect();
    let rows: String = (0..size)
        .map(|row| {
            let squares: String = (0..size)
                .map(|col| {
                    let cell = row * size + col;
                    let mark = match board.get(cell) {
                        Some(Square::Occupied(player)) => player.to_string(),
                        _ => ".".to_string(),
                    };
                    if session.is_winning_cell(cell) {
                        format!("[{}]", mark)
                    } else {
                        format!(" {} ", mark)
                    }
                })
                .collect();
            format!("{:>3}{}\n", row + 1, squares)
        })
        .collect();

    format!("   {}\n{}", header, rows)
}

/// Renders the move list in the session's sort order.
///
/// The selected step is marked with `>`.
#[instrument(skip(session))]
pub fn render_moves(session: &GameSession) -> String {
    session
        .move_list()
        .iter()
        .map(|entry| {
            let marker = if entry.selected { '>' } else { ' ' };
            format!("{} {:>3}. {}\n", marker, entry.step, entry.description)
        })
        .collect()
}

/// Status line, plus a hint once the game is over.
#[instrument(skip(session))]
pub fn render_status(session: &GameSession) -> String {
    let status = session.status();
    if status.is_finished() {
        format!("{} (type `rematch` to play again)", status)
    } else {
        status.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_has_header_and_rows() {
        let session = GameSession::replay(5, &[0, 6]).unwrap();
        let text = render_board(&session);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "     1  2  3  4  5");
        assert_eq!(lines[1], "  1 X  .  .  .  . ");
        assert_eq!(lines[2], "  2 .  O  .  .  . ");
    }

    #[test]
    fn test_winning_cells_are_bracketed() {
        let session = GameSession::replay(5, &[0, 1, 5, 2, 10, 3, 15, 4, 20]).unwrap();
        let text = render_board(&session);
        assert_eq!(text.matches("[X]").count(), 5);
        assert!(!text.contains("[O]"));
    }

    #[test]
    fn test_moves_marks_selection_and_order() {
        let mut session = GameSession::replay(5, &[12, 13]).unwrap();
        session.jump_to(1).unwrap();
        assert_eq!(
            render_moves(&session),
            "    0. Go to game start\n>   1. Go to move #1: (3, 3)\n    2. Go to move #2: (4, 3)\n"
        );

        session.toggle_sort_order();
        let text = render_moves(&session);
        assert!(text.starts_with("    2."));
    }

    #[test]
    fn test_status_hint_when_finished() {
        let session = GameSession::replay(5, &[0, 1, 5, 2, 10, 3, 15, 4, 20]).unwrap();
        assert_eq!(
            render_status(&session),
            "Winner: X (type `rematch` to play again)"
        );
        assert_eq!(render_status(&GameSession::default()), "Next player: X");
    }
}
