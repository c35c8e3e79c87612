//! Tests for the scripted command loop.

use std::io::Cursor;

use strictly_connectk::{GameSession, Player};
use strictly_connectk_cli::run;

fn play_script(session: &mut GameSession, script: &str) -> String {
    let mut output = Vec::new();
    run(session, Cursor::new(script), &mut output).expect("Loop failed");
    String::from_utf8(output).expect("Output is not UTF-8")
}

#[test]
fn test_scripted_win() {
    let mut session = GameSession::default();
    let script = "play 0\nplay 1\nplay 5\nplay 2\nplay 10\nplay 3\nplay 15\nplay 4\nplay 20\n";
    let output = play_script(&mut session, script);

    assert_eq!(session.winner(), Some(Player::X));
    assert!(output.contains("Winner: X"));
    assert!(output.starts_with("     1  2  3  4  5\n"));
}

#[test]
fn test_errors_do_not_stop_the_loop() {
    let mut session = GameSession::default();
    let output = play_script(&mut session, "play 0\nplay 0\nfly\njump 9\nresize 2\nplay 1\n");

    assert!(output.contains("Square 0 is already occupied"));
    assert!(output.contains("Unknown command `fly`"));
    assert!(output.contains("Step 9 is out of range"));
    assert!(output.contains("Board size 2 is out of range"));
    assert_eq!(session.history().len(), 3);
}

#[test]
fn test_huge_resize_is_reported() {
    let mut session = GameSession::default();
    let output = play_script(&mut session, "play 0\nresize 4294967296\nplay 1\n");

    assert!(output.contains("Board size 4294967296 is out of range"));
    assert_eq!(session.size(), 5);
    assert_eq!(session.history().len(), 3);
}

#[test]
fn test_quit_stops_reading() {
    let mut session = GameSession::default();
    play_script(&mut session, "play 0\nquit\nplay 1\n");
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_time_travel_and_rematch() {
    let mut session = GameSession::default();
    let output = play_script(
        &mut session,
        "move 1 1\nmove 2 1\nmove 3 1\njump 1\nmoves\nmove 5 5\nsort\nrematch\n",
    );

    assert!(output.contains(">   1. Go to move #1: (1, 1)"));
    assert!(output.contains("Sort: Descending"));
    assert_eq!(session.history().len(), 1);
    assert!(!session.sort_ascending());
}
