//! Tests for the line-oriented front end.

use std::io::Cursor;
use tris::console;
use tris_core::{GameSession, GameStatus, Mark};

fn run(session: &mut GameSession, input: &str) -> String {
    let mut output = Vec::new();
    console::run(session, Cursor::new(input), &mut output).expect("console run");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn test_shows_board_and_first_turn() {
    let mut session = GameSession::new("Ada", "Grace");
    let output = run(&mut session, "");
    assert!(output.starts_with("0|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8\nAda (X)'s turn\n"));
}

#[test]
fn test_plays_to_a_win() {
    let mut session = GameSession::new("Ada", "Grace");
    let output = run(&mut session, "0\n4\ntop-center\n5\n2\n");

    assert!(output.contains("Grace (O)'s turn"));
    assert!(output.contains("X|X|X\n-+-+-\n3|O|O\n-+-+-\n6|7|8\nAda (X) wins!\n\nType 'reset' to play again.\n"));
    assert_eq!(session.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_refused_moves_keep_turn() {
    let mut session = GameSession::new("Ada", "Grace");
    let output = run(&mut session, "4\n4\n9\n");

    assert!(output.contains("Cell already taken! Grace (O)'s turn"));
    assert!(output.contains("There is no cell 9! Grace (O)'s turn"));
    assert!(!output.contains(console::PLAY_AGAIN));
    assert_eq!(*session.current_player().mark(), Mark::O);
}

#[test]
fn test_moves_after_win_report_game_over() {
    let mut session = GameSession::default();
    let output = run(&mut session, "0\n4\n1\n5\n2\n8\n");

    assert!(output.contains("The game is over. Press r to play again."));
    assert_eq!(output.matches(console::PLAY_AGAIN).count(), 1);
    assert!(session.board_snapshot()[8].is_empty());
}

#[test]
fn test_reset_and_quit() {
    let mut session = GameSession::new("Ada", "Grace");
    let output = run(&mut session, "0\nreset\nquit\n4\n");

    assert!(output.ends_with("0|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8\nAda (X)'s turn\n\n"));
    assert!(session.board_snapshot().iter().all(|cell| cell.is_empty()));
}

#[test]
fn test_unknown_command() {
    let mut session = GameSession::default();
    let output = run(&mut session, "\nfoo\n");

    assert!(output.contains("Unknown command 'foo'."));
    assert_eq!(session, GameSession::default());
}

#[test]
fn test_tie_prints_play_again_hint() {
    let mut session = GameSession::default();
    let output = run(&mut session, "0\n1\n2\n4\n3\n5\n7\n6\n8\n");

    assert!(output.ends_with("It's a tie!\n\nType 'reset' to play again.\n"));
    assert_eq!(session.status(), GameStatus::Tied);
}
