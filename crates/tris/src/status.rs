//! Human-readable status lines.
//!
//! Move results carry the players involved, so a status line after a move
//! comes from the result alone. [`idle`] covers the screens that show no
//! move result (startup, reset, refresh) and only reads the session.

use tris_core::{GameSession, InvalidMove, MoveResult, Player};

/// Status line after a move.
pub fn describe(result: &MoveResult) -> String {
    match result {
        MoveResult::Continue { next } => turn(next),
        MoveResult::Win { winner, .. } => format!("{winner} wins!"),
        MoveResult::Tie => "It's a tie!".to_string(),
        MoveResult::Invalid {
            reason: InvalidMove::Occupied(_),
            current,
        } => format!("Cell already taken! {}", turn(current)),
        MoveResult::Invalid {
            reason: reason @ InvalidMove::OutOfRange(_),
            current,
        } => format!("There is no cell {}! {}", reason.index(), turn(current)),
        MoveResult::GameOver => "The game is over. Press r to play again.".to_string(),
    }
}

/// Status line for a session shown without a fresh move result.
pub fn idle(session: &GameSession) -> String {
    let status = session.status();
    if let Some(mark) = status.winner() {
        format!("{} wins!", session.player_for(mark))
    } else if status.is_terminal() {
        "It's a tie!".to_string()
    } else {
        turn(session.current_player())
    }
}

fn turn(player: &Player) -> String {
    format!("{player}'s turn")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tris_core::Mark;

    #[test]
    fn test_fresh_session() {
        let session = GameSession::new("Ada", "Grace");
        assert_eq!(idle(&session), "Ada (X)'s turn");
    }

    #[test]
    fn test_continue_names_next_player() {
        let mut session = GameSession::new("Ada", "Grace");
        let result = session.play_move(4);
        assert_eq!(describe(&result), "Grace (O)'s turn");
        assert_eq!(describe(&result), idle(&session));
    }

    #[test]
    fn test_win_and_refresh_agree() {
        let mut session = GameSession::new("Ada", "Grace");
        let mut last = MoveResult::GameOver;
        for index in [0, 4, 1, 5, 2] {
            last = session.play_move(index);
        }
        assert_eq!(describe(&last), "Ada (X) wins!");
        assert_eq!(idle(&session), "Ada (X) wins!");
    }

    #[test]
    fn test_invalid_reminds_whose_turn() {
        let mut session = GameSession::new("Ada", "Grace");
        session.play_move(0);
        let result = session.play_move(0);
        assert_eq!(describe(&result), "Cell already taken! Grace (O)'s turn");
        let result = session.play_move(10);
        assert_eq!(describe(&result), "There is no cell 10! Grace (O)'s turn");
    }

    #[test]
    fn test_invalid_line_needs_no_session() {
        let result = MoveResult::Invalid {
            reason: InvalidMove::Occupied(3),
            current: Player::new("Linus", Mark::X),
        };
        assert_eq!(describe(&result), "Cell already taken! Linus (X)'s turn");
    }

    #[test]
    fn test_tie_and_refresh_agree() {
        let mut session = GameSession::new("Ada", "Grace");
        let mut last = MoveResult::GameOver;
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            last = session.play_move(index);
        }
        assert_eq!(describe(&last), "It's a tie!");
        assert_eq!(idle(&session), "It's a tie!");
    }

    #[test]
    fn test_game_over() {
        assert_eq!(
            describe(&MoveResult::GameOver),
            "The game is over. Press r to play again."
        );
        assert_eq!(describe(&MoveResult::Tie), "It's a tie!");
    }
}
