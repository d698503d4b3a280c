//! Game session: turn order and outcome over a single board.

use super::board::{BOARD_SIZE, Board};
use super::outcome::{GameStatus, InvalidMove, MoveResult};
use super::rules;
use super::types::{Cell, Mark, Player};
use tracing::{debug, info, instrument};

/// Default display name of the first player.
pub const DEFAULT_PLAYER_ONE: &str = "Player 1";
/// Default display name of the second player.
pub const DEFAULT_PLAYER_TWO: &str = "Player 2";

/// One game between two fixed players.
///
/// The first player always holds [`Mark::X`] and moves first; the second
/// holds [`Mark::O`]. Sessions are plain values, so any number may exist
/// side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    current: usize,
    status: GameStatus,
}

impl GameSession {
    /// Creates a session with named players and an empty board.
    #[instrument(skip_all, fields(player_one = %player_one.as_ref(), player_two = %player_two.as_ref()))]
    pub fn new(player_one: impl AsRef<str>, player_two: impl AsRef<str>) -> Self {
        info!("Creating game session");
        Self {
            board: Board::new(),
            players: [
                Player::new(player_one, Mark::X),
                Player::new(player_two, Mark::O),
            ],
            current: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Plays the current player's mark at `index` (0-8).
    ///
    /// Refused moves and moves after the game has ended change nothing.
    #[instrument(skip(self), fields(mark = %self.current_player().mark()))]
    pub fn play_move(&mut self, index: usize) -> MoveResult {
        if self.is_over() {
            debug!(status = ?self.status, "Move rejected, game is over");
            return MoveResult::GameOver;
        }

        let mover = self.current_player().clone();
        if !self.board.place(index, *mover.mark()) {
            let reason = if index >= BOARD_SIZE {
                InvalidMove::OutOfRange(index)
            } else {
                InvalidMove::Occupied(index)
            };
            debug!(%reason, "Move rejected");
            return MoveResult::Invalid {
                reason,
                current: mover,
            };
        }

        let cells = self.board.snapshot();
        let result = if let Some(line) = rules::winning_line(&cells) {
            self.status = GameStatus::Won(line.mark);
            info!(winner = %mover, cells = ?line.cells, "Game won");
            MoveResult::Win {
                winner: mover,
                line,
            }
        } else if rules::is_full(&cells) {
            self.status = GameStatus::Tied;
            info!("Game tied");
            MoveResult::Tie
        } else {
            self.switch_player();
            MoveResult::Continue {
                next: self.current_player().clone(),
            }
        };

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        result
    }

    /// Hands the turn to the other player.
    fn switch_player(&mut self) {
        self.current = 1 - self.current;
        debug!(next = %self.current_player(), "Turn passed");
    }

    /// Clears the board and gives the first move back to the first player.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = 0;
        self.status = GameStatus::InProgress;
        info!("Game reset");
    }

    /// Returns the player to move (or who made the final move, once over).
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns an owned copy of the board cells.
    pub fn board_snapshot(&self) -> [Cell; BOARD_SIZE] {
        self.board.snapshot()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true once the game is won or tied.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns both players, first player first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player holding `mark`.
    pub fn player_for(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.players[0],
            Mark::O => &self.players[1],
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = GameSession::new("Ada", "Grace");
        assert_eq!(session.current_player().name(), "Ada");
        assert_eq!(*session.current_player().mark(), Mark::X);
        assert_eq!(session.player_for(Mark::O).name(), "Grace");
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(!session.is_over());
    }

    #[test]
    fn test_continue_carries_next_player() {
        let mut session = GameSession::default();
        let result = session.play_move(4);
        assert_eq!(
            result,
            MoveResult::Continue {
                next: Player::new(DEFAULT_PLAYER_TWO, Mark::O)
            }
        );
        assert_eq!(*session.current_player().mark(), Mark::O);
    }

    #[test]
    fn test_switch_player_toggles() {
        let mut session = GameSession::default();
        session.switch_player();
        assert_eq!(*session.current_player().mark(), Mark::O);
        session.switch_player();
        assert_eq!(*session.current_player().mark(), Mark::X);
    }

    #[test]
    fn test_out_of_range_is_reported() {
        let mut session = GameSession::default();
        assert_eq!(
            session.play_move(9),
            MoveResult::Invalid {
                reason: InvalidMove::OutOfRange(9),
                current: Player::new(DEFAULT_PLAYER_ONE, Mark::X),
            }
        );
        assert_eq!(*session.current_player().mark(), Mark::X);
    }

    #[test]
    fn test_winner_stays_current_player() {
        let mut session = GameSession::default();
        for index in [0, 4, 1, 5, 2] {
            session.play_move(index);
        }
        assert_eq!(session.status(), GameStatus::Won(Mark::X));
        assert_eq!(*session.current_player().mark(), Mark::X);
    }
}
