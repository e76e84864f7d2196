//! Terminal-win invariant: nothing is appended after a winning snapshot.

use super::Invariant;
use crate::GameState;

/// Invariant: only the last snapshot in history may contain a winning line.
pub struct WinIsTerminalInvariant;

impl Invariant<GameState> for WinIsTerminalInvariant {
    fn holds(game: &GameState) -> bool {
        game.history
            .split_last()
            .is_none_or(|(_, earlier)| earlier.iter().all(|snap| snap.winning_line().is_none()))
    }

    fn description() -> &'static str {
        "No snapshot follows a winning snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_won_game_holds() {
        let mut game = GameState::new();
        for idx in [0, 4, 1, 3, 2] {
            game.apply_move(Position::ALL[idx]);
        }
        assert!(WinIsTerminalInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = GameState::new();
        for idx in [0, 4, 1, 3, 2] {
            game.apply_move(Position::ALL[idx]);
        }
        let after = game.history[5].successor(Position::BottomRight, Mark::O);
        game.history.push(after);
        assert!(!WinIsTerminalInvariant::holds(&game));
    }
}
