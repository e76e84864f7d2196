//! Cursor invariant: history starts at game start and the step points into it.

use super::Invariant;
use crate::{GameState, Snapshot};

/// Invariant: history is non-empty, begins with the initial snapshot, and
/// the current step indexes an existing snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.first() == Some(&Snapshot::initial())
            && game.current_step < game.history.len()
    }

    fn description() -> &'static str {
        "History starts at game start and current step is within history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut game = GameState::new();
        game.current_step = 1;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
