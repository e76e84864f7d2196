//! Turn invariant: marks alternate X, O, X, ... along history.

use super::Invariant;
use crate::{Cell, GameState, Mark};

/// Invariant: the mark placed to reach step `n` belongs to the player
/// whose turn it was at step `n - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.iter().enumerate().skip(1).all(|(step, snap)| {
            let expected = Cell::Occupied(Mark::for_step(step - 1));
            snap.last_move()
                .is_some_and(|pos| snap.board().get(pos) == expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate starting with X"
    }
}
