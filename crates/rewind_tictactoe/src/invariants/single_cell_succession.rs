//! Succession invariant: each snapshot fills exactly one previously empty cell.

use super::Invariant;
use crate::{Cell, GameState, Position};

/// Invariant: every snapshot after the first differs from its predecessor
/// only at its `last_move`, and that cell was empty before.
pub struct SingleCellSuccessionInvariant;

impl Invariant<GameState> for SingleCellSuccessionInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(played) = pair[1].last_move() else {
                return false;
            };
            before.is_empty(played)
                && after.get(played) != Cell::Empty
                && Position::ALL
                    .iter()
                    .filter(|pos| **pos != played)
                    .all(|pos| before.get(*pos) == after.get(*pos))
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty cell"
    }
}
