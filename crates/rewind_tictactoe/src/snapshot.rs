//! Immutable board snapshots stored in game history.

use super::rules::{WinningLine, find_winning_line};
use super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};

/// One point in game history: a board plus its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    highlights: [bool; 9],
    last_move: Option<Position>,
}

impl Snapshot {
    /// The game-start snapshot: empty board, nothing highlighted, no last move.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Builds the snapshot that follows `self` when `mark` plays `pos`.
    ///
    /// Highlights the cells of a winning line on the resulting board.
    /// Legality is the caller's concern.
    pub(crate) fn successor(&self, pos: Position, mark: Mark) -> Self {
        let mut board = self.board;
        board.set(pos, Cell::Occupied(mark));

        let mut highlights = [false; 9];
        if let Some(line) = find_winning_line(&board) {
            for cell in line.cells {
                highlights[cell.to_index()] = true;
            }
        }

        Self {
            board,
            highlights,
            last_move: Some(pos),
        }
    }

    /// The board at this point in history.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mask of cells belonging to a winning line.
    pub fn highlights(&self) -> &[bool; 9] {
        &self.highlights
    }

    /// Returns true if the cell at `pos` is highlighted.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlights[pos.to_index()]
    }

    /// The cell played to reach this snapshot; `None` for game start.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Winning line on this snapshot's board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(&self.board)
    }

    /// Move-list label for this snapshot at history index `step`.
    ///
    /// `"Go to game start"` for the initial snapshot, otherwise
    /// `"Go to move #{step} ({row},{col})"` with 1-based coordinates.
    pub fn label(&self, step: usize) -> String {
        match self.last_move {
            Some(pos) if step > 0 => {
                format!("Go to move #{} ({},{})", step, pos.row() + 1, pos.col() + 1)
            }
            _ => "Go to game start".to_string(),
        }
    }
}
