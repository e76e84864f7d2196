//! Plain-text and JSON rendering of a game for the `play` command.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::{GameState, Mark, MoveEntry, Position, Status};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Error replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A cell index outside 0-8.
    #[display("Cell {} is not on the board", cell)]
    CellOutOfRange {
        /// The rejected index.
        cell: u8,
    },
    /// A jump target past the end of history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// The rejected step.
        step: usize,
        /// History length at the time of the jump.
        len: usize,
    },
}

/// Plays `cells` in order from a new game, then jumps to `jump` if given.
///
/// Moves the game ignores (occupied cell, play after a win) are logged and
/// skipped. A jump past the end of history is an error here because the
/// step came from the user rather than from the rendered move list.
#[instrument]
pub fn replay(
    cells: &[u8],
    jump: Option<usize>,
    reverse: bool,
) -> Result<GameState, ReplayError> {
    let mut game = GameState::with_reverse_display(reverse);

    for &cell in cells {
        let pos =
            Position::from_index(cell as usize).ok_or(ReplayError::CellOutOfRange { cell })?;
        if !game.apply_move(pos) {
            info!(cell, "Move ignored");
        }
    }

    if let Some(step) = jump {
        let len = game.history().len();
        if step >= len {
            return Err(ReplayError::StepOutOfRange { step, len });
        }
        game.jump_to(step);
    }

    debug!(status = %game.status(), "Game replayed");
    Ok(game)
}

/// Read-only projection of a game at its current step.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Report {
    /// Displayed history index.
    step: usize,
    /// Cell marks in row-major order.
    cells: [Option<Mark>; 9],
    /// Winning-line mask for the displayed snapshot.
    highlights: [bool; 9],
    /// Derived game status.
    status: Status,
    /// Status line as shown to players.
    status_text: String,
    /// Order toggle text.
    order_toggle: String,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
}

impl Report {
    /// Captures the displayed state of `game`.
    #[instrument(skip(game), fields(step = game.current_step()))]
    pub fn from_game(game: &GameState) -> Self {
        let snapshot = game.display_snapshot();
        let status = game.status();
        Self {
            step: game.current_step(),
            cells: snapshot.board().cells().map(|cell| cell.mark()),
            highlights: *snapshot.highlights(),
            status,
            status_text: status.to_string(),
            order_toggle: game.order_toggle_label().to_string(),
            moves: game.moves(),
        }
    }

    /// Renders the board, status line and numbered move list.
    ///
    /// Winning cells are wrapped in brackets and the current move is
    /// marked with `>`.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| {
                    let idx = row * 3 + col;
                    let mark = self.cells[idx].map_or_else(|| ".".to_string(), |m| m.to_string());
                    if self.highlights[idx] {
                        format!("[{}]", mark)
                    } else {
                        format!(" {} ", mark)
                    }
                })
                .collect();
            out.push_str(line.join("|").trim_end());
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.status_text);
        out.push_str("\n\n");
        out.push_str(&self.order_toggle);
        out.push('\n');
        for (n, entry) in self.moves.iter().enumerate() {
            let marker = if entry.current { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, n + 1, entry.label));
        }
        out
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Output for the `play` command: JSON when `json` is set, otherwise text.
    ///
    /// Always ends with a newline.
    pub fn render(&self, json: bool) -> serde_json::Result<String> {
        if json {
            Ok(format!("{}\n", self.to_json()?))
        } else {
            Ok(self.render_text())
        }
    }
}
