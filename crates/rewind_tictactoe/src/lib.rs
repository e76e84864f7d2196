//! Pure tic-tac-toe game logic with snapshot history.
//!
//! Every applied move appends an immutable [`Snapshot`] to the game's
//! history. The displayed position can be moved back to any earlier
//! snapshot with [`GameState::jump_to`]; playing from there discards the
//! abandoned future.
//!
//! Illegal moves (an occupied cell, or any move once a line is complete)
//! are silent no-ops rather than errors, so a rendering layer can forward
//! every click without validating it first.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Mark, Position, Status};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     game.apply_move(pos);
//! }
//! assert_eq!(game.status(), Status::Next(Mark::O));
//!
//! game.jump_to(1);
//! assert_eq!(game.history().len(), 4);
//! assert_eq!(game.next_player(), Mark::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use game::{GameState, MoveEntry, Status};
pub use position::Position;
pub use rules::{WinningLine, find_winning_line, is_full};
pub use snapshot::Snapshot;
pub use types::{Board, Cell, Mark};
