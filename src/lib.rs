//! Rewind - tic-tac-toe with move history and time travel.
//!
//! The game logic lives in [`rewind_tictactoe`]; this crate adds the
//! command-line surface, configuration, logging and two rendering layers:
//! an interactive terminal UI and a plain-text/JSON [`Report`].
//!
//! # Example
//!
//! ```
//! use rewind::{GameState, Position, Report};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::Center);
//! let report = Report::from_game(&game);
//! assert_eq!(report.status_text(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod logging;
mod report;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError};

// Crate-level exports - Rendering
pub use report::{Report, ReplayError, replay};
pub use tui::{App, Control, Focus, run_tui};

// Crate-level exports - Game types
pub use rewind_tictactoe::{
    Board, Cell, GameState, Mark, MoveEntry, Position, Snapshot, Status, WinningLine,
};
