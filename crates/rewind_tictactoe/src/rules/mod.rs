//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Rules are kept apart from history
//! bookkeeping so they can be run against any snapshot, including
//! synthetic boards that no legal game could produce.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, find_winning_line};
