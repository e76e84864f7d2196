//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, MoveEntry, Position};
use tracing::{debug, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move through the move list.
    History,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// History step highlighted in the move list.
    selected_step: usize,
}

impl App {
    /// Creates an application around a game.
    pub fn new(game: GameState) -> Self {
        let selected_step = game.current_step();
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => self.switch_focus(),
            KeyCode::Char('r') => self.game.toggle_history_order(),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        Control::Continue
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected_step = self.game.current_step();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
        debug!(focus = ?self.focus, "Focus switched");
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        let target = match key {
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.cursor),
            _ => digit_position(key),
        };
        match target {
            Some(pos) => {
                self.cursor = pos;
                if self.game.apply_move(pos) {
                    self.selected_step = self.game.current_step();
                }
            }
            None => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.shift_selection(-1),
            KeyCode::Down => self.shift_selection(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.game.jump_to(self.selected_step),
            _ => {}
        }
    }

    /// Moves the selection up or down the list as currently displayed.
    fn shift_selection(&mut self, delta: isize) {
        let moves: Vec<MoveEntry> = self.game.moves();
        let Some(row) = moves.iter().position(|m| m.step == self.selected_step) else {
            return;
        };
        let target = row
            .checked_add_signed(delta)
            .filter(|r| *r < moves.len())
            .unwrap_or(row);
        self.selected_step = moves[target].step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Mark, Status};

    fn app_after(keys: &[KeyCode]) -> App {
        let mut app = App::new(GameState::new());
        for key in keys {
            assert_eq!(app.handle_key(*key), Control::Continue);
        }
        app
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(GameState::new());
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let app = app_after(&[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        let board = app.game().display_snapshot().board();
        assert_eq!(board.get(Position::TopLeft).mark(), Some(Mark::X));
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_digits_play_cells() {
        let app = app_after(&[
            KeyCode::Char('1'),
            KeyCode::Char('5'),
            KeyCode::Char('2'),
            KeyCode::Char('4'),
            KeyCode::Char('3'),
        ]);
        assert_eq!(app.game().status(), Status::Winner(Mark::X));
        assert_eq!(app.cursor(), Position::TopRight);
    }

    #[test]
    fn test_history_navigation_jumps() {
        let app = app_after(&[
            KeyCode::Char('1'),
            KeyCode::Char('5'),
            KeyCode::Tab,
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Enter,
        ]);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected_step(), 0);
        assert_eq!(app.game().current_step(), 0);
        assert_eq!(app.game().history().len(), 3);
    }

    #[test]
    fn test_selection_follows_reversed_order() {
        let app = app_after(&[
            KeyCode::Char('1'),
            KeyCode::Char('5'),
            KeyCode::Char('r'),
            KeyCode::Tab,
            KeyCode::Down,
        ]);
        assert!(app.game().reverse_display());
        // Newest-first: step 2 is on top, Down moves to step 1.
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_occupied_cell_keeps_state() {
        let mut app = app_after(&[KeyCode::Char('5')]);
        let before = app.game().clone();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game(), &before);
    }
}
