//! Game progression and history navigation.

use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::rules::{find_winning_line, is_full};
use super::{Mark, Position, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Derived status of the displayed snapshot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Board is full with no line.
    #[display("Draw")]
    Draw,
    /// Game continues with this player to move.
    #[display("Next player: {}", _0)]
    Next(Mark),
}

/// One row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// Button text, e.g. `"Go to move #2 (1,3)"`.
    pub label: String,
    /// True for the entry at the current step.
    pub current: bool,
}

/// Tic-tac-toe game with full snapshot history.
///
/// The only owned mutable state of a session. Mutated by
/// [`apply_move`](Self::apply_move), [`jump_to`](Self::jump_to) and
/// [`toggle_history_order`](Self::toggle_history_order); everything else is a
/// read-only projection for rendering.
///
/// Deserialization rejects histories that break [`HistoryInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current_step: usize,
    pub(crate) reverse_display: bool,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Snapshot>,
    current_step: usize,
    reverse_display: bool,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvariantViolation;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            current_step: raw.current_step,
            reverse_display: raw.reverse_display,
        };
        game.check_invariants().map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejecting deserialized game");
            InvariantViolation::new(format!("Invalid game history: {}", descriptions))
        })?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game at the start position.
    #[instrument]
    pub fn new() -> Self {
        Self::with_reverse_display(false)
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_reverse_display(reverse_display: bool) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_step: 0,
            reverse_display,
        }
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Does nothing if the displayed snapshot already has a winning line or
    /// the cell is occupied. Otherwise discards any snapshots after the
    /// current step, appends the new one and moves to it.
    ///
    /// Returns whether the move was applied.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, pos: Position) -> bool {
        let current = self.display_snapshot();

        if find_winning_line(current.board()).is_some() {
            debug!("Ignoring move: game already won");
            return false;
        }
        if !current.board().is_empty(pos) {
            debug!("Ignoring move: cell occupied");
            return false;
        }

        let mark = self.next_player();
        let next = current.successor(pos, mark);

        let discarded = self.history.len() - (self.current_step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future snapshots");
        }
        self.history.truncate(self.current_step + 1);
        self.history.push(next);
        self.current_step = self.history.len() - 1;

        info!(%mark, position = %pos, step = self.current_step, "Move applied");

        debug_assert!(
            self.check_invariants().is_ok(),
            "History invariants violated: {:?}",
            self.check_invariants()
        );

        true
    }

    /// Moves the current-step pointer without touching history.
    ///
    /// Steps outside the history are ignored.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            warn!(step, "Ignoring jump past end of history");
            return;
        }
        debug!(from = self.current_step, to = step, "Jumping");
        self.current_step = step;
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_history_order(&mut self) {
        self.reverse_display = !self.reverse_display;
        debug!(reverse = self.reverse_display, "History order toggled");
    }

    /// Status of the displayed snapshot.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn status(&self) -> Status {
        let board = self.display_snapshot().board();
        if let Some(line) = find_winning_line(board) {
            Status::Winner(line.mark)
        } else if is_full(board) {
            Status::Draw
        } else {
            Status::Next(self.next_player())
        }
    }

    /// Snapshot at the current step.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn display_snapshot(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// All snapshots from game start.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Player to move at the current step.
    pub fn next_player(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Whether the move list is shown newest-first.
    pub fn reverse_display(&self) -> bool {
        self.reverse_display
    }

    /// Move list in display order.
    #[instrument(skip(self), fields(reverse = self.reverse_display))]
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                label: snapshot.label(step),
                current: step == self.current_step,
            })
            .collect();
        if self.reverse_display {
            entries.reverse();
        }
        entries
    }

    /// Text for the order toggle control.
    pub fn order_toggle_label(&self) -> &'static str {
        if self.reverse_display {
            "Show history in desc"
        } else {
            "Show history in asc"
        }
    }

    /// Checks all history invariants.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        HistoryInvariants::check_all(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
