//! The game state machine: history, current step, and its transitions.

use super::event::GameEvent;
use super::history::{History, HistoryEntry};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules;
use super::view::{GameView, MoveListItem, PlayerLabels, Status};
use super::{Board, Mark, Position};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Complete game state.
///
/// Only the history and the viewed step are stored. Whose turn it is,
/// the status and the move list are all derived from those two on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    current_step: usize,
}

impl GameState {
    /// Creates a game at the empty origin board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: History, current_step: usize) -> Self {
        Self {
            history,
            current_step,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step currently being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the history entry at the current step.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history.entries()[self.current_step]
    }

    /// Returns the board at the current step.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Mark that moves next from the current step.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Winner on the viewed board, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::evaluate(self.current_board())
    }

    /// Winning line on the viewed board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_board())
    }

    /// Status at the current step.
    pub fn status(&self) -> Status {
        let board = self.current_board();
        match rules::evaluate(board) {
            Some(mark) => Status::Winner(mark),
            None if rules::is_full(board) => Status::Draw,
            None => Status::Next(self.next_mark()),
        }
    }

    /// Plays the current mark at `pos`.
    ///
    /// Ignored when the viewed board already has a winner or `pos` is
    /// occupied. Otherwise everything after the current step is dropped and
    /// the new board becomes the latest entry.
    #[instrument(skip(self), fields(step = self.current_step, mark = %self.next_mark()))]
    pub fn apply_move(&mut self, pos: Position) {
        if let Some(winner) = self.winner() {
            debug!(%winner, "Ignoring move: game already won");
            return;
        }
        if !self.current_board().is_empty(pos) {
            debug!("Ignoring move: square occupied");
            return;
        }

        let mark = self.next_mark();
        let board = self.current_board().with_mark(pos, mark);
        let discarded = self.history.latest_step() - self.current_step;
        self.current_step = self
            .history
            .branch(self.current_step, HistoryEntry::new(board, Some(pos)));

        info!(new_step = self.current_step, discarded, "Move applied");
        self.debug_check_invariants();
    }

    /// Views the board at `step` without changing the history.
    ///
    /// Steps past the end of the history are ignored.
    #[instrument(skip(self), fields(from = self.current_step, len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            warn!("Ignoring jump outside history");
            return;
        }
        self.current_step = step;
        info!("Jumped in history");
        self.debug_check_invariants();
    }

    /// Routes an input event to its transition.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) {
        match event {
            GameEvent::CellClicked(pos) => self.apply_move(pos),
            GameEvent::HistoryJump(step) => self.jump_to(step),
        }
    }

    /// Describes the history entry at `step` for the move list.
    ///
    /// Returns `None` if `step` is outside the history.
    pub fn move_description(&self, step: usize) -> Option<String> {
        let entry = self.history.get(step)?;
        Some(match entry.position() {
            Some(pos) if step > 0 => {
                format!("Go to move #{} ({}, {})", step, pos.column(), pos.row())
            }
            _ => "Go to game start".to_string(),
        })
    }

    /// The move list, with the current step flagged.
    pub fn moves(&self) -> Vec<MoveListItem> {
        self.history
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListItem {
                step,
                description: self.move_description(step).unwrap_or_default(),
                position: *entry.position(),
                selected: step == self.current_step,
            })
            .collect()
    }

    /// Everything a front end needs to draw the current step.
    pub fn view(&self, labels: &PlayerLabels) -> GameView {
        let status = self.status();
        GameView {
            board: self.current_board().clone(),
            current_step: self.current_step,
            next_mark: self.next_mark(),
            status,
            status_text: labels.status_text(status),
            winning_line: self.winning_line(),
            moves: self.moves(),
        }
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            let checked = GameInvariants::check_all(self);
            debug_assert!(checked.is_ok(), "Game invariants violated: {checked:?}");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
