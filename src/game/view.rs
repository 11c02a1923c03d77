//! Derived, read-only values for front ends.

use super::{Board, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Game status at the viewed step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// Game continues; this mark moves next.
    #[display("Next player: {}", _0)]
    Next(Mark),
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Board is full and nobody won.
    #[display("Draw: no moves left")]
    Draw,
}

impl Status {
    /// True once no further move can be played on this board.
    pub fn is_decided(self) -> bool {
        !matches!(self, Status::Next(_))
    }
}

/// Display names for the two marks.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerLabels {
    x: String,
    o: String,
}

impl PlayerLabels {
    /// Creates labels for X and O.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Full display name for a mark, e.g. `Player 1 (X)`.
    pub fn name(&self, mark: Mark) -> String {
        let label = match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        };
        format!("{label} ({mark})")
    }

    /// Status line with player names filled in.
    pub fn status_text(&self, status: Status) -> String {
        match status {
            Status::Next(mark) => format!("Next player: {}", self.name(mark)),
            Status::Winner(mark) => format!("Winner: {}", self.name(mark)),
            Status::Draw => status.to_string(),
        }
    }
}

impl Default for PlayerLabels {
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListItem {
    /// History step this entry jumps to.
    pub step: usize,
    /// Text shown to the player.
    pub description: String,
    /// Cell played at this step (none for the start).
    pub position: Option<Position>,
    /// Whether this is the step being viewed.
    pub selected: bool,
}

/// Snapshot of everything shown for the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the current step.
    pub board: Board,
    /// The viewed step.
    pub current_step: usize,
    /// Mark to move from this step.
    pub next_mark: Mark,
    /// Derived status.
    pub status: Status,
    /// Status formatted with player names.
    pub status_text: String,
    /// Completed line, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Full move list.
    pub moves: Vec<MoveListItem>,
}

impl GameView {
    /// Plain-text rendering: board, status, then the move list.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.board.display(), self.status_text);
        for item in &self.moves {
            let marker = if item.selected { '>' } else { ' ' };
            out.push_str(&format!("{marker} {:>2}. {}\n", item.step, item.description));
        }
        out
    }
}
