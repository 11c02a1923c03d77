//! Tic-tac-toe with a navigable move history.

mod event;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use event::{GameEvent, ScriptError, parse_script};
pub use history::{History, HistoryEntry};
pub use position::Position;
pub use rules::{evaluate, is_draw, is_full, winning_line};
pub use state::GameState;
pub use types::{Board, Mark, Square};
pub use view::{GameView, MoveListItem, PlayerLabels, Status};
