//! Tic-tac-toe with a navigable move history.
//!
//! The library holds the game itself; the binary adds a terminal UI and a
//! scripted `replay` command on top of it.
//!
//! # Architecture
//!
//! - **State machine**: [`GameState`] keeps every board snapshot and the
//!   step being viewed. Clicking a cell plays the next mark and drops any
//!   future the player had jumped back from.
//! - **Rules**: [`evaluate`] finds the winning mark on one board.
//! - **View**: [`GameView`] and [`Status`] are derived on every read.
//! - **Events**: [`GameEvent`] is the only way input reaches the state.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, Mark, Position, Status};
//!
//! let mut game = GameState::new();
//! for index in [0, 1, 3, 4, 6] {
//!     game.apply_move(Position::from_index(index).unwrap());
//! }
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//!
//! game.jump_to(2);
//! assert_eq!(game.next_mark(), Mark::X);
//! assert_eq!(game.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;
mod replay;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Scripted play
pub use replay::{replay_script, replay_view};

// Crate-level exports - Game types
pub use game::invariants::{
    AlternatingTurnInvariant, AnchoredHistoryInvariant, GameInvariants,
    HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
};
pub use game::rules::LINES;
pub use game::{
    Board, GameEvent, GameState, GameView, History, HistoryEntry, Mark, MoveListItem,
    PlayerLabels, Position, ScriptError, Square, Status, evaluate, is_draw, is_full,
    parse_script, winning_line,
};
