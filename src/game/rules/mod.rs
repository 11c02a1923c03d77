//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Nothing here knows about history
//! or turns, so the same rules apply to every step a player scrubs to.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, evaluate, winning_line};
