//! Anchored history invariant: the history starts at an empty board and
//! the viewed step points inside it.

use super::super::GameState;
use super::Invariant;

/// Invariant: entry 0 is the empty origin and `current_step < len`.
pub struct AnchoredHistoryInvariant;

impl Invariant<GameState> for AnchoredHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let origin_ok = history
            .get(0)
            .is_some_and(|entry| entry.board().occupied() == 0 && entry.position().is_none());

        origin_ok && game.current_step() < history.len()
    }

    fn description() -> &'static str {
        "History starts at an empty board and the viewed step is inside it"
    }
}
