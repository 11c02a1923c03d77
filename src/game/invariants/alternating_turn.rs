//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the mark placed to reach step `k` belongs to `Mark::for_step(k - 1)`,
/// and the next mark follows the parity of the viewed step.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let placed_in_turn = game
            .history()
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| {
                entry
                    .position()
                    .and_then(|pos| entry.board().get(pos).mark())
                    == Some(Mark::for_step(step - 1))
            });

        placed_in_turn && game.next_mark() == Mark::for_step(game.current_step())
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
