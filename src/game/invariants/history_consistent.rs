//! History consistency invariant: each step adds exactly one mark.

use super::super::GameState;
use super::Invariant;

/// Invariant: every entry after the origin records the cell it filled.
///
/// The recorded cell was empty one step earlier, and nothing else on the
/// board changed. Step `k` therefore always has `k` occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().entries().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            match *pair[1].position() {
                Some(pos) => match after.get(pos).mark() {
                    Some(mark) => before.is_empty(pos) && before.with_mark(pos, mark) == *after,
                    None => false,
                },
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark at its recorded cell"
    }
}
