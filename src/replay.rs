//! Non-interactive play: run a script of events from a fresh game.

use crate::game::{GameState, GameView, PlayerLabels, ScriptError, parse_script};
use tracing::{info, instrument};

/// Parses `script`, dispatches every event into a new game, and returns
/// the final state.
#[instrument(skip(script), fields(script_len = script.len()))]
pub fn replay_script(script: &str) -> Result<GameState, ScriptError> {
    let events = parse_script(script)?;
    let mut game = GameState::new();
    for event in events {
        game.dispatch(event);
    }
    info!(
        step = game.current_step(),
        history_len = game.history().len(),
        "Replay finished"
    );
    Ok(game)
}

/// Like [`replay_script`], returning the view of the final step.
pub fn replay_view(script: &str, labels: &PlayerLabels) -> Result<GameView, ScriptError> {
    replay_script(script).map(|game| game.view(labels))
}
