//! User-triggered events that drive the game.
//!
//! Events are values, so the same transitions can come from the terminal
//! UI or from a text script (`"0 1 3 @2 8"`). Cells can also be named by
//! label (`center`, `top-left`).

use super::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameEvent {
    /// A cell was clicked.
    #[display("click {}", _0.to_index())]
    CellClicked(Position),
    /// A move-list entry was selected.
    #[display("jump to step {}", _0)]
    HistoryJump(usize),
}

/// Error parsing an event script.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ScriptError {
    /// The token is not a cell index or a jump.
    #[display("Unrecognised event '{}' (expected a cell 0-8, a cell label or @STEP)", token)]
    UnknownToken {
        /// The offending token.
        token: String,
    },
    /// The script held no events.
    #[display("Event script is empty")]
    Empty,
}

impl FromStr for GameEvent {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let unknown = || ScriptError::UnknownToken {
            token: token.to_string(),
        };

        if let Some(step) = token.strip_prefix('@').or_else(|| token.strip_prefix('j')) {
            return step
                .parse::<usize>()
                .map(GameEvent::HistoryJump)
                .map_err(|_| unknown());
        }

        Position::from_label_or_number(token)
            .map(GameEvent::CellClicked)
            .ok_or_else(unknown)
    }
}

/// Parses a script of events separated by commas and/or whitespace.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<GameEvent>, ScriptError> {
    let events = script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<GameEvent>, _>>()?;

    if events.is_empty() {
        return Err(ScriptError::Empty);
    }
    Ok(events)
}
