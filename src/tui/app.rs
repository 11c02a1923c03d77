//! Application state and logic.

use tictactoe_timeline::{GameEvent, GameState, PlayerLabels, Position};
use tracing::{debug, info, instrument};

use super::input::{Action, move_cursor};
use super::ui::HitMap;

/// Main application state.
///
/// Owns the single game. Every input is turned into a [`GameEvent`] and
/// dispatched; nothing else mutates the game.
pub struct App {
    game: GameState,
    labels: PlayerLabels,
    cursor: Position,
    hit_map: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(labels: PlayerLabels) -> Self {
        Self {
            game: GameState::new(),
            labels,
            cursor: Position::Center,
            hit_map: HitMap::default(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Player names.
    pub fn labels(&self) -> &PlayerLabels {
        &self.labels
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stores where the last frame put each clickable element.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Handles a keyboard action.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) {
        let step = self.game.current_step();
        let latest = self.game.history().latest_step();

        match action {
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::ClickCursor => self.dispatch(GameEvent::CellClicked(self.cursor)),
            Action::Click(pos) => {
                self.cursor = pos;
                self.dispatch(GameEvent::CellClicked(pos));
            }
            Action::StepBack if step > 0 => self.dispatch(GameEvent::HistoryJump(step - 1)),
            Action::StepForward if step < latest => {
                self.dispatch(GameEvent::HistoryJump(step + 1));
            }
            Action::JumpStart => self.dispatch(GameEvent::HistoryJump(0)),
            Action::JumpLatest => self.dispatch(GameEvent::HistoryJump(latest)),
            Action::StepBack | Action::StepForward => {
                debug!("Already at the end of the history");
            }
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a left click at terminal coordinates.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if let Some(pos) = self.hit_map.cell_at(column, row) {
            self.cursor = pos;
            self.dispatch(GameEvent::CellClicked(pos));
        } else if let Some(step) = self.hit_map.step_at(column, row) {
            self.dispatch(GameEvent::HistoryJump(step));
        } else {
            debug!("Click outside any control");
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::new();
        self.cursor = Position::Center;
    }

    fn dispatch(&mut self, event: GameEvent) {
        debug!(%event, "Dispatching game event");
        self.game.dispatch(event);
    }
}
