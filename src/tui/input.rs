//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use tictactoe_timeline::Position;

/// Cursor direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 1.
    Up,
    /// Towards row 3.
    Down,
    /// Towards column 1.
    Left,
    /// Towards column 3.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Click the cell under the cursor.
    ClickCursor,
    /// Click a cell directly.
    Click(Position),
    /// View the previous history step.
    StepBack,
    /// View the next history step.
    StepForward,
    /// View the game start.
    JumpStart,
    /// View the latest move.
    JumpLatest,
    /// Start a new game.
    Restart,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up => Action::MoveCursor(Direction::Up),
        KeyCode::Down => Action::MoveCursor(Direction::Down),
        KeyCode::Left => Action::MoveCursor(Direction::Left),
        KeyCode::Right => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::ClickCursor,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Action::Click(Position::from_index(index)?)
        }
        KeyCode::PageUp | KeyCode::Char('[') => Action::StepBack,
        KeyCode::PageDown | KeyCode::Char(']') => Action::StepForward,
        KeyCode::Home => Action::JumpStart,
        KeyCode::End => Action::JumpLatest,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one cell, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (column, row) = (cursor.column(), cursor.row());
    let (column, row) = match direction {
        Direction::Up => (column, row.saturating_sub(1)),
        Direction::Down => (column, row + 1),
        Direction::Left => (column.saturating_sub(1), row),
        Direction::Right => (column + 1, row),
    };
    Position::from_column_row(column, row).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_digit_keys_click_cells() {
        assert_eq!(
            action_for_key(KeyCode::Char('1')),
            Some(Action::Click(Position::TopLeft))
        );
        assert_eq!(
            action_for_key(KeyCode::Char('9')),
            Some(Action::Click(Position::BottomRight))
        );
        assert_eq!(action_for_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(action_for_key(KeyCode::PageUp), Some(Action::StepBack));
        assert_eq!(action_for_key(KeyCode::Char(']')), Some(Action::StepForward));
        assert_eq!(action_for_key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::Tab), None);
    }
}
