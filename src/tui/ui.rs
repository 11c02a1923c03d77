//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_timeline::{GameView, Mark, MoveListItem, Position, Square};

use super::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const MOVE_LIST_WIDTH: u16 = 34;

/// Screen areas of the clickable elements of the last frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    cells: Vec<(Position, Rect)>,
    steps: Vec<(usize, Rect)>,
}

impl HitMap {
    /// Records the area of a board cell.
    pub fn add_cell(&mut self, pos: Position, area: Rect) {
        self.cells.push((pos, area));
    }

    /// Records the area of a move-list entry.
    pub fn add_step(&mut self, step: usize, area: Rect) {
        self.steps.push((step, area));
    }

    /// Board cell at the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .find(|(_, area)| area.contains((column, row).into()))
            .map(|(pos, _)| *pos)
    }

    /// History step at the given terminal coordinates.
    pub fn step_at(&self, column: u16, row: u16) -> Option<usize> {
        self.steps
            .iter()
            .find(|(_, area)| area.contains((column, row).into()))
            .map(|(step, _)| *step)
    }
}

/// Draws the whole screen and returns where the clickable parts ended up.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let view = app.game().view(app.labels());
    let mut hits = HitMap::default();

    let [title_area, body, status_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3 * CELL_HEIGHT + 2),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let [board_area, moves_area] =
        Layout::horizontal([Constraint::Min(3 * CELL_WIDTH + 2), Constraint::Length(MOVE_LIST_WIDTH)])
            .areas(body);
    draw_board(frame, board_area, &view, app.cursor(), &mut hits);
    draw_moves(frame, moves_area, &view.moves, &mut hits);

    let status = Paragraph::new(view.status_text.as_str())
        .style(Style::new().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);

    let help = Paragraph::new(
        "click/arrows+enter/1-9: play  [ ]: step  home/end: start/latest  r: restart  q: quit",
    )
    .style(Style::new().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, help_area);

    hits
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, hits: &mut HitMap) {
    let board_area = center_rect(area, 3 * CELL_WIDTH, 3 * CELL_HEIGHT);
    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]).split(board_area);

    for pos in Position::ALL {
        let cols = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3]).split(rows[pos.row() - 1]);
        let cell_area = cols[pos.column() - 1];
        draw_cell(frame, cell_area, view, cursor, pos);
        hits.add_cell(pos, cell_area);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, pos: Position) {
    let (symbol, mut style) = match view.board.get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::new().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = view
        .winning_line
        .is_some_and(|line| line.contains(&pos));
    if on_winning_line {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let border_style = if pos == cursor {
        Style::new().fg(Color::White)
    } else {
        Style::new().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(Line::from(Span::styled(format!(" {symbol} "), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(cell, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, moves: &[MoveListItem], hits: &mut HitMap) {
    let block = Block::default().title("History").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let offset = scroll_offset(moves, inner.height);
    for (item, y) in moves.iter().skip(offset).zip(inner.y..inner.bottom()) {
        let row = Rect::new(inner.x, y, inner.width, 1);
        let style = if item.selected {
            Style::new().fg(Color::Black).bg(Color::White)
        } else {
            Style::new().fg(Color::Gray)
        };
        let text = format!("{:>2}. {}", item.step, item.description);
        frame.render_widget(Paragraph::new(Span::styled(text, style)), row);
        hits.add_step(item.step, row);
    }
}

/// First entry to show so the selected one stays inside `height` rows.
fn scroll_offset(moves: &[MoveListItem], height: u16) -> usize {
    let height = usize::from(height);
    let selected = moves.iter().position(|m| m.selected).unwrap_or(0);
    if height == 0 {
        0
    } else {
        (selected + 1).saturating_sub(height)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, vert, _] = Layout::vertical([
        Constraint::Length(area.height.saturating_sub(height) / 2),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(area);

    let [_, centered, _] = Layout::horizontal([
        Constraint::Length(area.width.saturating_sub(width) / 2),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .areas(vert);

    centered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_timeline::PlayerLabels;

    fn render(app: &App, width: u16, height: u16) -> HitMap {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        let mut hits = HitMap::default();
        terminal
            .draw(|frame| hits = draw(frame, app))
            .expect("draw to test backend");
        hits
    }

    fn mapped_steps(hits: &HitMap) -> Vec<usize> {
        hits.steps.iter().map(|(step, _)| *step).collect()
    }

    fn finished_draw_game() -> App {
        let mut app = App::new(PlayerLabels::default());
        // X O X / X O O / O X X
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            let pos = Position::from_index(index).expect("index 0-8");
            app.handle_action(Action::Click(pos));
        }
        app
    }

    #[test]
    fn test_render_maps_every_cell_and_step() {
        let app = finished_draw_game();
        let hits = render(&app, 80, 24);

        let mut cells: Vec<Position> = hits.cells.iter().map(|(pos, _)| *pos).collect();
        cells.sort();
        assert_eq!(cells, Position::ALL.to_vec());
        assert_eq!(mapped_steps(&hits), (0..=9).collect::<Vec<_>>());

        for (pos, area) in &hits.cells {
            assert_eq!(hits.cell_at(area.x + 1, area.y + 1), Some(*pos));
        }
        for (step, area) in &hits.steps {
            assert_eq!(hits.step_at(area.x, area.y), Some(*step));
        }
    }

    #[test]
    fn test_short_terminal_scrolls_to_selected_step() {
        let app = finished_draw_game();
        let hits = render(&app, 80, 16);

        let steps = mapped_steps(&hits);
        assert!(steps.contains(&9), "latest step must stay clickable: {steps:?}");
        assert_eq!(steps.first(), Some(&1));
    }

    #[test]
    fn test_short_terminal_keeps_start_visible_when_rewound() {
        let mut app = finished_draw_game();
        app.handle_action(Action::JumpStart);
        let hits = render(&app, 80, 16);

        let steps = mapped_steps(&hits);
        assert_eq!(steps.first(), Some(&0));
        assert!(!steps.contains(&9));
    }

    #[test]
    fn test_scroll_offset() {
        let app = finished_draw_game();
        let moves = app.game().moves();
        assert_eq!(scroll_offset(&moves, 10), 0);
        assert_eq!(scroll_offset(&moves, 9), 1);
        assert_eq!(scroll_offset(&moves, 3), 7);
        assert_eq!(scroll_offset(&moves, 0), 0);
    }
}
