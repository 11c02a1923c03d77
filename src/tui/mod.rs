//! Terminal UI for tictactoe_timeline

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tictactoe_timeline::Config;
use tracing::{debug, error, info, instrument};

use app::App;
use ui::HitMap;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive game until the user quits.
pub fn run_tui(config: Config) -> Result<()> {
    initialize_file_tracing(&config)?;

    info!("Starting tictactoe_timeline TUI");

    enable_raw_mode()?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            error!(error = ?err, "Terminal setup failed, restoring");
            disable_raw_mode()?;
            leave_screen(&mut io::stdout())?;
            return Err(err);
        }
    };

    let mut app = App::new(config.labels());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.game().history().latest_step(),
        "TUI closed"
    );
    res
}

/// Switches to the alternate screen with mouse capture.
fn enter_terminal() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Leaves the alternate screen and stops mouse capture.
fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

/// Draw, wait for one input, apply it, repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let mut hits = HitMap::default();
        terminal.draw(|frame| hits = ui::draw(frame, app))?;
        app.set_hit_map(hits);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = input::action_for_key(key.code) {
                    app.handle_action(action);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(mouse.column, mouse.row);
            }
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }
    }
    Ok(())
}

/// Logs go to a file so they do not interfere with the TUI.
fn initialize_file_tracing(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
