use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::app::App;
use crate::ui;

mod event;
mod key_handler;
pub mod mode;
mod terminal;

const TICK_INTERVAL: Duration = Duration::from_millis(50);

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub(crate) enum EventResult {
    Continue,
    Quit,
}

/// Runs the TUI event/render loop until the user exits.
///
/// # Errors
/// Returns an error if terminal setup, rendering, or event processing fails.
pub async fn run(app: &mut App) -> io::Result<()> {
    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;

    // Terminal input is read on a dedicated thread so the loop can keep
    // draining directory change events between key presses.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let shutdown = Arc::new(AtomicBool::new(false));
    event::spawn_event_reader(event_tx, Arc::clone(&shutdown));

    let mut tick = tokio::time::interval(TICK_INTERVAL);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    run_main_loop(app, &mut terminal, &mut event_rx, &mut tick).await?;

    shutdown.store(true, Ordering::Relaxed);
    terminal.show_cursor()?;

    Ok(())
}

async fn run_main_loop(
    app: &mut App,
    terminal: &mut TuiTerminal,
    event_rx: &mut mpsc::UnboundedReceiver<crossterm::event::Event>,
    tick: &mut tokio::time::Interval,
) -> io::Result<()> {
    loop {
        render_frame(app, terminal)?;

        if matches!(
            event::process_events(app, event_rx, tick).await,
            EventResult::Quit
        ) {
            break;
        }
    }

    Ok(())
}

fn render_frame(app: &App, terminal: &mut TuiTerminal) -> io::Result<()> {
    let rows = app.rows();

    terminal.draw(|frame| {
        ui::render(
            frame,
            ui::RenderContext {
                can_open_selection: app.can_open_selection(),
                current_directory: app.current_directory(),
                is_watching: app.is_watching(),
                mode: &app.mode,
                preview: app.preview(),
                preview_scroll: app.preview_scroll(),
                rows: &rows,
                selected_index: app.selected_index(),
                status_message: app.status_message(),
            },
        );
    })?;

    Ok(())
}
