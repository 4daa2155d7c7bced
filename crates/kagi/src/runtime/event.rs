use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::app::App;
use crate::runtime::{EventResult, key_handler};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub(crate) fn spawn_event_reader(
    event_tx: mpsc::UnboundedSender<Event>,
    shutdown: Arc<AtomicBool>,
) {
    std::thread::spawn(move || {
        while !shutdown.load(Ordering::Relaxed) {
            match crossterm::event::poll(POLL_INTERVAL) {
                Ok(true) => {
                    if let Ok(event) = crossterm::event::read()
                        && event_tx.send(event).is_err()
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

pub(crate) async fn process_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    tick: &mut tokio::time::Interval,
) -> EventResult {
    enum LoopSignal {
        Event(Option<Event>),
        Tick,
    }

    // Wait for either a terminal event or the next tick. Ticks apply queued
    // directory change events and trigger a redraw.
    let signal = tokio::select! {
        biased;
        event = event_rx.recv() => LoopSignal::Event(event),
        _ = tick.tick() => LoopSignal::Tick,
    };
    let maybe_event = match signal {
        LoopSignal::Event(None) => return EventResult::Quit,
        LoopSignal::Event(event) => event,
        LoopSignal::Tick => {
            app.process_pending_app_events().await;
            None
        }
    };

    if matches!(process_event(app, maybe_event).await, EventResult::Quit) {
        return EventResult::Quit;
    }

    // Drain remaining queued key presses before re-rendering.
    while let Ok(event) = event_rx.try_recv() {
        if matches!(process_event(app, Some(event)).await, EventResult::Quit) {
            return EventResult::Quit;
        }
    }

    EventResult::Continue
}

async fn process_event(app: &mut App, event: Option<Event>) -> EventResult {
    if let Some(Event::Key(key)) = event
        && key.kind == KeyEventKind::Press
    {
        return key_handler::handle_key_event(app, key).await;
    }

    EventResult::Continue
}
