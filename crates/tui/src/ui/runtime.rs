//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that multiplexes input, animation ticks, and
//!   finished background tasks.
//! - Turn `Effect`s into spawned work via [`cmd`] and feed each
//!   `ExecOutcome` back into `App::update` as a `Msg`.
//!
//! Ticking strategy
//! - Fast interval (100 ms) while generating so the throbber animates; slow
//!   interval otherwise. Timers for generation and the deploy banner are
//!   separate tasks and do not depend on the ticker.

use std::time::Duration;

use anyhow::{Context, Result};
use appforge_types::{Effect, ExecOutcome, Msg};
use appforge_util::ForgeConfig;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::app::App;
use crate::cmd;
use crate::ui::main_component::{KeyOutcome, MainView};

type PendingExecs = FuturesUnordered<JoinHandle<ExecOutcome>>;

/// Spawn a dedicated blocking task that reads terminal input and forwards
/// `crossterm` events over a Tokio channel.
///
/// Keeping `poll()` and `read()` on the same OS thread avoids lost or delayed
/// events in some terminals.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::task::spawn_blocking(move || {
        let poll_interval = Duration::from_millis(16);
        loop {
            if sender.is_closed() {
                break;
            }
            match event::poll(poll_interval) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!("Failed to poll terminal events: {}", error);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        main_view.render(frame, area, app);
    })?;
    Ok(())
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal on exit (including on error).
pub async fn run_app(config: ForgeConfig) -> Result<()> {
    let mut app = App::new(config);
    let mut main_view = MainView::new();
    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver).await;

    input_receiver.close();
    let cleanup = cleanup_terminal(&mut terminal);
    result.and(cleanup)
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    let mut pending_execs: PendingExecs = FuturesUnordered::new();

    let fast_interval = Duration::from_millis(100);
    let idle_interval = Duration::from_millis(1000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("tui started");
    render(terminal, app, main_view)?;

    loop {
        let target_interval = if app.is_generating() { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut effects: Vec<Effect> = Vec::new();
        let mut needs_render = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                match event {
                    Event::Key(key_event) => match main_view.handle_key_events(app, key_event) {
                        KeyOutcome::Quit => break,
                        KeyOutcome::Continue(new_effects) => effects.extend(new_effects),
                    },
                    Event::Resize(width, height) => effects.extend(main_view.handle_message(app, Msg::Resize(width, height))),
                    _ => {}
                }
                needs_render = true;
            }

            _ = ticker.tick() => {
                needs_render = app.is_generating();
                effects.extend(main_view.handle_message(app, Msg::Tick));
            }

            Some(joined) = pending_execs.next(), if !pending_execs.is_empty() => {
                let outcome = joined.unwrap_or_else(|error| ExecOutcome::Log(format!("Background task failed: {error}")));
                effects.extend(main_view.handle_message(app, Msg::from(outcome)));
                needs_render = true;
            }

            _ = signal::ctrl_c() => { break; }
        }

        process_effects(app, main_view, effects, &mut pending_execs);

        if needs_render {
            render(terminal, app, main_view)?;
        }
    }

    info!(pending = pending_execs.len(), "tui stopped");
    for handle in pending_execs.iter() {
        handle.abort();
    }
    Ok(())
}

/// Runs effects until no new ones are produced.
///
/// Spawned work lands in `pending_execs`; synchronous outcomes (clipboard)
/// are applied right away and may yield further effects.
fn process_effects(app: &mut App, main_view: &mut MainView, mut effects: Vec<Effect>, pending_execs: &mut PendingExecs) {
    while !effects.is_empty() {
        let batch = cmd::run_from_effects(app, std::mem::take(&mut effects));
        pending_execs.extend(batch.pending);
        for outcome in batch.immediate {
            effects.extend(main_view.handle_message(app, Msg::from(outcome)));
        }
    }
}
