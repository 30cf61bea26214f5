//! Event polling, dispatching, and UI rendering loop.
//!
//! Terminal events are read on a background task and forwarded over a
//! channel. Each iteration routes pending key events, drains the action
//! queue into [`apply_actions`], spawns executors for the resulting commands
//! and redraws when anything changed.

use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::info;

use crate::api::{DocumentChatBackend, HttpBackend};
use crate::core::app::{apply_actions, AppAction, AppActionDispatcher};
use crate::ui::renderer::ui;

use super::executors::spawn_command;
use super::keybindings::{handle_key, handle_paste};
use super::lifecycle::{restore_terminal, setup_terminal, SharedTerminal};
use super::setup::{bootstrap_app, ChatOptions};
use super::AppHandle;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

async fn is_exit_requested(app: &AppHandle) -> bool {
    app.read(|app| app.ui.exit_requested).await
}

async fn try_draw_frame(
    app: &AppHandle,
    terminal: &SharedTerminal,
    request_redraw: &mut bool,
    last_draw: &mut Instant,
    frame_duration: Duration,
) -> io::Result<()> {
    if !*request_redraw {
        return Ok(());
    }

    let now = Instant::now();
    if now.duration_since(*last_draw) < frame_duration {
        return Ok(());
    }

    let mut terminal_guard = terminal.lock().await;
    app.update(|app| terminal_guard.draw(|f| ui(f, app)))
        .await?;
    *last_draw = now;
    *request_redraw = false;
    Ok(())
}

/// Route queued terminal events. Returns whether any event was seen.
async fn process_ui_events(
    app: &AppHandle,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    dispatcher: &AppActionDispatcher,
) -> bool {
    let mut events_processed = false;

    while let Ok(ev) = event_rx.try_recv() {
        events_processed = true;
        match ev {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(action) = app.update(|app| handle_key(app, &key)).await {
                    dispatcher.dispatch(action);
                }
            }
            UiEvent::Crossterm(Event::Paste(text)) => {
                app.update(|app| handle_paste(app, &text)).await;
            }
            UiEvent::Crossterm(_) => {}
        }
    }

    events_processed
}

async fn drain_action_queue(
    app: &AppHandle,
    dispatcher: &AppActionDispatcher,
    backend: &Arc<dyn DocumentChatBackend>,
    action_rx: &mut mpsc::UnboundedReceiver<AppAction>,
) -> bool {
    let mut pending = Vec::new();
    while let Ok(action) = action_rx.try_recv() {
        pending.push(action);
    }

    if pending.is_empty() {
        return false;
    }

    let commands = app.update(|app| apply_actions(app, pending)).await;
    for command in commands {
        spawn_command(backend.clone(), dispatcher.clone(), command);
    }
    true
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

pub async fn run_chat(options: ChatOptions) -> Result<(), Box<dyn Error>> {
    let backend: Arc<dyn DocumentChatBackend> =
        Arc::new(HttpBackend::new(options.server_url.clone()));
    let (app, startup_actions) = bootstrap_app(&options);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppAction>();
    let action_dispatcher = AppActionDispatcher::new(action_tx);
    action_dispatcher.dispatch_many(startup_actions);

    let terminal = setup_terminal()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    const MAX_FPS: u64 = 60;
    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw = Instant::now() - frame_duration;
    let mut request_redraw = true;

    let result = loop {
        if is_exit_requested(&app).await {
            break Ok(());
        }

        if let Err(err) = try_draw_frame(
            &app,
            &terminal,
            &mut request_redraw,
            &mut last_draw,
            frame_duration,
        )
        .await
        {
            break Err(err);
        }

        let events_processed = process_ui_events(&app, &mut event_rx, &action_dispatcher).await;
        if events_processed {
            request_redraw = true;
        }

        let actions_applied =
            drain_action_queue(&app, &action_dispatcher, &backend, &mut action_rx).await;
        if actions_applied {
            request_redraw = true;
        }

        if !events_processed && !actions_applied && !request_redraw {
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    };

    event_reader_handle.abort();
    restore_terminal(&terminal).await?;
    info!("Chat session ended");

    Ok(result?)
}
