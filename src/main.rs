//! Terminal shim and entry point.
//!
//! This is the thin integration layer between the `white_temple` library and
//! the terminal: a raw-mode crossterm event loop on the main thread, and a
//! tokio runtime on a background thread driving the worker. The shim owns no
//! application logic: it translates key presses into events, executes the
//! actions the handler returns, and re-renders when asked to.
//!
//! # Threads
//!
//! ```text
//! ┌─────────────────────────────┐
//! │  Main Thread                │
//! │  ┌───────────────────────┐  │
//! │  │ event loop + renderer │  │  ← key input, state, ANSI output
//! │  └───────────────────────┘  │
//! │       │ requests  ▲         │
//! │       ▼           │ responses
//! │  ┌───────────────────────┐  │
//! │  │ TempleWorker (tokio)  │  │  ← service futures, cancellation
//! │  └───────────────────────┘  │
//! └─────────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Landing: `c` confess, `m` messages, `d` doctrines, `q`/`Esc` quit.
//! Confession: type into the focused field, `Tab` switch field, `Enter`
//! newline, `Ctrl+S` submit, `Esc` back. Feed and doctrines: `j`/`k` scroll,
//! `r` retry (failed feed only), `Esc` back, `q` quit.

use crossterm::cursor;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{execute, terminal};
use std::io::stdout;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use white_temple::app::{handle_event, Action, AppState, Event, Screen};
use white_temple::services::{SimulatedContentStore, SimulatedSubmissionService};
use white_temple::worker::{TempleWorker, WorkerMessage, WorkerResponse};
use white_temple::{initialize, observability, ui, Config, Result};

/// How long the input poll blocks before the loop services timers and worker
/// responses again.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How long a notice banner stays on screen.
const NOTICE_LIFETIME: Duration = Duration::from_secs(4);

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("white-temple: {e}; continuing with defaults");
        Config::default()
    });
    observability::init_tracing(&config);

    let submission = Arc::new(SimulatedSubmissionService::with_latency(
        config.submit_latency(),
    ));
    let content = Arc::new(SimulatedContentStore::seeded_with_latency(
        config.fetch_latency(),
    )?);

    let mut state = initialize(&config, content.as_ref());

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    let worker = TempleWorker::new(submission, content, response_tx);
    let worker_thread = std::thread::spawn(move || match worker_runtime() {
        Ok(runtime) => runtime.block_on(worker.run(request_rx)),
        Err(e) => tracing::debug!(error = %e, "worker runtime failed to start"),
    });

    terminal::enable_raw_mode()?;
    execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run_event_loop(&mut state, &request_tx, &response_rx);

    execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    // Closing the request channel lets the worker loop finish.
    drop(request_tx);
    let _ = worker_thread.join();

    result
}

fn worker_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_time()
        .build()
}

/// The main event loop: render, gather events, handle, execute actions.
///
/// Three event sources feed the loop each turn: the notice expiry timer,
/// drained worker responses, and polled terminal input. All of them funnel
/// through [`handle_event`], so ordering and state transitions stay in one
/// place.
fn run_event_loop(
    state: &mut AppState,
    request_tx: &UnboundedSender<WorkerMessage>,
    response_rx: &Receiver<WorkerResponse>,
) -> Result<()> {
    let mut notice_shown_at: Option<Instant> = None;
    let mut redraw = true;

    loop {
        if redraw {
            let (cols, rows) = terminal::size().unwrap_or((80, 24));
            ui::render(state, rows as usize, cols as usize);
            redraw = false;
        }

        let mut events: Vec<Event> = Vec::new();

        if let Some(shown_at) = notice_shown_at {
            if shown_at.elapsed() >= NOTICE_LIFETIME {
                events.push(Event::DismissNotice);
                notice_shown_at = None;
            }
        }

        loop {
            match response_rx.try_recv() {
                Ok(response) => events.push(Event::WorkerResponse(response)),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }

        if event::poll(INPUT_POLL_INTERVAL)? {
            match event::read()? {
                TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(app_event) = map_key(state.current_screen(), &key) {
                        events.push(app_event);
                    }
                }
                TermEvent::Resize(_, _) => redraw = true,
                _ => {}
            }
        }

        for app_event in events {
            let (needs_redraw, actions) = handle_event(state, &app_event)?;
            redraw |= needs_redraw;

            for action in actions {
                match action {
                    Action::Quit => return Ok(()),
                    Action::PostToWorker(message) => {
                        if request_tx.send(message).is_err() {
                            tracing::debug!("worker unavailable, dropping message");
                        }
                    }
                    Action::Notify(notice) => {
                        state.show_notice(notice);
                        notice_shown_at = Some(Instant::now());
                        redraw = true;
                    }
                }
            }
        }
    }
}

/// Translates a key press into an application event for the mounted screen.
fn map_key(screen: Screen, key: &KeyEvent) -> Option<Event> {
    match screen {
        Screen::Landing => match key.code {
            KeyCode::Char('c') => Some(Event::Navigate(Screen::Confession)),
            KeyCode::Char('m') => Some(Event::Navigate(Screen::MessageFeed)),
            KeyCode::Char('d') => Some(Event::Navigate(Screen::Doctrines)),
            KeyCode::Char('q') | KeyCode::Esc => Some(Event::Quit),
            _ => None,
        },
        Screen::Confession => match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(Event::ReturnToLanding),
            (KeyCode::Tab | KeyCode::BackTab, _) => Some(Event::FocusNext),
            (KeyCode::Enter, _) => Some(Event::Newline),
            (KeyCode::Backspace, _) => Some(Event::Backspace),
            (KeyCode::Char('s'), m) if m.contains(KeyModifiers::CONTROL) => Some(Event::Submit),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
                Some(Event::Char(c))
            }
            _ => None,
        },
        Screen::MessageFeed => match key.code {
            KeyCode::Esc => Some(Event::ReturnToLanding),
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Event::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Event::ScrollUp),
            KeyCode::Char('r') => Some(Event::RetryLoad),
            _ => None,
        },
        Screen::Doctrines => match key.code {
            KeyCode::Esc => Some(Event::ReturnToLanding),
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Event::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Event::ScrollUp),
            _ => None,
        },
    }
}
