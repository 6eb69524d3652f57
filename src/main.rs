// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Music Player TUI.
//!
//! A terminal client for a streaming music service.
//!
//! This application coordinates a TUI frontend built with `ratatui`, a
//! blocking HTTP client for the music service and an MPV playback worker.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering, and
//!   owns the router and the player store.
//! * **Background Workers** resolve track URLs and fetch search results and
//!   playlists via asynchronous command processing, while MPV streams audio
//!   on its own thread.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod api;
mod commander;
mod components;
mod config;
mod model;
mod player;
mod render;
mod router;
mod theme;
mod util;

use std::{
    fs::File,
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::event;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, process_events},
    },
    api::ApiClient,
    commander::Commander,
    components::{HomeView, PlaylistView, SearchView},
    config::AppConfig,
    player::{MpvHandle, PlaybackHandle, PlayerStore},
    router::Router,
    theme::Theme,
    util::term::{Tui, restore_terminal, setup_terminal},
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub router: Router,
    pub player: PlayerStore<MpvHandle, Sender<AppEvent>>,

    pub home_view: HomeView,
    pub search_view: SearchView,
    pub playlist_view: PlaylistView,

    pub commander: Commander,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: &AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut handle = MpvHandle::new();
        handle.subscribe(Box::new(event_tx.clone()));

        let player = PlayerStore::new(handle, event_tx.clone(), config.volume);

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            command_tx,
            router: Router::new(),
            player,
            home_view: HomeView::new(),
            search_view: SearchView::new(),
            playlist_view: PlaylistView::new(),
            commander: Commander::new(),
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config)?;
    info!(api = %config.api_base_url, "Starting");

    let api = ApiClient::new(&config.api_base_url).context("Failed to create music service client")?;

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(&config, command_tx);

    let mut terminal = setup_terminal(Theme::to_hex(app.theme.background_colour).as_deref())?;
    let res = run(&mut terminal, &mut app, api, command_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Sends diagnostics to the configured log file, the terminal belongs to the
/// TUI.
///
/// The filter comes from `RUST_LOG` when set.
fn init_logging(config: &AppConfig) -> Result<()> {
    let path = config.log_path();
    let file = File::create(&path).with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("earshot=info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A command worker to process asynchronous [`AppCommand`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Tui, app: &mut App, api: ApiClient, command_rx: Receiver<AppCommand>) -> Result<()> {
    // Spawn a background worker to process application commands asynchronously.
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(api, command_rx, command_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Initial trigger to populate the home view with the playlists
    app.command_tx
        .send(AppCommand::LoadPlaylists)
        .context("Command worker is not running")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
