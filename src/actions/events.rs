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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (music service results, playback handle events), and the UI rendering
//! pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state,
//!    feeds the player store, sends commands to the background worker, and
//!    follows route changes.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::{sync::mpsc::Sender, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use tracing::{debug, info};

use crate::{
    App,
    actions::commands::AppCommand,
    api::ApiError,
    commander::MessageLevel,
    model::{Playlist, Track},
    player::{Notifier, PlayRequest, PlayTicket, PlaybackEvent, PlaybackObserver},
    render::draw,
    router::Route,
    util::term::Tui,
};

const VOLUME_STEP: f64 = 0.05;

const SEEK_STEP: f64 = 5.0;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    Navigate(String),
    Back,

    PlayTrack(Track),
    TogglePlay,
    Seek(f64),
    SetVolume(f64),

    Playback(PlaybackEvent),
    TrackResolved(PlayTicket, Result<String, ApiError>),

    Search(String),
    SearchResultsReady(Vec<Track>),
    PlaylistsReady(Vec<Playlist>),
    PlaylistReady(Playlist),

    CreatePlaylist(String),
    DeletePlaylist(String),
    /// Adds the track selected in the current view to the given playlist.
    AddSelectedTrack(String),
    /// Removes the selected track from the open playlist.
    RemoveSelectedTrack,

    Notice(String),
    Error(String),

    ExitApplication,
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a quit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            info!("Exit requested");
            break;
        }

        process_event(app, event)?;

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn process_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Tick => app.commander.expire_message(Instant::now()),

        AppEvent::Navigate(path) => match app.router.push(&path).cloned() {
            Ok(route) => enter_route(app, &route)?,
            Err(e) => app.commander.show_message(MessageLevel::Error, e.to_string(), Instant::now()),
        },
        AppEvent::Back => {
            if let Some(route) = app.router.back().cloned() {
                enter_route(app, &route)?;
            }
        }

        // Player
        AppEvent::PlayTrack(track) => {
            let request = app.player.play(Some(&track));
            dispatch_play_request(app, request)?;
        }
        AppEvent::TogglePlay => {
            let request = app.player.toggle_play();
            dispatch_play_request(app, request)?;
        }
        AppEvent::Seek(seconds) => app.player.seek(seconds),
        AppEvent::SetVolume(level) => app.player.set_volume(level),
        AppEvent::Playback(playback_event) => app.player.handle_event(playback_event),
        AppEvent::TrackResolved(ticket, resolution) => {
            // The store has already told the user, nothing else reacts to a
            // rejected play request yet
            if let Err(e) = app.player.complete(ticket, resolution) {
                debug!(error = %e, "Play request rejected");
            }
        }

        // Music service
        AppEvent::Search(keyword) => app.command_tx.send(AppCommand::Search(keyword))?,
        AppEvent::SearchResultsReady(tracks) => app.search_view.set_results(tracks),
        AppEvent::PlaylistsReady(playlists) => app.home_view.set_playlists(playlists),
        AppEvent::PlaylistReady(playlist) => app.playlist_view.set_playlist(playlist),

        // Playlist management
        AppEvent::CreatePlaylist(name) => app.command_tx.send(AppCommand::CreatePlaylist(name))?,
        AppEvent::DeletePlaylist(id) => app.command_tx.send(AppCommand::DeletePlaylist(id))?,
        AppEvent::AddSelectedTrack(playlist_id) => match selected_track(app) {
            Some(track) => app.command_tx.send(AppCommand::AddTrack { playlist_id, track })?,
            None => app.commander.show_message(MessageLevel::Error, "No track selected".to_string(), Instant::now()),
        },
        AppEvent::RemoveSelectedTrack => match app.playlist_view.selected() {
            Some((playlist_id, track_id)) if matches!(app.router.current(), Route::Playlist { .. }) => {
                app.command_tx.send(AppCommand::RemoveTrack { playlist_id, track_id })?;
            }
            _ => app.commander.show_message(
                MessageLevel::Error,
                "Select a track in a playlist first".to_string(),
                Instant::now(),
            ),
        },

        AppEvent::Notice(message) => app.commander.show_message(MessageLevel::Info, message, Instant::now()),
        AppEvent::Error(message) => app.commander.show_message(MessageLevel::Error, message, Instant::now()),

        AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Performs whatever the route needs on entry, typically fetching its data.
fn enter_route(app: &mut App, route: &Route) -> Result<()> {
    debug!(route = route.name(), path = %route.path(), "Entering route");

    match route {
        Route::Home => app.command_tx.send(AppCommand::LoadPlaylists)?,
        Route::Search => app.search_view.focus_input(),
        Route::Playlist { id } => {
            app.playlist_view.open(id);
            app.command_tx.send(AppCommand::LoadPlaylist(id.clone()))?;
        }
    }

    Ok(())
}

/// The track highlighted in the current view, falling back to the one loaded
/// in the player.
fn selected_track(app: &App) -> Option<Track> {
    let selected = match app.router.current() {
        Route::Home => None,
        Route::Search => app.search_view.results.current_track(),
        Route::Playlist { .. } => app.playlist_view.track_table.current_track(),
    };
    selected.or(app.player.current_track()).cloned()
}

fn dispatch_play_request(app: &mut App, request: PlayRequest) -> Result<()> {
    if let PlayRequest::Resolve(ticket) = request {
        app.command_tx.send(AppCommand::ResolveTrack(ticket))?;
    }
    Ok(())
}

/// Routes a key press to the command line, the current view, then the global
/// key bindings.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.commander.handle_key(key, &app.event_tx)? {
        return Ok(());
    }

    let event = Event::Key(key);

    match app.router.current() {
        Route::Home => app.home_view.process_event(&event, &app.event_tx)?,
        Route::Search => {
            let editing = app.search_view.is_editing();
            app.search_view.process_event(&event, &app.event_tx)?;
            // Keys typed into the search box are not shortcuts
            if editing {
                return Ok(());
            }
        }
        Route::Playlist { .. } => app.playlist_view.process_event(&event, &app.event_tx)?,
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = match key.code {
        KeyCode::Char('q') => Some(AppEvent::ExitApplication),

        KeyCode::Char('1') => Some(AppEvent::Navigate(Route::Home.path())),
        KeyCode::Char('2') => Some(AppEvent::Navigate(Route::Search.path())),
        KeyCode::Char('b') | KeyCode::Backspace => Some(AppEvent::Back),

        // Playback controls, range checks are the caller's job
        KeyCode::Char(' ') => Some(AppEvent::TogglePlay),
        KeyCode::Char(',') => Some(AppEvent::Seek((app.player.progress() - SEEK_STEP).max(0.0))),
        KeyCode::Char('.') => Some(AppEvent::Seek(app.player.progress() + SEEK_STEP)),
        KeyCode::Char('-') => Some(AppEvent::SetVolume((app.player.volume() - VOLUME_STEP).clamp(0.0, 1.0))),
        KeyCode::Char('=') | KeyCode::Char('+') => {
            Some(AppEvent::SetVolume((app.player.volume() + VOLUME_STEP).clamp(0.0, 1.0)))
        }

        _ => None,
    };

    if let Some(event) = event {
        app.event_tx.send(event)?;
    }

    Ok(())
}

impl Notifier for Sender<AppEvent> {
    fn notify_error(&self, message: &str) {
        // The event loop owns the receiver, if it has gone so has the UI
        let _ = self.send(AppEvent::Error(message.to_string()));
    }
}

impl PlaybackObserver for Sender<AppEvent> {
    fn on_event(&self, event: PlaybackEvent) {
        let _ = self.send(AppEvent::Playback(event));
    }
}
