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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload blocking calls
//! to the music service from the main UI thread. It provides a dedicated
//! worker loop that translates [`AppCommand`] requests into API calls and
//! broadcasts the results back to the application via [`AppEvent`]s.

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{actions::events::AppEvent, api::MusicApi, model::Track, player::PlayTicket};

#[derive(Debug)]
pub(crate) enum AppCommand {
    ResolveTrack(PlayTicket),
    Search(String),
    LoadPlaylists,
    LoadPlaylist(String),

    CreatePlaylist(String),
    DeletePlaylist(String),
    AddTrack { playlist_id: String, track: Track },
    RemoveTrack { playlist_id: String, track_id: String },
}

/// Spawns a background thread to process application commands.
///
/// The worker owns the API client and blocks on the command channel until
/// every sender has been dropped.
pub(crate) fn spawn_command_worker<A>(api: A, command_rx: Receiver<AppCommand>, event_tx: Sender<AppEvent>)
where
    A: MusicApi + Send + 'static,
{
    thread::spawn(move || {
        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(&api, request, &event_tx) {
                warn!(error = %e, "Command failed");
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
        debug!("Command channel closed, stopping worker");
    });
}

/// Orchestrates the execution of a single command.
///
/// Track resolution results, failures included, always go back to the event
/// loop since the player store decides what a failure means. Any other API
/// failure is returned as an error.
///
/// After a playlist is changed the affected listing is fetched again, so the
/// views never show a stale copy.
fn handle_command<A: MusicApi>(api: &A, command: AppCommand, event_tx: &Sender<AppEvent>) -> Result<()> {
    match command {
        AppCommand::ResolveTrack(ticket) => {
            let resolution = api.resolve_track(&ticket.track().id);
            event_tx.send(AppEvent::TrackResolved(ticket, resolution))?;
        }
        AppCommand::Search(keyword) => {
            let keyword = keyword.trim();
            if !keyword.is_empty() {
                // The search view waits for results, a failure still ends the search
                let (tracks, failure) = match api.search(keyword) {
                    Ok(tracks) => (tracks, None),
                    Err(e) => (Vec::new(), Some(e)),
                };
                event_tx.send(AppEvent::SearchResultsReady(tracks))?;
                if let Some(e) = failure {
                    return Err(e.into());
                }
            }
        }
        AppCommand::LoadPlaylists => {
            let playlists = api.playlists()?;
            event_tx.send(AppEvent::PlaylistsReady(playlists))?;
        }
        AppCommand::LoadPlaylist(id) => {
            let playlist = api.playlist(&id)?;
            event_tx.send(AppEvent::PlaylistReady(playlist))?;
        }

        AppCommand::CreatePlaylist(name) => {
            let playlist = api.create_playlist(&name)?;
            info!(id = %playlist.id, name = %playlist.name, "Created playlist");
            event_tx.send(AppEvent::Notice(format!("Created playlist {} ({})", playlist.name, playlist.id)))?;
            event_tx.send(AppEvent::PlaylistsReady(api.playlists()?))?;
        }
        AppCommand::DeletePlaylist(id) => {
            api.delete_playlist(&id)?;
            info!(%id, "Deleted playlist");
            event_tx.send(AppEvent::Notice(format!("Deleted playlist {}", id)))?;
            event_tx.send(AppEvent::PlaylistsReady(api.playlists()?))?;
        }
        AppCommand::AddTrack { playlist_id, track } => {
            let playlist = api.add_track(&playlist_id, &track)?;
            event_tx.send(AppEvent::Notice(format!("Added {} to {}", track.title, playlist.name)))?;
            event_tx.send(AppEvent::PlaylistReady(playlist))?;
        }
        AppCommand::RemoveTrack { playlist_id, track_id } => {
            api.remove_track(&playlist_id, &track_id)?;
            event_tx.send(AppEvent::Notice("Removed track from playlist".to_string()))?;
            event_tx.send(AppEvent::PlaylistReady(api.playlist(&playlist_id)?))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, sync::mpsc};

    use super::*;
    use crate::{
        api::ApiError,
        model::Playlist,
        player::{PlayRequest, PlayerStore, testing::{FakeHandle, RecordingNotifier}},
    };

    /// An in-memory music service. When `offline`, search and the playlist
    /// listing fail.
    #[derive(Default)]
    struct FakeApi {
        offline: bool,
        searches: RefCell<Vec<String>>,
        playlists: RefCell<Vec<Playlist>>,
    }

    impl FakeApi {
        fn offline() -> Self {
            Self {
                offline: true,
                ..Self::default()
            }
        }

        fn with_playlist(id: &str, tracks: Vec<Track>) -> Self {
            let api = Self::default();
            api.playlists.borrow_mut().push(Playlist {
                id: id.to_string(),
                name: "Mix".to_string(),
                description: String::new(),
                tracks,
            });
            api
        }

        fn not_found() -> ApiError {
            ApiError::Rejected {
                code: -1,
                msg: "not found".to_string(),
            }
        }
    }

    impl MusicApi for FakeApi {
        fn resolve_track(&self, track_id: &str) -> Result<String, ApiError> {
            match track_id {
                "missing" => Err(ApiError::Rejected {
                    code: 1,
                    msg: "not found".to_string(),
                }),
                id => Ok(format!("https://x/{}.mp3", id)),
            }
        }

        fn search(&self, keyword: &str) -> Result<Vec<Track>, ApiError> {
            if self.offline {
                return Err(ApiError::MissingData);
            }
            self.searches.borrow_mut().push(keyword.to_string());
            Ok(vec![Track::with_id("S1")])
        }

        fn playlists(&self) -> Result<Vec<Playlist>, ApiError> {
            if self.offline {
                return Err(ApiError::MissingData);
            }
            Ok(self.playlists.borrow().clone())
        }

        fn playlist(&self, id: &str) -> Result<Playlist, ApiError> {
            self.playlists
                .borrow()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(Self::not_found)
        }

        fn create_playlist(&self, name: &str) -> Result<Playlist, ApiError> {
            let mut playlists = self.playlists.borrow_mut();
            let playlist = Playlist {
                id: (playlists.len() + 1).to_string(),
                name: name.to_string(),
                description: String::new(),
                tracks: vec![],
            };
            playlists.push(playlist.clone());
            Ok(playlist)
        }

        fn delete_playlist(&self, id: &str) -> Result<(), ApiError> {
            let mut playlists = self.playlists.borrow_mut();
            let before = playlists.len();
            playlists.retain(|p| p.id != id);
            if playlists.len() == before {
                return Err(Self::not_found());
            }
            Ok(())
        }

        fn add_track(&self, playlist_id: &str, track: &Track) -> Result<Playlist, ApiError> {
            let mut playlists = self.playlists.borrow_mut();
            let playlist = playlists
                .iter_mut()
                .find(|p| p.id == playlist_id)
                .ok_or_else(Self::not_found)?;
            if playlist.tracks.iter().any(|t| t.id == track.id) {
                return Err(ApiError::Rejected {
                    code: -1,
                    msg: "already in playlist".to_string(),
                });
            }
            playlist.tracks.push(track.clone());
            Ok(playlist.clone())
        }

        fn remove_track(&self, playlist_id: &str, track_id: &str) -> Result<(), ApiError> {
            let mut playlists = self.playlists.borrow_mut();
            let playlist = playlists
                .iter_mut()
                .find(|p| p.id == playlist_id)
                .ok_or_else(Self::not_found)?;
            let before = playlist.tracks.len();
            playlist.tracks.retain(|t| t.id != track_id);
            if playlist.tracks.len() == before {
                return Err(Self::not_found());
            }
            Ok(())
        }
    }

    fn ticket(id: &str) -> PlayTicket {
        let mut store = PlayerStore::new(FakeHandle::default(), RecordingNotifier::default(), 1.0);
        match store.play(Some(&Track::with_id(id))) {
            PlayRequest::Resolve(ticket) => ticket,
            other => panic!("expected a resolution request, got {other:?}"),
        }
    }

    #[test]
    fn resolution_is_posted_back_with_its_ticket() {
        let (tx, rx) = mpsc::channel();
        let ticket = ticket("A");

        handle_command(&FakeApi::default(), AppCommand::ResolveTrack(ticket.clone()), &tx).unwrap();

        match rx.try_recv().unwrap() {
            AppEvent::TrackResolved(returned, Ok(url)) => {
                assert_eq!(returned, ticket);
                assert_eq!(url, "https://x/A.mp3");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn failed_resolution_is_still_posted_back() {
        let (tx, rx) = mpsc::channel();

        handle_command(&FakeApi::default(), AppCommand::ResolveTrack(ticket("missing")), &tx).unwrap();

        assert!(matches!(
            rx.try_recv().unwrap(),
            AppEvent::TrackResolved(_, Err(ApiError::Rejected { code: 1, .. }))
        ));
    }

    #[test]
    fn blank_search_is_not_sent() {
        let (tx, rx) = mpsc::channel();
        let api = FakeApi::default();

        handle_command(&api, AppCommand::Search("   ".to_string()), &tx).unwrap();
        handle_command(&api, AppCommand::Search(" lofi ".to_string()), &tx).unwrap();

        assert_eq!(api.searches.borrow().as_slice(), ["lofi".to_string()]);
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::SearchResultsReady(tracks) if tracks.len() == 1));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn failed_search_still_ends_the_search() {
        let (tx, rx) = mpsc::channel();

        let result = handle_command(&FakeApi::offline(), AppCommand::Search("lofi".to_string()), &tx);

        assert!(result.is_err());
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::SearchResultsReady(tracks) if tracks.is_empty()));
    }

    #[test]
    fn listing_failure_is_returned() {
        let (tx, rx) = mpsc::channel();

        let result = handle_command(&FakeApi::offline(), AppCommand::LoadPlaylists, &tx);

        assert!(result.is_err());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn playlist_is_loaded_by_id() {
        let (tx, rx) = mpsc::channel();
        let api = FakeApi::with_playlist("9", vec![]);

        handle_command(&api, AppCommand::LoadPlaylist("9".to_string()), &tx).unwrap();

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::PlaylistReady(p) if p.id == "9"));
    }

    #[test]
    fn created_playlist_is_announced_and_listing_refreshed() {
        let (tx, rx) = mpsc::channel();
        let api = FakeApi::default();

        handle_command(&api, AppCommand::CreatePlaylist("Late night".to_string()), &tx).unwrap();

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::Notice(m) if m == "Created playlist Late night (1)"));
        match rx.try_recv().unwrap() {
            AppEvent::PlaylistsReady(playlists) => {
                assert_eq!(playlists.len(), 1);
                assert_eq!(playlists[0].name, "Late night");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn deleted_playlist_leaves_the_listing() {
        let (tx, rx) = mpsc::channel();
        let api = FakeApi::with_playlist("4", vec![]);

        handle_command(&api, AppCommand::DeletePlaylist("4".to_string()), &tx).unwrap();

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::Notice(_)));
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::PlaylistsReady(p) if p.is_empty()));
    }

    #[test]
    fn deleting_unknown_playlist_is_an_error() {
        let (tx, rx) = mpsc::channel();

        let result = handle_command(&FakeApi::default(), AppCommand::DeletePlaylist("4".to_string()), &tx);

        assert!(result.is_err());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn added_track_updates_the_playlist() {
        let (tx, rx) = mpsc::channel();
        let api = FakeApi::with_playlist("2", vec![]);

        let command = AppCommand::AddTrack {
            playlist_id: "2".to_string(),
            track: Track::with_id("BV1"),
        };
        handle_command(&api, command, &tx).unwrap();

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::Notice(m) if m == "Added Track BV1 to Mix"));
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::PlaylistReady(p) if p.tracks.len() == 1));
    }

    #[test]
    fn adding_a_duplicate_track_is_refused() {
        let (tx, rx) = mpsc::channel();
        let api = FakeApi::with_playlist("2", vec![Track::with_id("BV1")]);

        let command = AppCommand::AddTrack {
            playlist_id: "2".to_string(),
            track: Track::with_id("BV1"),
        };
        let result = handle_command(&api, command, &tx);

        assert!(result.is_err());
        assert!(rx.try_recv().is_err());
        assert_eq!(api.playlist("2").unwrap().tracks.len(), 1);
    }

    #[test]
    fn removed_track_reloads_the_playlist() {
        let (tx, rx) = mpsc::channel();
        let api = FakeApi::with_playlist("2", vec![Track::with_id("BV1"), Track::with_id("BV2")]);

        let command = AppCommand::RemoveTrack {
            playlist_id: "2".to_string(),
            track_id: "BV1".to_string(),
        };
        handle_command(&api, command, &tx).unwrap();

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::Notice(_)));
        match rx.try_recv().unwrap() {
            AppEvent::PlaylistReady(playlist) => {
                let ids: Vec<&str> = playlist.tracks.iter().map(|t| t.id.as_str()).collect();
                assert_eq!(ids, ["BV2"]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
