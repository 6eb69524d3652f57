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

//! Playlist detail view.
//!
//! Shows the tracks of the playlist named by the `/playlist/:id` route. The
//! view is told which id it is showing when the route is entered and ignores
//! any playlist that arrives for a different id.

mod event;
mod render;

use crate::{components::TrackTable, model::Playlist};

pub(crate) struct PlaylistView {
    pub(crate) track_table: TrackTable,
    playlist_id: Option<String>,
    playlist: Option<Playlist>,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            track_table: TrackTable::new(),
            playlist_id: None,
            playlist: None,
        }
    }

    /// Starts showing playlist `id`, its contents follow later.
    pub(crate) fn open(&mut self, id: &str) {
        if self.playlist_id.as_deref() != Some(id) {
            self.playlist = None;
            self.track_table.set_tracks(vec![]);
        }
        self.playlist_id = Some(id.to_string());
    }

    /// The open playlist's id and the id of its highlighted track.
    pub(crate) fn selected(&self) -> Option<(String, String)> {
        let playlist_id = self.playlist_id.clone()?;
        let track = self.track_table.current_track()?;
        Some((playlist_id, track.id.clone()))
    }

    pub(crate) fn set_playlist(&mut self, playlist: Playlist) {
        if self.playlist_id.as_deref() != Some(playlist.id.as_str()) {
            return;
        }
        self.track_table.set_tracks(playlist.tracks.clone());
        self.playlist = Some(playlist);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Track;

    fn playlist(id: &str) -> Playlist {
        Playlist {
            id: id.to_string(),
            name: format!("List {}", id),
            description: String::new(),
            tracks: vec![Track::with_id("t1")],
        }
    }

    #[test]
    fn accepts_playlist_for_opened_id() {
        let mut view = PlaylistView::new();
        view.open("1");

        view.set_playlist(playlist("1"));

        assert_eq!(view.track_table.tracks().len(), 1);
    }

    #[test]
    fn selection_names_playlist_and_track() {
        let mut view = PlaylistView::new();
        assert_eq!(view.selected(), None);

        view.open("1");
        view.set_playlist(playlist("1"));

        assert_eq!(view.selected(), Some(("1".to_string(), "t1".to_string())));
    }

    #[test]
    fn ignores_playlist_for_another_id() {
        let mut view = PlaylistView::new();
        view.open("1");
        view.open("2");

        view.set_playlist(playlist("1"));

        assert!(view.track_table.tracks().is_empty());
        assert!(view.playlist.is_none());
    }
}
