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

//! Home view, listing the playlists held by the music service.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::model::Playlist;

pub(crate) struct HomeView {
    playlists: Vec<Playlist>,
    list_state: ListState,
    loaded: bool,
}

impl HomeView {
    pub(crate) fn new() -> Self {
        Self {
            playlists: vec![],
            list_state: ListState::default(),
            loaded: false,
        }
    }

    pub(crate) fn set_playlists(&mut self, playlists: Vec<Playlist>) {
        let selected = match self.list_state.selected() {
            Some(i) if i < playlists.len() => Some(i),
            _ if playlists.is_empty() => None,
            _ => Some(0),
        };
        self.playlists = playlists;
        self.list_state.select(selected);
        self.loaded = true;
    }

    fn selected_playlist(&self) -> Option<&Playlist> {
        self.list_state.selected().and_then(|i| self.playlists.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.playlists.len();
        if len > 0 {
            let i = self.list_state.selected().map_or(0, |i| (i + 1) % len);
            self.list_state.select(Some(i));
        }
    }

    fn goto_previous(&mut self) {
        let len = self.playlists.len();
        if len > 0 {
            let i = self.list_state.selected().map_or(0, |i| (i + len - 1) % len);
            self.list_state.select(Some(i));
        }
    }
}
