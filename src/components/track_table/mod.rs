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

//! Interactive track table widget and state management.
//!
//! This module provides a reusable table component for listing tracks and
//! moving a cursor over them. Activating the row under the cursor is reported
//! as a [`TrackTableAction`] for the owning view to act on.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::Track;

#[derive(Debug, PartialEq)]
pub(crate) enum TrackTableAction {
    Activate(Track),
}

pub(crate) struct TrackTable {
    tracks: Vec<Track>,
    table_state: TableState,
}

impl TrackTable {
    pub(crate) fn new() -> Self {
        Self {
            tracks: vec![],
            table_state: TableState::new(),
        }
    }

    /// Replaces the listed tracks, placing the cursor on the first one.
    pub(crate) fn set_tracks(&mut self, tracks: Vec<Track>) {
        let first = (!tracks.is_empty()).then_some(0);
        self.tracks = tracks;
        self.table_state.select(first);
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn current_track(&self) -> Option<&Track> {
        self.table_state.selected().and_then(|i| self.tracks.get(i))
    }

    fn goto_next(&mut self) {
        let len = self.tracks.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.tracks.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.tracks.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.tracks.is_empty() {
            self.table_state.select(Some(self.tracks.len() - 1));
        }
    }
}
