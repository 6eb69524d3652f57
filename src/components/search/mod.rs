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

//! Search view: a keyword box above a table of matching tracks.

mod event;
mod render;

use tui_input::Input;

use crate::{components::TrackTable, model::Track};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SearchFocus {
    Input,
    Results,
}

pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) focus: SearchFocus,
    pub(crate) results: TrackTable,
    last_query: Option<String>,
    searching: bool,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            focus: SearchFocus::Input,
            results: TrackTable::new(),
            last_query: None,
            searching: false,
        }
    }

    /// Whether key presses are currently being typed into the search box.
    pub(crate) fn is_editing(&self) -> bool {
        self.focus == SearchFocus::Input
    }

    pub(crate) fn focus_input(&mut self) {
        self.focus = SearchFocus::Input;
    }

    pub(crate) fn set_results(&mut self, tracks: Vec<Track>) {
        self.searching = false;
        if !tracks.is_empty() {
            self.focus = SearchFocus::Results;
        }
        self.results.set_tracks(tracks);
    }

    fn begin_search(&mut self, keyword: &str) {
        self.last_query = Some(keyword.to_string());
        self.searching = true;
        self.focus = SearchFocus::Results;
    }
}
