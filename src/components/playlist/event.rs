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

//! Event routing for the playlist view.
//!
//! Keyboard input is delegated to the underlying track table, an activated
//! track becomes a play request.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::Event;

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::{PlaylistView, TrackTableAction},
};

impl AppEventProcessor for PlaylistView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Some(TrackTableAction::Activate(track)) = self.track_table.process_event(event) {
            event_tx.send(AppEvent::PlayTrack(track))?;
        }

        Ok(())
    }
}
