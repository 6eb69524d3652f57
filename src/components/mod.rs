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

//! The views shown for each route, and the widgets they share.
//!
//! Each view owns its state, handles its own key events (see
//! [`AppEventProcessor`](crate::actions::events::AppEventProcessor)) and
//! draws itself. Views never touch the player directly, they post an
//! [`AppEvent`](crate::actions::events::AppEvent) instead.

mod home;
mod playlist;
mod search;
mod track_table;

pub(crate) use home::HomeView;
pub(crate) use playlist::PlaylistView;
pub(crate) use search::{SearchFocus, SearchView};
pub(crate) use track_table::{TrackTable, TrackTableAction};
