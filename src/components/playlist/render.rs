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

//! UI rendering logic for the playlist view.
//!
//! A one line header summarising the playlist sits above the track table.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::PlaylistView, theme::Theme};

impl PlaylistView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, now_playing: Option<&str>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .padding(Padding::horizontal(1));

        let header_text = match &self.playlist {
            Some(playlist) => {
                let mut text = format!("{} | {} tracks", playlist.name, playlist.tracks.len());
                if !playlist.description.is_empty() {
                    let _ = write!(text, " | {}", playlist.description);
                }
                text
            }
            None => "Loading playlist...".to_string(),
        };

        f.render_widget(Paragraph::new(header_text).block(header_block), chunks[0]);
        self.track_table.draw(f, chunks[1], theme, now_playing);
    }
}
