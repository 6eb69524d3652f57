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

//! UI rendering logic for the track table.
//!
//! This module handles the visual representation of track data, including
//! column layout, the now-playing marker, and theme application using the
//! Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::TrackTable, render::icons::ICON_PLAY, theme::Theme};

impl TrackTable {
    /// Draws the table, marking the row whose id is `now_playing`.
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, now_playing: Option<&str>) {
        let rows = self.tracks.iter().enumerate().map(|(index, item)| {
            let marker = if now_playing == Some(item.id.as_str()) {
                Line::from(ICON_PLAY).style(Style::default().fg(theme.accent_colour))
            } else {
                Line::from("")
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(Line::from(format!("{}", index + 1)).style(Style::default().fg(theme.table_dim_fg)).alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from(Line::from(item.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(item.artist.as_str()).style(Style::default().fg(theme.table_artist_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Percentage(65),
                Constraint::Percentage(35),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Artist"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.table_title_fg))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
