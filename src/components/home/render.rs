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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{components::HomeView, theme::Theme};

impl HomeView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .padding(Padding::horizontal(1));

        let header_text = if self.loaded {
            format!("Playlists | {}", self.playlists.len())
        } else {
            "Playlists | loading...".to_string()
        };
        f.render_widget(Paragraph::new(header_text).block(header_block), chunks[0]);

        let items: Vec<ListItem> = self
            .playlists
            .iter()
            .map(|playlist| {
                ListItem::new(Line::from(vec![
                    Span::styled(playlist.name.as_str(), Style::default().fg(theme.table_title_fg)),
                    Span::styled(format!("  {} tracks", playlist.tracks.len()), Style::default().fg(theme.table_dim_fg)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().padding(Padding::horizontal(1)))
            .highlight_style(Style::default().bg(theme.highlight_bg));

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}
