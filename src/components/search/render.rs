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

//! UI rendering logic for the search view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchView, theme::Theme};

impl SearchView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, now_playing: Option<&str>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let border_colour = if self.is_editing() { theme.accent_colour } else { theme.border_colour };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" Search ")
            .padding(Padding::horizontal(1));

        let input_area = input_block.inner(chunks[0]);
        f.render_widget(Paragraph::new(self.input.value()).block(input_block), chunks[0]);

        if self.is_editing() {
            let scroll = self.input.visual_scroll(input_area.width as usize);
            let cursor_x = input_area.x + (self.input.visual_cursor().saturating_sub(scroll)) as u16;
            f.set_cursor_position((cursor_x, input_area.y));
        }

        let status = match (&self.last_query, self.searching) {
            (Some(query), true) => format!("Searching for \"{}\"...", query),
            (Some(query), false) => format!("{} results for \"{}\"", self.results.tracks().len(), query),
            (None, _) => "Type a keyword and press Enter".to_string(),
        };

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .padding(Padding::horizontal(1));
        f.render_widget(Paragraph::new(status).block(header_block), chunks[1]);

        self.results.draw(f, chunks[2], theme, now_playing);
    }
}
