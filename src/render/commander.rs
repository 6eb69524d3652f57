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

//! Render the command-line interface.
//!
//! The bottom line shows the command being typed while the command line is
//! open, otherwise the latest status message or a key hint.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, commander::MessageLevel};

const KEY_HINT: &str = ":command  1 home  2 search  b back  space play/pause  ,/. seek  -/= volume  q quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;
    let theme = &app.theme;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let base = Style::default().bg(theme.gauge_track_colour);

    let line = if commander.active() {
        Paragraph::new(format!(":{}", commander.input.value())).style(base.fg(theme.commander_colour))
    } else if let Some((message, level)) = commander.message() {
        let colour = match level {
            MessageLevel::Info => theme.accent_colour,
            MessageLevel::Error => theme.error_colour,
        };
        Paragraph::new(message).style(base.fg(colour))
    } else {
        Paragraph::new(KEY_HINT).style(base.fg(theme.table_dim_fg))
    };

    f.render_widget(line, container[0]);

    if commander.active() {
        // One column for the leading ':'
        let cursor_x = container[0].x + 1 + commander.input.visual_cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
