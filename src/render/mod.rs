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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod commander;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    render::{commander::draw_commander, player::draw_player},
    router::Route,
};

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`].
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the route tabs, the current
///   view, the player and the command line.
/// * **Routing**: Drawing whichever view the router currently points at.
/// * **Styling**: Applying colors and borders defined in the application theme.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to reflect changes and update internal view state (like list scroll
///   positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: header, main, player, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    let now_playing = app.player.current_track().map(|track| track.id.clone());
    let now_playing = now_playing.as_deref();

    match app.router.current() {
        Route::Home => app.home_view.draw(f, outer[1], &app.theme),
        Route::Search => app.search_view.draw(f, outer[1], &app.theme, now_playing),
        Route::Playlist { .. } => app.playlist_view.draw(f, outer[1], &app.theme, now_playing),
    }

    draw_player(f, outer[2], app);

    draw_commander(f, outer[3], app);
}

/// Draws the route tabs, highlighting the current one.
fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let current = app.router.current();

    let tab = |label: &'static str, active: bool| {
        let style = if active {
            Style::default().fg(app.theme.accent_colour).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.table_dim_fg)
        };
        Span::styled(label, style)
    };

    let mut spans = vec![
        tab(" 1 Home ", matches!(current, Route::Home)),
        tab(" 2 Search ", matches!(current, Route::Search)),
    ];
    if let Route::Playlist { .. } = current {
        spans.push(tab(" Playlist ", true));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
