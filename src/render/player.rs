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

//! Render the music player interface.
//!
//! This module renders the current track, its state icon, the elapsed and
//! total time, the volume and the position bar.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlayerState,
    render::icons::{ICON_LOADING, ICON_PAUSE, ICON_PLAY, ICON_STOP},
};

/// Renders the main player widget including track info and controls.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let player = &app.player;
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(chunks[0]);

    let icon = match player.state() {
        PlayerState::Empty => ICON_STOP,
        PlayerState::Loading => ICON_LOADING,
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut track_line = vec![Span::styled(format!(" {} ", icon), bold).fg(Color::White)];
    match player.current_track() {
        Some(track) => {
            track_line.push(Span::styled(track.title.as_str(), bold).fg(theme.accent_colour));
            if !track.artist.is_empty() {
                track_line.push(Span::raw(" by "));
                track_line.push(Span::styled(track.artist.as_str(), bold).fg(theme.accent_colour));
            }
        }
        None => track_line.push(Span::raw("Nothing playing").fg(theme.table_dim_fg)),
    }
    f.render_widget(Paragraph::new(Line::from(track_line)), info_chunks[0]);

    let time_line = Line::from(vec![
        Span::styled(player.current_time(), bold).fg(theme.accent_colour),
        Span::styled(" / ", bold).fg(Color::White),
        Span::styled(player.total_time(), bold).fg(theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), info_chunks[1]);

    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(chunks[2]);

    let vol_ratio = volume_ratio(player.volume());

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(control_chunks[1]);

    let volume_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(vol_ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[0]);

    let volume_label = Paragraph::new(format!(" {}%", (vol_ratio * 100.0).round() as u16))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, volume_layout[1]);

    let position_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(position_ratio(player.progress(), player.duration()))
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[4]);
}

/// The store does not range check volume, the gauge has to.
fn volume_ratio(volume: f64) -> f64 {
    if volume.is_finite() { volume.clamp(0.0, 1.0) } else { 0.0 }
}

/// Fraction of the track played, 0 while the duration is unknown.
fn position_ratio(progress: f64, duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        (progress / duration).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_ratio_is_bounded() {
        assert_eq!(volume_ratio(0.4), 0.4);
        assert_eq!(volume_ratio(1.3), 1.0);
        assert_eq!(volume_ratio(-0.2), 0.0);
        assert_eq!(volume_ratio(f64::NAN), 0.0);
        assert_eq!(volume_ratio(f64::INFINITY), 0.0);
    }

    #[test]
    fn position_ratio_is_bounded() {
        assert_eq!(position_ratio(30.0, 120.0), 0.25);
        assert_eq!(position_ratio(200.0, 120.0), 1.0);
        assert_eq!(position_ratio(10.0, 0.0), 0.0);
        assert_eq!(position_ratio(10.0, f64::NAN), 0.0);
    }
}
