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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) highlight_bg: Color,

    pub(crate) table_title_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_dim_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 28, 38),
            accent_colour: Color::Rgb(94, 200, 160),
            border_colour: Color::Rgb(92, 99, 112),
            gauge_track_colour: Color::Rgb(36, 42, 56),
            commander_colour: Color::Rgb(230, 230, 230),
            error_colour: Color::Rgb(240, 113, 120),
            highlight_bg: Color::Rgb(48, 56, 74),

            table_title_fg: Color::Rgb(255, 255, 255),
            table_artist_fg: Color::Rgb(171, 178, 191),
            table_dim_fg: Color::Rgb(120, 126, 138),
        }
    }

    /// Converts an RGB [`Color`] into a CSS-style hexadecimal string, as
    /// used by the terminal background escape sequence.
    ///
    /// Returns `None` for indexed and named colours, which have no fixed RGB
    /// value.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_converts_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(24, 28, 255)).as_deref(), Some("#181cff"));
    }

    #[test]
    fn named_colours_have_no_hex() {
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
