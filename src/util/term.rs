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

//! Terminal lifecycle and styling.
//!
//! Entering and leaving the TUI (raw mode, alternate screen) lives here along
//! with the OSC 11/111 sequences used to paint the emulator background. Most
//! modern terminals (XTerm, iTerm2, Alacritty, Kitty) honour these codes,
//! others silently ignore them.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Prepares the terminal for the TUI application.
///
/// Paints the emulator background with `background_hex`, if given, enables
/// raw mode and switches to the alternate screen buffer.
pub(crate) fn setup_terminal(background_hex: Option<&str>) -> Result<Tui> {
    // Without this we'd get a thin outline in the emulator's own colour
    if let Some(hex) = background_hex {
        set_background(hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Restores the terminal to its original state.
///
/// Best-effort: every step is attempted even if an earlier one fails, since
/// this runs on the way out regardless of how the event loop ended.
pub(crate) fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    reset_background().ok();
    terminal.show_cursor().ok();
}

fn set_background(hex_colour: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex_colour)?;
    stdout.flush()
}

fn reset_background() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}
