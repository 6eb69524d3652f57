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

//! Command-line input and the status line.
//!
//! Pressing `:` opens a text input on the bottom line. When a command is
//! submitted it is parsed into the corresponding [`AppEvent`]. When the
//! command line is closed the same line shows transient messages, such as
//! playback failures, until they expire.
//!
//! | command          | effect                              |
//! |------------------|-------------------------------------|
//! | `q`              | quit                                |
//! | `/path`, `go /path` | navigate to a route              |
//! | `home`, `search` | navigate to a route by name         |
//! | `back`           | previous route                      |
//! | `p`              | toggle play/pause                   |
//! | `seek 1:30`      | seek to an absolute position        |
//! | `v 0.5`          | set the volume                      |
//! | `new <name>`     | create a playlist                   |
//! | `del <id>`       | delete a playlist                   |
//! | `add <id>`       | add the selected track to a playlist |
//! | `rm`             | remove the selected track from the open playlist |

use std::{
    sync::mpsc::Sender,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{actions::events::AppEvent, router::Route, util::format::parse_time};

const MESSAGE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MessageLevel {
    Info,
    Error,
}

struct StatusMessage {
    text: String,
    level: MessageLevel,
    expires_at: Instant,
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
    message: Option<StatusMessage>,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
            message: None,
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// The status message, if one is showing.
    pub(crate) fn message(&self) -> Option<(&str, MessageLevel)> {
        self.message.as_ref().map(|m| (m.text.as_str(), m.level))
    }

    pub(crate) fn show_message(&mut self, level: MessageLevel, text: String, now: Instant) {
        self.message = Some(StatusMessage {
            text,
            level,
            expires_at: now + MESSAGE_DURATION,
        });
    }

    pub(crate) fn expire_message(&mut self, now: Instant) {
        if self.message.as_ref().is_some_and(|m| now >= m.expires_at) {
            self.message = None;
        }
    }

    /// Handles a key press, returning whether the commander consumed it.
    pub(crate) fn handle_key(&mut self, key: KeyEvent, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.active {
            if key.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Esc => self.close(),
            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.close();
                if let Some(event) = parse_command(&buffer) {
                    event_tx.send(event)?;
                }
            }
            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(&Event::Key(key));
            }
        }

        Ok(true)
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }
}

/// Translates a submitted command line into an application event.
///
/// Returns `None` for an empty line, and an [`AppEvent::Error`] describing the
/// problem for anything that cannot be understood.
pub(crate) fn parse_command(buffer: &str) -> Option<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        [] => return None,

        ["q"] => AppEvent::ExitApplication,

        ["go", path] => AppEvent::Navigate(path.to_string()),
        [path] if path.starts_with('/') => AppEvent::Navigate(path.to_string()),
        ["home"] => AppEvent::Navigate(Route::Home.path()),
        ["search"] => AppEvent::Navigate(Route::Search.path()),
        ["back"] => AppEvent::Back,

        ["p"] => AppEvent::TogglePlay,

        ["seek", time] => match parse_time(time) {
            Some(seconds) => AppEvent::Seek(seconds),
            None => AppEvent::Error(format!("Invalid time: {}", time)),
        },

        ["v", level] => match level.parse::<f64>() {
            Ok(level) if level.is_finite() => AppEvent::SetVolume(level),
            _ => AppEvent::Error(format!("Invalid volume: {}", level)),
        },

        ["new", name @ ..] if !name.is_empty() => AppEvent::CreatePlaylist(name.join(" ")),
        ["del", id] => AppEvent::DeletePlaylist(id.to_string()),
        ["add", id] => AppEvent::AddSelectedTrack(id.to_string()),
        ["rm"] => AppEvent::RemoveSelectedTrack,

        [cmd, ..] => AppEvent::Error(format!("Unknown command: {}", cmd)),
    };

    Some(event)
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn parses_navigation_commands() {
        assert!(matches!(parse_command("go /playlist/4"), Some(AppEvent::Navigate(p)) if p == "/playlist/4"));
        assert!(matches!(parse_command("/search"), Some(AppEvent::Navigate(p)) if p == "/search"));
        assert!(matches!(parse_command("home"), Some(AppEvent::Navigate(p)) if p == "/"));
        assert!(matches!(parse_command("back"), Some(AppEvent::Back)));
    }

    #[test]
    fn parses_playback_commands() {
        assert!(matches!(parse_command("p"), Some(AppEvent::TogglePlay)));
        assert!(matches!(parse_command("seek 1:30"), Some(AppEvent::Seek(s)) if s == 90.0));
        assert!(matches!(parse_command("v 0.3"), Some(AppEvent::SetVolume(v)) if v == 0.3));
        assert!(matches!(parse_command("q"), Some(AppEvent::ExitApplication)));
    }

    #[test]
    fn parses_playlist_commands() {
        assert!(matches!(parse_command("new Late  night"), Some(AppEvent::CreatePlaylist(n)) if n == "Late night"));
        assert!(matches!(parse_command("del 3"), Some(AppEvent::DeletePlaylist(id)) if id == "3"));
        assert!(matches!(parse_command("add 3"), Some(AppEvent::AddSelectedTrack(id)) if id == "3"));
        assert!(matches!(parse_command("rm"), Some(AppEvent::RemoveSelectedTrack)));
        assert!(matches!(parse_command("new"), Some(AppEvent::Error(m)) if m == "Unknown command: new"));
        assert!(matches!(parse_command("add"), Some(AppEvent::Error(_))));
    }

    #[test]
    fn volume_is_not_range_checked() {
        assert!(matches!(parse_command("v 1.2"), Some(AppEvent::SetVolume(v)) if v == 1.2));
    }

    #[test]
    fn reports_bad_input() {
        assert!(matches!(parse_command("seek soon"), Some(AppEvent::Error(_))));
        assert!(matches!(parse_command("v loud"), Some(AppEvent::Error(_))));
        assert!(matches!(parse_command("dance now"), Some(AppEvent::Error(m)) if m == "Unknown command: dance"));
        assert!(parse_command("   ").is_none());
    }

    #[test]
    fn colon_opens_and_enter_submits() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_key(key(KeyCode::Char('x')), &tx).unwrap());
        assert!(commander.handle_key(key(KeyCode::Char(':')), &tx).unwrap());
        assert!(commander.active());

        commander.handle_key(key(KeyCode::Char('p')), &tx).unwrap();
        commander.handle_key(key(KeyCode::Enter), &tx).unwrap();

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(matches!(rx.try_recv().unwrap(), AppEvent::TogglePlay));
    }

    #[test]
    fn escape_discards_the_line() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_key(key(KeyCode::Char(':')), &tx).unwrap();
        commander.handle_key(key(KeyCode::Char('q')), &tx).unwrap();
        commander.handle_key(key(KeyCode::Esc), &tx).unwrap();

        assert!(!commander.active());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn messages_expire() {
        let mut commander = Commander::new();
        let now = Instant::now();

        commander.show_message(MessageLevel::Error, "Playback failed".to_string(), now);
        commander.expire_message(now + Duration::from_secs(1));
        assert_eq!(commander.message(), Some(("Playback failed", MessageLevel::Error)));

        commander.expire_message(now + MESSAGE_DURATION);
        assert_eq!(commander.message(), None);
    }
}
