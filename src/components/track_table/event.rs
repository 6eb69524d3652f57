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

//! Input handling for the track table.
//!
//! Maps raw terminal keyboard events to cursor movement, and `Enter` to an
//! activation of the track under the cursor.

use crossterm::event::{Event, KeyCode};

use crate::components::{TrackTable, TrackTableAction};

impl TrackTable {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<TrackTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter => {
                return self.current_track().cloned().map(TrackTableAction::Activate);
            }

            _ => {}
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::Track;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn table() -> TrackTable {
        let mut table = TrackTable::new();
        table.set_tracks(vec![Track::with_id("a"), Track::with_id("b"), Track::with_id("c")]);
        table
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut table = table();

        table.process_event(&key(KeyCode::Up));
        assert_eq!(table.current_track().map(|t| t.id.as_str()), Some("c"));

        table.process_event(&key(KeyCode::Char('j')));
        assert_eq!(table.current_track().map(|t| t.id.as_str()), Some("a"));
    }

    #[test]
    fn enter_activates_track_under_cursor() {
        let mut table = table();
        table.process_event(&key(KeyCode::Char('G')));

        let action = table.process_event(&key(KeyCode::Enter));

        assert_eq!(action, Some(TrackTableAction::Activate(Track::with_id("c"))));
    }

    #[test]
    fn empty_table_activates_nothing() {
        let mut table = TrackTable::new();

        table.process_event(&key(KeyCode::Down));

        assert_eq!(table.process_event(&key(KeyCode::Enter)), None);
    }
}
