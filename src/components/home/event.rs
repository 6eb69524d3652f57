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

//! Event routing for the home view, `Enter` opens the selected playlist.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::HomeView,
    router::Route,
};

impl AppEventProcessor for HomeView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Enter => {
                if let Some(playlist) = self.selected_playlist() {
                    let route = Route::Playlist { id: playlist.id.clone() };
                    event_tx.send(AppEvent::Navigate(route.path()))?;
                }
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::Playlist;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn playlist(id: &str) -> Playlist {
        Playlist {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            tracks: vec![],
        }
    }

    #[test]
    fn enter_navigates_to_selected_playlist() {
        let (tx, rx) = mpsc::channel();
        let mut view = HomeView::new();
        view.set_playlists(vec![playlist("1"), playlist("2")]);

        view.process_event(&key(KeyCode::Down), &tx).unwrap();
        view.process_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::Navigate(path) if path == "/playlist/2"));
    }

    #[test]
    fn enter_without_playlists_does_nothing() {
        let (tx, rx) = mpsc::channel();
        let mut view = HomeView::new();
        view.set_playlists(vec![]);

        view.process_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(rx.try_recv().is_err());
    }
}
