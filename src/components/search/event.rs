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

//! Event routing for the search view.
//!
//! While the search box has focus every key goes to the text input, `Enter`
//! submitting the keyword. Otherwise keys drive the results table and `Tab`
//! or `/` return to the search box.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::{SearchFocus, SearchView, TrackTableAction},
};

impl AppEventProcessor for SearchView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match self.focus {
            SearchFocus::Input => match key_event.code {
                KeyCode::Enter => {
                    let keyword = self.input.value().trim().to_string();
                    if !keyword.is_empty() {
                        self.begin_search(&keyword);
                        event_tx.send(AppEvent::Search(keyword))?;
                    }
                }
                KeyCode::Esc | KeyCode::Tab => self.focus = SearchFocus::Results,
                _ => {
                    self.input.handle_event(event);
                }
            },

            SearchFocus::Results => match key_event.code {
                KeyCode::Tab | KeyCode::Char('/') => self.focus = SearchFocus::Input,
                _ => {
                    if let Some(TrackTableAction::Activate(track)) = self.results.process_event(event) {
                        event_tx.send(AppEvent::PlayTrack(track))?;
                    }
                }
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::Track;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(view: &mut SearchView, text: &str, tx: &Sender<AppEvent>) {
        for c in text.chars() {
            view.process_event(&key(KeyCode::Char(c)), tx).unwrap();
        }
    }

    #[test]
    fn enter_submits_trimmed_keyword() {
        let (tx, rx) = mpsc::channel();
        let mut view = SearchView::new();

        type_text(&mut view, " lofi ", &tx);
        view.process_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::Search(k) if k == "lofi"));
        assert!(!view.is_editing());
    }

    #[test]
    fn blank_keyword_is_not_submitted() {
        let (tx, rx) = mpsc::channel();
        let mut view = SearchView::new();

        type_text(&mut view, "  ", &tx);
        view.process_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(rx.try_recv().is_err());
        assert!(view.is_editing());
    }

    #[test]
    fn enter_on_result_requests_playback() {
        let (tx, rx) = mpsc::channel();
        let mut view = SearchView::new();
        view.set_results(vec![Track::with_id("x"), Track::with_id("y")]);

        view.process_event(&key(KeyCode::Down), &tx).unwrap();
        view.process_event(&key(KeyCode::Enter), &tx).unwrap();

        assert!(matches!(rx.try_recv().unwrap(), AppEvent::PlayTrack(t) if t.id == "y"));
    }

    #[test]
    fn slash_returns_to_the_search_box() {
        let (tx, _rx) = mpsc::channel();
        let mut view = SearchView::new();
        view.set_results(vec![Track::with_id("x")]);
        assert!(!view.is_editing());

        view.process_event(&key(KeyCode::Char('/')), &tx).unwrap();

        assert!(view.is_editing());
    }
}
