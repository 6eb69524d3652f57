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

//! The shared playback state store.
//!
//! Starting a new track is a two step affair. [`PlayerStore::play`] hands out
//! a [`PlayTicket`] which the caller resolves to a URL off the UI thread, and
//! [`PlayerStore::complete`] later applies the result. Only the most recently
//! issued ticket is honoured; any older one that comes back is discarded, so
//! a slow response can never replace a track chosen after it.
//!
//! Asking to play the track that is already loaded toggles between playing
//! and paused without resolving it again.

use tracing::{debug, info, warn};

use crate::{
    api::ApiError,
    model::Track,
    player::{Notifier, PlaybackEvent, PlaybackHandle, PlayerError, PlayerState},
    util::format::format_time,
};

const PLAYBACK_FAILED: &str = "Playback failed, please try again later";

/// A claim on the URL resolution for one play request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlayTicket {
    id: u64,
    track: Track,
}

impl PlayTicket {
    pub(crate) fn track(&self) -> &Track {
        &self.track
    }
}

/// What the caller has to do after [`PlayerStore::play`].
#[derive(Debug, PartialEq)]
pub(crate) enum PlayRequest {
    /// Nothing to play.
    Ignored,
    /// The loaded track was paused or resumed in place.
    Toggled { playing: bool },
    /// The same track is already being resolved.
    AlreadyPending,
    /// Resolve the ticket's track and pass the result to
    /// [`PlayerStore::complete`].
    Resolve(PlayTicket),
}

#[derive(Debug, PartialEq)]
pub(crate) enum PlayOutcome {
    Started,
    /// The URL was assigned but the handle would not start, the user has
    /// been notified.
    StartFailed,
    /// A newer request (or a pause) superseded this ticket.
    Stale,
}

struct Pending {
    ticket: u64,
    track_id: String,
}

pub(crate) struct PlayerStore<H, N> {
    handle: H,
    notifier: N,

    current_track: Option<Track>,
    is_playing: bool,
    progress: f64,
    duration: f64,
    volume: f64,

    next_ticket: u64,
    pending: Option<Pending>,
}

impl<H: PlaybackHandle, N: Notifier> PlayerStore<H, N> {
    pub(crate) fn new(mut handle: H, notifier: N, volume: f64) -> Self {
        handle.set_volume(volume);

        Self {
            handle,
            notifier,
            current_track: None,
            is_playing: false,
            progress: 0.0,
            duration: 0.0,
            volume,
            next_ticket: 0,
            pending: None,
        }
    }

    pub(crate) fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub(crate) fn progress(&self) -> f64 {
        self.progress
    }

    pub(crate) fn duration(&self) -> f64 {
        self.duration
    }

    pub(crate) fn volume(&self) -> f64 {
        self.volume
    }

    /// Elapsed time as `M:SS`.
    pub(crate) fn current_time(&self) -> String {
        format_time(self.progress)
    }

    /// Total time as `M:SS`.
    pub(crate) fn total_time(&self) -> String {
        format_time(self.duration)
    }

    pub(crate) fn state(&self) -> PlayerState {
        if self.pending.is_some() {
            PlayerState::Loading
        } else if self.is_playing {
            PlayerState::Playing
        } else if self.current_track.is_some() {
            PlayerState::Paused
        } else {
            PlayerState::Empty
        }
    }

    /// Plays `track`, or toggles it if it is the track already loaded.
    pub(crate) fn play(&mut self, track: Option<&Track>) -> PlayRequest {
        let Some(track) = track else {
            return PlayRequest::Ignored;
        };

        if self.current_track.as_ref().is_some_and(|current| current.id == track.id) {
            if self.is_playing {
                self.pause();
                return PlayRequest::Toggled { playing: false };
            }
            // Going back to the loaded track abandons any other track still
            // being resolved
            if let Some(pending) = self.pending.take() {
                debug!(ticket = pending.ticket, "Resume supersedes pending resolution");
            }
            return self.resume();
        }

        if self.pending.as_ref().is_some_and(|pending| pending.track_id == track.id) {
            debug!(track_id = %track.id, "Track is already being resolved");
            return PlayRequest::AlreadyPending;
        }

        self.next_ticket += 1;
        let ticket = PlayTicket {
            id: self.next_ticket,
            track: track.clone(),
        };
        self.pending = Some(Pending {
            ticket: ticket.id,
            track_id: track.id.clone(),
        });

        info!(track_id = %track.id, ticket = ticket.id, "Resolving track");
        PlayRequest::Resolve(ticket)
    }

    /// Applies the resolution of `ticket`.
    ///
    /// Resolution failures are reported to the user and returned to the
    /// caller. A failure to start the handle is only reported.
    pub(crate) fn complete(
        &mut self,
        ticket: PlayTicket,
        resolution: Result<String, ApiError>,
    ) -> Result<PlayOutcome, PlayerError> {
        if self.pending.as_ref().is_none_or(|pending| pending.ticket != ticket.id) {
            debug!(ticket = ticket.id, "Discarding stale resolution");
            return Ok(PlayOutcome::Stale);
        }
        self.pending = None;

        let url = match resolution {
            Ok(url) => url,
            Err(e) => {
                warn!(track_id = %ticket.track.id, error = %e, "Failed to resolve track");
                self.notifier.notify_error(PLAYBACK_FAILED);
                return Err(e.into());
            }
        };

        debug!(track_id = %ticket.track.id, %url, "Setting playback source");
        self.current_track = Some(ticket.track);
        self.progress = 0.0;
        self.duration = 0.0;

        match self.handle.load(&url).and_then(|()| self.handle.play()) {
            Ok(()) => {
                self.is_playing = true;
                Ok(PlayOutcome::Started)
            }
            Err(e) => {
                warn!(error = %e, "Failed to start playback");
                self.is_playing = false;
                self.notifier.notify_error(PLAYBACK_FAILED);
                Ok(PlayOutcome::StartFailed)
            }
        }
    }

    /// Pauses playback, and abandons any resolution still in flight.
    pub(crate) fn pause(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(ticket = pending.ticket, "Pause supersedes pending resolution");
        }
        self.handle.pause();
        self.is_playing = false;
    }

    pub(crate) fn toggle_play(&mut self) -> PlayRequest {
        if self.is_playing {
            self.pause();
            PlayRequest::Toggled { playing: false }
        } else if let Some(track) = self.current_track.clone() {
            self.play(Some(&track))
        } else {
            PlayRequest::Ignored
        }
    }

    /// Moves to `seconds`, updating the position ahead of the handle.
    ///
    /// The position is not checked against the duration.
    pub(crate) fn seek(&mut self, seconds: f64) {
        if self.handle.has_source() {
            self.handle.seek(seconds);
            self.progress = seconds;
        }
    }

    /// Sets the volume as given, out of range levels are not clamped.
    pub(crate) fn set_volume(&mut self, level: f64) {
        self.volume = level;
        self.handle.set_volume(level);
    }

    pub(crate) fn handle_event(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::TimeUpdate { position, duration } => {
                self.progress = position;
                self.duration = duration;
            }
            PlaybackEvent::Ended => {
                // TODO advance to the next track once a play queue exists
                self.is_playing = false;
                self.progress = 0.0;
            }
            PlaybackEvent::Error(message) => {
                warn!(%message, "Playback error");
                self.is_playing = false;
                self.notifier.notify_error(PLAYBACK_FAILED);
            }
        }
    }

    fn resume(&mut self) -> PlayRequest {
        match self.handle.play() {
            Ok(()) => self.is_playing = true,
            Err(e) => {
                warn!(error = %e, "Failed to resume playback");
                self.is_playing = false;
                self.notifier.notify_error(PLAYBACK_FAILED);
            }
        }

        PlayRequest::Toggled {
            playing: self.is_playing,
        }
    }

    #[cfg(test)]
    pub(crate) fn handle(&self) -> &H {
        &self.handle
    }

    #[cfg(test)]
    pub(crate) fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    #[cfg(test)]
    pub(crate) fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use crate::player::{Notifier, PlaybackHandle, PlaybackObserver, PlayerError};

    /// A playback handle that records what it was asked to do.
    #[derive(Default)]
    pub(crate) struct FakeHandle {
        pub(crate) source: Option<String>,
        pub(crate) playing: bool,
        pub(crate) position: f64,
        pub(crate) volume: f64,
        pub(crate) loads: usize,
        pub(crate) fail_play: bool,
        pub(crate) observers: usize,
    }

    impl PlaybackHandle for FakeHandle {
        fn subscribe(&mut self, _observer: Box<dyn PlaybackObserver>) {
            self.observers += 1;
        }

        fn load(&mut self, url: &str) -> Result<(), PlayerError> {
            self.source = Some(url.to_string());
            self.loads += 1;
            Ok(())
        }

        fn play(&mut self) -> Result<(), PlayerError> {
            if self.fail_play {
                return Err(PlayerError::Start("autoplay refused".to_string()));
            }
            self.playing = true;
            Ok(())
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn seek(&mut self, seconds: f64) {
            self.position = seconds;
        }

        fn set_volume(&mut self, level: f64) {
            self.volume = level;
        }

        fn has_source(&self) -> bool {
            self.source.is_some()
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingNotifier {
        pub(crate) messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify_error(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }
}
