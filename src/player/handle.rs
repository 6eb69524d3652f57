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

//! The seam between the playback store and the audio backend.
//!
//! A [`PlaybackHandle`] accepts imperative commands (load, play, pause, seek,
//! volume) and reports what actually happens through [`PlaybackEvent`]s
//! delivered to whichever [`PlaybackObserver`]s were registered with
//! [`PlaybackHandle::subscribe`]. Events may arrive on any thread.

use crate::player::PlayerError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlaybackEvent {
    /// Position or duration changed, both in seconds.
    TimeUpdate { position: f64, duration: f64 },
    /// The loaded source played through to its end.
    Ended,
    /// The source could not be loaded or failed mid-stream.
    Error(String),
}

pub(crate) trait PlaybackObserver: Send {
    fn on_event(&self, event: PlaybackEvent);
}

pub(crate) trait PlaybackHandle {
    fn subscribe(&mut self, observer: Box<dyn PlaybackObserver>);

    /// Replaces the current source with `url`.
    fn load(&mut self, url: &str) -> Result<(), PlayerError>;

    /// Starts or resumes playback of the loaded source.
    fn play(&mut self) -> Result<(), PlayerError>;

    fn pause(&mut self);

    /// Moves to an absolute position in seconds.
    fn seek(&mut self, seconds: f64);

    /// Sets the output level, `1.0` being full volume.
    fn set_volume(&mut self, level: f64);

    fn has_source(&self) -> bool;
}
