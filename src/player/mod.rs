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

//! Audio playback control and state management.
//!
//! The [`PlayerStore`] is the single owner of playback state: the current
//! track, whether it is playing, position, duration and volume. It drives a
//! [`PlaybackHandle`] (in production the MPV-backed [`MpvHandle`]) and is
//! kept in sync by feeding it the handle's [`PlaybackEvent`]s.

mod handle;
mod mpv;
mod store;

use thiserror::Error;

use crate::api::ApiError;

pub(crate) use handle::{PlaybackEvent, PlaybackHandle, PlaybackObserver};
pub(crate) use mpv::MpvHandle;
pub(crate) use store::{PlayRequest, PlayTicket, PlayerStore};

#[cfg(test)]
pub(crate) use store::testing;

/// Represents the current playback status of the store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    /// Nothing has been loaded yet.
    Empty,
    /// A track URL is being resolved.
    Loading,
    Playing,
    Paused,
}

#[derive(Debug, Error)]
pub(crate) enum PlayerError {
    #[error("could not resolve track: {0}")]
    Resolve(#[from] ApiError),

    #[error("playback could not start: {0}")]
    Start(String),

    #[error("playback worker is not running")]
    Disconnected,
}

/// Receives the non-fatal failures the user should be told about.
pub(crate) trait Notifier {
    fn notify_error(&self, message: &str);
}
