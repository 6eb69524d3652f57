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

//! MPV-backed playback handle.
//!
//! `libmpv` does the network streaming and decoding. Its context lives on a
//! dedicated worker thread so that nothing it does can stall the UI.
//!
//! # Architecture
//!
//! The handle operates using a dual-channel communication pattern:
//! 1. **Command Channel**: [`MpvHandle`] forwards each [`PlaybackHandle`]
//!    call to the worker as an [`MpvCommand`].
//! 2. **Observers**: the worker translates MPV property changes and end-of-file
//!    notifications into [`PlaybackEvent`]s and hands them to every registered
//!    [`PlaybackObserver`].

use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};
use mpv::Format;
use tracing::{debug, error, warn};

use crate::player::{PlaybackEvent, PlaybackHandle, PlaybackObserver, PlayerError};

// MPV volume is a percentage, the store works in [0, 1]
const MPV_VOLUME_SCALE: f64 = 100.0;

// How long the worker blocks waiting for MPV before checking for commands
const EVENT_WAIT_SECS: f64 = 0.05;

enum MpvCommand {
    Subscribe(Box<dyn PlaybackObserver>),
    Load(String),
    SetPause(bool),
    Seek(f64),
    SetVolume(f64),
}

/// A handle to the MPV worker thread.
///
/// This struct acts as a command proxy; it does not touch MPV itself.
pub(crate) struct MpvHandle {
    command_tx: Sender<MpvCommand>,
    has_source: bool,
}

impl MpvHandle {
    /// Spawns the MPV worker thread and returns a handle to it.
    pub(crate) fn new() -> Self {
        let (command_tx, command_rx) = mpsc::channel();

        thread::spawn(move || {
            let mut observers = Vec::new();
            if let Err(e) = mpv_worker(&command_rx, &mut observers) {
                error!(error = ?e, "MPV worker failure");
                broadcast(&observers, PlaybackEvent::Error(format!("MPV worker failure: {:#}", e)));
            }
        });

        Self {
            command_tx,
            has_source: false,
        }
    }

    fn send(&self, command: MpvCommand) -> Result<(), PlayerError> {
        self.command_tx
            .send(command)
            .map_err(|_| PlayerError::Disconnected)
    }
}

impl PlaybackHandle for MpvHandle {
    fn subscribe(&mut self, observer: Box<dyn PlaybackObserver>) {
        if self.send(MpvCommand::Subscribe(observer)).is_err() {
            warn!("Cannot subscribe, MPV worker has stopped");
        }
    }

    fn load(&mut self, url: &str) -> Result<(), PlayerError> {
        self.send(MpvCommand::Load(url.to_string()))?;
        self.has_source = true;
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.send(MpvCommand::SetPause(false))
    }

    fn pause(&mut self) {
        self.send(MpvCommand::SetPause(true)).ok();
    }

    fn seek(&mut self, seconds: f64) {
        self.send(MpvCommand::Seek(seconds)).ok();
    }

    fn set_volume(&mut self, level: f64) {
        self.send(MpvCommand::SetVolume(level)).ok();
    }

    fn has_source(&self) -> bool {
        self.has_source
    }
}

fn broadcast(observers: &[Box<dyn PlaybackObserver>], event: PlaybackEvent) {
    for observer in observers {
        observer.on_event(event.clone());
    }
}

/// The primary execution loop for the MPV backend.
///
/// Initializes a local `libmpv` context with video output disabled, then
/// alternates between draining commands and waiting for MPV events until
/// the handle is dropped.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize.
fn mpv_worker(
    command_rx: &Receiver<MpvCommand>,
    observers: &mut Vec<Box<dyn PlaybackObserver>>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;

    let mut state = WorkerState::default();

    loop {
        if !process_commands(&mut handler, &mut state, command_rx, observers) {
            debug!("MPV handle dropped, stopping worker");
            return Ok(());
        }
        process_mpv_events(&mut handler, &mut state, observers);
    }
}

/// Drains and executes all pending commands.
///
/// Commands MPV refuses are reported to observers rather than ending the
/// worker. Returns `false` once the command channel has been closed.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    state: &mut WorkerState,
    command_rx: &Receiver<MpvCommand>,
    observers: &mut Vec<Box<dyn PlaybackObserver>>,
) -> bool {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        };

        let result = match command {
            MpvCommand::Subscribe(observer) => {
                observers.push(observer);
                Ok(())
            }
            MpvCommand::Load(url) => {
                let result = load(handler, &url);
                state.source = Some(url);
                state.at_eof = false;
                result
            }
            MpvCommand::SetPause(paused) => {
                // MPV goes idle at the end of a file, playing again means
                // loading it again from the start
                let reload = match (&state.source, paused, state.at_eof) {
                    (Some(url), false, true) => load(handler, url),
                    _ => Ok(()),
                };
                state.at_eof = false;
                reload.and_then(|()| {
                    handler
                        .set_property("pause", paused)
                        .map_err(|e| format!("Failed to set pause: {:?}", e))
                })
            }
            MpvCommand::Seek(seconds) => {
                // Seeking with nothing playing is refused by MPV, that's fine
                if let Err(e) = handler.command(&["seek", &seconds.to_string(), "absolute"]) {
                    debug!(error = ?e, seconds, "Seek refused");
                }
                Ok(())
            }
            MpvCommand::SetVolume(level) => {
                if let Err(e) = handler.set_property("volume", level * MPV_VOLUME_SCALE) {
                    warn!(error = ?e, level, "Volume refused");
                }
                Ok(())
            }
        };

        if let Err(message) = result {
            broadcast(observers, PlaybackEvent::Error(message));
        }
    }
}

fn load(handler: &mut mpv::MpvHandler, url: &str) -> Result<(), String> {
    handler
        .command(&["loadfile", url, "replace"])
        .map_err(|e| format!("Failed to load {}: {:?}", url, e))
}

// MPV notifies position and duration separately, these are the last reported
// values along with what is loaded.
#[derive(Default)]
struct WorkerState {
    position: f64,
    duration: f64,
    source: Option<String>,
    at_eof: bool,
}

/// Polls for one MPV event and notifies observers of anything relevant.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    state: &mut WorkerState,
    observers: &[Box<dyn PlaybackObserver>],
) {
    let Some(mpv_event) = handler.wait_event(EVENT_WAIT_SECS) else {
        return;
    };

    let event = match mpv_event {
        mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
            ("duration", Format::Double(duration)) => {
                state.duration = duration;
                Some(state.time_update())
            }
            ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
                state.position = seconds;
                Some(state.time_update())
            }
            _ => None,
        },
        mpv::Event::EndFile(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF)) => {
            state.at_eof = true;
            state.position = 0.0;
            Some(PlaybackEvent::Ended)
        }
        mpv::Event::EndFile(Err(e)) => Some(PlaybackEvent::Error(format!("{:?}", e))),
        _ => None,
    };

    if let Some(event) = event {
        broadcast(observers, event);
    }
}

impl WorkerState {
    fn time_update(&self) -> PlaybackEvent {
        PlaybackEvent::TimeUpdate {
            position: self.position,
            duration: self.duration,
        }
    }
}
