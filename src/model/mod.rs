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

//! Domain models and core data structures.
//!
//! These mirror the JSON served by the music service. The service uses its
//! own field names for tracks (`bvid`, `author`, `pic`), they are accepted as
//! aliases so the models can keep readable names.

use serde::Deserialize;

/// An addressable playable item.
///
/// Only `id` matters to playback, the rest is display metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    #[serde(alias = "bvid")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "author")]
    pub artist: String,
    #[serde(default, alias = "pic")]
    pub cover: Option<String>,
}

impl Track {
    #[cfg(test)]
    pub(crate) fn with_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: format!("Track {}", id),
            artist: String::new(),
            cover: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_accepts_service_field_names() {
        let json = r#"{"bvid":"BV1xx","title":"Song","author":"Someone","pic":"//i0/a.jpg","play":12}"#;
        let track: Track = serde_json::from_str(json).unwrap();

        assert_eq!(track.id, "BV1xx");
        assert_eq!(track.artist, "Someone");
        assert_eq!(track.cover.as_deref(), Some("//i0/a.jpg"));
    }

    #[test]
    fn playlist_defaults_missing_collections() {
        let json = r#"{"id":"2","name":"Evening"}"#;
        let playlist: Playlist = serde_json::from_str(json).unwrap();

        assert!(playlist.tracks.is_empty());
        assert_eq!(playlist.description, "");
    }
}
