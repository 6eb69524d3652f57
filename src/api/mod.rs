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

//! Client for the remote music service.
//!
//! The service resolves track identifiers to streamable URLs and serves the
//! search results and playlists shown by the views. Most endpoints wrap their
//! payload in an envelope:
//!
//! ```text
//! { "code": 0, "msg": "...", "data": ... }
//! ```
//!
//! where any non-zero `code` is a business failure described by `msg` (some
//! endpoints spell it `message`). The playlist reads return bare JSON on
//! success and an envelope only on failure, while creating and editing a
//! playlist always answers with an envelope, with `data` omitted when there is
//! nothing to return.
//!
//! Calls are blocking; they are only ever made from the command worker
//! thread, never from the UI thread.

use reqwest::{
    Method, StatusCode, Url,
    blocking::{Client, RequestBuilder, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

use crate::model::{Playlist, Track};

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("invalid service url: {0}")]
    InvalidBaseUrl(String),

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned HTTP {0}")]
    Status(StatusCode),

    #[error("service rejected request (code {code}): {msg}")]
    Rejected { code: i64, msg: String },

    #[error("service response carried no data")]
    MissingData,
}

/// Operations the application needs from the music service.
pub(crate) trait MusicApi {
    /// Resolves a track identifier to a URL the playback handle can stream.
    fn resolve_track(&self, track_id: &str) -> Result<String, ApiError>;

    fn search(&self, keyword: &str) -> Result<Vec<Track>, ApiError>;

    fn playlists(&self) -> Result<Vec<Playlist>, ApiError>;

    fn playlist(&self, id: &str) -> Result<Playlist, ApiError>;

    fn create_playlist(&self, name: &str) -> Result<Playlist, ApiError>;

    fn delete_playlist(&self, id: &str) -> Result<(), ApiError>;

    /// Adds `track` to playlist `playlist_id`, returning the updated playlist.
    fn add_track(&self, playlist_id: &str, track: &Track) -> Result<Playlist, ApiError>;

    fn remove_track(&self, playlist_id: &str, track_id: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    code: i64,
    #[serde(default, alias = "message")]
    msg: Option<String>,
    data: Option<T>,
}

impl<T> Envelope<T> {
    fn into_data(self) -> Result<T, ApiError> {
        if self.code != 0 {
            return Err(self.into_rejection());
        }
        self.data.ok_or(ApiError::MissingData)
    }

    fn into_ack(self) -> Result<(), ApiError> {
        if self.code != 0 {
            return Err(self.into_rejection());
        }
        Ok(())
    }

    fn into_rejection(self) -> ApiError {
        ApiError::Rejected {
            code: self.code,
            msg: self.msg.unwrap_or_else(|| "request failed".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlayData {
    url: String,
}

#[derive(Debug, Serialize)]
struct NewPlaylist<'a> {
    name: &'a str,
}

// The service stores tracks under its own field names, and requires all four.
#[derive(Debug, Serialize)]
struct TrackBody<'a> {
    bvid: &'a str,
    title: &'a str,
    author: &'a str,
    pic: &'a str,
}

#[derive(Debug, Serialize)]
struct AddTrack<'a> {
    track: TrackBody<'a>,
}

impl<'a> From<&'a Track> for AddTrack<'a> {
    fn from(track: &'a Track) -> Self {
        Self {
            track: TrackBody {
                bvid: &track.id,
                title: &track.title,
                author: &track.artist,
                pic: track.cover.as_deref().unwrap_or_default(),
            },
        }
    }
}

/// HTTP implementation of [`MusicApi`].
pub(crate) struct ApiClient {
    base: Url,
    client: Client,
}

impl ApiClient {
    pub(crate) fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder().build()?;

        Ok(Self { base, client })
    }

    // Appends path segments to the base url, each one percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "Request");
        self.client.request(method, url)
    }

    fn send_enveloped<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Envelope<T>, ApiError> {
        let response = request.send()?;
        let status = response.status();

        match response.json::<Envelope<T>>() {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(ApiError::Status(status)),
            Err(e) => Err(e.into()),
        }
    }

    fn enveloped<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        self.send_enveloped(request)?.into_data()
    }

    // For calls whose success carries no data.
    fn acknowledged(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send_enveloped::<serde_json::Value>(request)?.into_ack()
    }

    fn bare<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response: Response = request.send()?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json()?);
        }

        match response.json::<Envelope<serde_json::Value>>() {
            Ok(envelope) => Err(envelope.into_rejection()),
            Err(_) => Err(ApiError::Status(status)),
        }
    }
}

impl MusicApi for ApiClient {
    fn resolve_track(&self, track_id: &str) -> Result<String, ApiError> {
        let url = self.endpoint(&["api", "play", track_id]);
        let data: PlayData = self.enveloped(self.request(Method::GET, url))?;
        Ok(data.url)
    }

    fn search(&self, keyword: &str) -> Result<Vec<Track>, ApiError> {
        let url = self.endpoint(&["api", "search"]);
        self.enveloped(self.request(Method::GET, url).query(&[("keyword", keyword)]))
    }

    fn playlists(&self) -> Result<Vec<Playlist>, ApiError> {
        self.bare(self.request(Method::GET, self.endpoint(&["api", "playlists"])))
    }

    fn playlist(&self, id: &str) -> Result<Playlist, ApiError> {
        self.bare(self.request(Method::GET, self.endpoint(&["api", "playlists", id])))
    }

    fn create_playlist(&self, name: &str) -> Result<Playlist, ApiError> {
        let url = self.endpoint(&["api", "playlists"]);
        self.enveloped(self.request(Method::POST, url).json(&NewPlaylist { name }))
    }

    fn delete_playlist(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "playlists", id]);
        self.acknowledged(self.request(Method::DELETE, url))
    }

    fn add_track(&self, playlist_id: &str, track: &Track) -> Result<Playlist, ApiError> {
        let url = self.endpoint(&["api", "playlists", playlist_id, "tracks"]);
        self.enveloped(self.request(Method::POST, url).json(&AddTrack::from(track)))
    }

    fn remove_track(&self, playlist_id: &str, track_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "playlists", playlist_id, "tracks", track_id]);
        self.acknowledged(self.request(Method::DELETE, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_play(json: &str) -> Result<String, ApiError> {
        let envelope: Envelope<PlayData> = serde_json::from_str(json).unwrap();
        envelope.into_data().map(|data| data.url)
    }

    #[test]
    fn success_envelope_yields_url() {
        let url = decode_play(r#"{"code":0,"data":{"url":"https://x/a.mp3"}}"#).unwrap();
        assert_eq!(url, "https://x/a.mp3");
    }

    #[test]
    fn non_zero_code_is_rejected_with_message() {
        let err = decode_play(r#"{"code":1,"msg":"not found"}"#).unwrap_err();
        match err {
            ApiError::Rejected { code, msg } => {
                assert_eq!(code, 1);
                assert_eq!(msg, "not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn message_field_is_accepted_as_reason() {
        let err = decode_play(r#"{"code":-1,"message":"upstream failed"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { msg, .. } if msg == "upstream failed"));
    }

    #[test]
    fn rejection_without_reason_gets_generic_message() {
        let err = decode_play(r#"{"code":7}"#).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { code: 7, msg } if msg == "request failed"));
    }

    #[test]
    fn success_without_data_is_an_error() {
        let err = decode_play(r#"{"code":0}"#).unwrap_err();
        assert!(matches!(err, ApiError::MissingData));
    }

    #[test]
    fn search_results_decode_into_tracks() {
        let json = r#"{"code":0,"data":[{"bvid":"BV1","title":"One","author":"A","pic":"p"}]}"#;
        let envelope: Envelope<Vec<Track>> = serde_json::from_str(json).unwrap();
        let tracks = envelope.into_data().unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, "BV1");
    }

    #[test]
    fn acknowledgement_needs_no_data() {
        let ok: Envelope<serde_json::Value> = serde_json::from_str(r#"{"code":0,"message":"done"}"#).unwrap();
        assert!(ok.into_ack().is_ok());

        let refused: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"code":-1,"message":"already in playlist"}"#).unwrap();
        assert!(matches!(refused.into_ack(), Err(ApiError::Rejected { code: -1, msg }) if msg == "already in playlist"));
    }

    #[test]
    fn added_track_uses_service_field_names() {
        let track = Track {
            id: "BV9".to_string(),
            title: "Nine".to_string(),
            artist: "Someone".to_string(),
            cover: None,
        };

        let body = serde_json::to_value(AddTrack::from(&track)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({"track": {"bvid": "BV9", "title": "Nine", "author": "Someone", "pic": ""}})
        );
    }

    #[test]
    fn created_playlist_decodes_from_envelope() {
        let json = r#"{"code":0,"data":{"id":"3","name":"Late","description":"","tracks":[],"created_at":"x"}}"#;
        let envelope: Envelope<Playlist> = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.into_data().unwrap().name, "Late");
    }

    #[test]
    fn endpoint_encodes_track_ids() {
        let client = ApiClient::new("http://127.0.0.1:5000/").unwrap();
        let url = client.endpoint(&["api", "play", "BV 1/2"]);

        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/play/BV%201%2F2");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = ApiClient::new("http://host/music").unwrap();
        let url = client.endpoint(&["api", "playlists"]);

        assert_eq!(url.as_str(), "http://host/music/api/playlists");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(ApiClient::new("not a url"), Err(ApiError::InvalidBaseUrl(_))));
        assert!(matches!(ApiClient::new("mailto:me@example.com"), Err(ApiError::InvalidBaseUrl(_))));
    }
}
