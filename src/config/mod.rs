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

//! Application configuration.
//!
//! The configuration file is managed by `confy` under the application name,
//! so it lands in the platform's usual config directory. A missing or
//! unreadable file falls back to the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "earshot";

const LOG_FILE_NAME: &str = "earshot.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub version: u32,
    /// Base URL of the music service, without a trailing `/api`.
    pub api_base_url: String,
    /// Initial playback volume, nominally in `[0, 1]`.
    pub volume: f64,
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: "http://127.0.0.1:5000".to_string(),
            volume: 1.0,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Replaces values that parse but cannot be used, such as a `nan` volume.
    fn sanitised(mut self) -> Self {
        if !self.volume.is_finite() {
            self.volume = Self::default().volume;
        }
        self.volume = self.volume.clamp(0.0, 1.0);
        self
    }

    /// Where diagnostics are written, the TUI owns stdout.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
    }
}

pub fn load_config() -> AppConfig {
    confy::load::<AppConfig>(CONFIG_NAME, None).unwrap_or_default().sanitised()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(config.volume, 1.0);
    }

    #[test]
    fn unusable_volume_is_replaced() {
        let config = AppConfig {
            volume: f64::NAN,
            ..AppConfig::default()
        };
        assert_eq!(config.sanitised().volume, 1.0);

        let config = AppConfig {
            volume: 4.0,
            ..AppConfig::default()
        };
        assert_eq!(config.sanitised().volume, 1.0);

        let config = AppConfig {
            volume: 0.25,
            ..AppConfig::default()
        };
        assert_eq!(config.sanitised().volume, 0.25);
    }

    #[test]
    fn log_path_prefers_configured_file() {
        let config = AppConfig {
            log_file: Some("/var/tmp/player.log".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(config.log_path(), PathBuf::from("/var/tmp/player.log"));

        let fallback = AppConfig::default().log_path();
        assert!(fallback.ends_with(LOG_FILE_NAME));
    }
}
