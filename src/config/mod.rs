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
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

use crate::{model::PlaylistId, reorder::view::Breakpoints};

const CONFIG_NAME: &str = "plsongs";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub media_dirs: Vec<String>,
    pub database_file: String,

    /// Playlist shown at start-up, the first listed playlist if unset.
    pub default_playlist: Option<String>,
    pub read_only_playlists: Vec<String>,

    pub desktop_min_width: u16,
    pub xsmall_max_width: u16,

    pub log_level: String,
    /// Overrides the default log file location.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            media_dirs: vec![],
            database_file: "plsongs.db".into(),
            default_playlist: None,
            read_only_playlists: vec![],
            desktop_min_width: 100,
            xsmall_max_width: 60,
            log_level: "info".into(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub(crate) fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            desktop_min_width: self.desktop_min_width,
            xsmall_max_width: self.xsmall_max_width,
        }
    }

    pub(crate) fn is_read_only(&self, playlist_id: &PlaylistId) -> bool {
        self.read_only_playlists.iter().any(|id| id == playlist_id.as_str())
    }

    pub(crate) fn default_playlist(&self) -> Option<PlaylistId> {
        self.default_playlist
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(PlaylistId::new)
    }
}

/// Loads the configuration, writing the defaults on first run. An unreadable
/// file falls back to the defaults.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_breakpoints() {
        let config = AppConfig::default();

        assert_eq!(config.breakpoints(), Breakpoints { desktop_min_width: 100, xsmall_max_width: 60 });
        assert_eq!(config.database_file, "plsongs.db");
        assert_eq!(config.default_playlist(), None);
    }

    #[test]
    fn read_only_playlists_are_matched_by_id() {
        let config = AppConfig {
            read_only_playlists: vec!["archive".into()],
            ..AppConfig::default()
        };

        assert!(config.is_read_only(&PlaylistId::new("archive")));
        assert!(!config.is_read_only(&PlaylistId::new("mix")));
    }
}
