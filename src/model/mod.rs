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
//! This module defines the entities shared by the playlist view, the list
//! controller and the storage layer: playlist identifiers, membership rows,
//! the fetched [`Snapshot`] of a playlist and the messages that describe a
//! reorder.

mod reorder;
mod snapshot;

pub(crate) use reorder::{DragCompleted, PositionalUpdate};
pub(crate) use snapshot::Snapshot;

use std::fmt;

/// Identifies a playlist, the "context" a list view is asked to display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct PlaylistId(String);

impl PlaylistId {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a playlist membership row.
///
/// This is not the id of the track itself, the same track may be a member of
/// a playlist more than once and each occurrence has its own row id.
pub(crate) type RowId = i64;

/// One occurrence of a track inside a playlist.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlaylistRow {
    pub(crate) id: RowId,
    pub(crate) playlist_id: PlaylistId,
    pub(crate) track_id: i64,
    pub(crate) title: String,
    pub(crate) album: String,
    pub(crate) artist: String,
    pub(crate) duration: i64,
    pub(crate) track_number: Option<i64>,
    pub(crate) genre: Option<String>,
    pub(crate) filename: String,
}

/// A playlist as listed by the store.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Playlist {
    pub(crate) id: PlaylistId,
    pub(crate) name: String,
    pub(crate) track_count: i64,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{PlaylistId, PlaylistRow, RowId};

    pub(crate) fn row(id: RowId, playlist_id: &str) -> PlaylistRow {
        PlaylistRow {
            id,
            playlist_id: PlaylistId::new(playlist_id),
            track_id: id * 10,
            title: format!("Track {id}"),
            album: "Album".into(),
            artist: "Artist".into(),
            duration: 180,
            track_number: Some(id),
            genre: None,
            filename: format!("/music/{id}.mp3"),
        }
    }
}
