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

//! The rows of one fetch of one playlist.

use crate::model::{PlaylistId, PlaylistRow, RowId};

/// The full ordered set of rows returned by one fetch.
///
/// Row order is playlist order. A snapshot is produced by the store and then
/// only ever read, refreshing the list replaces it with a new one.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Snapshot {
    /// The context that was requested when this snapshot was fetched.
    pub(crate) playlist_id: PlaylistId,
    pub(crate) filter: Option<String>,
    pub(crate) rows: Vec<PlaylistRow>,
}

impl Snapshot {
    pub(crate) fn new(playlist_id: PlaylistId, filter: Option<String>, rows: Vec<PlaylistRow>) -> Self {
        Self {
            playlist_id,
            filter,
            rows,
        }
    }

    /// An empty snapshot, used before anything has been fetched.
    pub(crate) fn empty(playlist_id: PlaylistId) -> Self {
        Self::new(playlist_id, None, vec![])
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn first(&self) -> Option<&PlaylistRow> {
        self.rows.first()
    }

    /// Row identity at the given visual position.
    pub(crate) fn id_at(&self, index: usize) -> Option<RowId> {
        self.rows.get(index).map(|row| row.id)
    }

    /// The ordered identity sequence of the rows.
    pub(crate) fn ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows.iter().map(|row| row.id)
    }

    pub(crate) fn total_duration(&self) -> i64 {
        self.rows.iter().map(|row| row.duration.max(0)).sum()
    }
}
