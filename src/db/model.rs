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

//! Database row mapping for domain models.
//!
//! This module provides the conversion logic between raw SQLite result rows
//! and the playlist models, ensuring type-safe extraction of model attributes
//! from database queries.

use rusqlite::{
    Result, Row, ToSql,
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
};

use crate::model::{Playlist, PlaylistId, PlaylistRow};

impl PlaylistRow {
    /// Maps an SQLite row to a [`PlaylistRow`] instance.
    ///
    /// This is a helper function designed to be used with
    /// [`rusqlite::Statement::query_map`], the column order must match
    /// [`super::playlist::fetch_playlist_rows`].
    pub(crate) fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            playlist_id: row.get(1)?,
            track_id: row.get(2)?,
            title: row.get(3)?,
            album: row.get(4)?,
            artist: row.get(5)?,
            duration: row.get(6)?,
            track_number: row.get(7)?,
            genre: row.get(8)?,
            filename: row.get(9)?,
        })
    }
}

impl Playlist {
    pub(crate) fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            track_count: row.get(2)?,
        })
    }
}

impl ToSql for PlaylistId {
    fn to_sql(&self) -> Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for PlaylistId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(PlaylistId::new)
    }
}
