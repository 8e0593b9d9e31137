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

//! Playlist membership and ordering.
//!
//! Positions are stored densely (1..n) per playlist and are renumbered inside
//! a transaction whenever a row moves, so a reorder is either applied in full
//! or not at all.

use rusqlite::{Connection, OptionalExtension, params};

use crate::{
    db::{StoreError, StoreResult},
    model::{Playlist, PlaylistId, PlaylistRow, PositionalUpdate, RowId},
};

const MIN_SEARCH_LEN: usize = 3;

/// Fetches the rows of a playlist in playlist order.
///
/// When a filter is given only rows whose title, album or artist contain the
/// filter text are returned, in the same relative order.
///
/// # Errors
///
/// Returns [`StoreError::UnknownPlaylist`] if the playlist does not exist, or
/// a database error if the query fails.
pub(crate) fn fetch_playlist_rows(
    conn: &Connection,
    playlist_id: &PlaylistId,
    filter: Option<&str>,
) -> StoreResult<Vec<PlaylistRow>> {
    ensure_playlist(conn, playlist_id)?;

    let sql = "
        SELECT pt.id, pt.playlist_id, tr.id, tr.title, al.title, ar.name,
               tr.duration, tr.track_number, tr.genre, tr.filename
        FROM playlist_tracks pt
        JOIN tracks tr ON tr.durable_id = pt.durable_id
        JOIN albums al ON tr.album_id = al.id
        JOIN artists ar ON al.artist_id = ar.id
        WHERE pt.playlist_id = ?1
          AND (?2 IS NULL OR tr.title LIKE ?2 OR al.title LIKE ?2 OR ar.name LIKE ?2)
        ORDER BY pt.position, pt.id
    ";

    let pattern = filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| format!("%{f}%"));

    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt
        .query_map(params![playlist_id, pattern], PlaylistRow::from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Moves a row so that it immediately precedes another row of the same
/// playlist.
///
/// Moving a row before itself leaves the playlist unchanged.
///
/// # Errors
///
/// Returns [`StoreError::UnknownPlaylist`] if the scope playlist does not
/// exist, and [`StoreError::RowNotInPlaylist`] if either row is not a member
/// of it. In both cases nothing is changed.
pub(crate) fn move_before(conn: &mut Connection, request: &PositionalUpdate) -> StoreResult<()> {
    let playlist_id = &request.scope_playlist_id;

    let tx = conn.transaction()?;

    ensure_playlist(&tx, playlist_id)?;

    let mut ids = {
        let mut stmt = tx.prepare_cached(
            "SELECT id FROM playlist_tracks WHERE playlist_id = ? ORDER BY position, id",
        )?;
        let ids = stmt
            .query_map([playlist_id], |row| row.get::<_, RowId>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        ids
    };

    for row_id in [request.row_id, request.insert_before_id] {
        if !ids.contains(&row_id) {
            return Err(StoreError::RowNotInPlaylist {
                row_id,
                playlist_id: playlist_id.clone(),
            });
        }
    }

    if reposition(&mut ids, request.row_id, request.insert_before_id) {
        let mut stmt = tx.prepare_cached("UPDATE playlist_tracks SET position = ? WHERE id = ?")?;
        for (index, id) in ids.iter().enumerate() {
            stmt.execute(params![index as i64 + 1, id])?;
        }
    }

    tx.commit()?;

    Ok(())
}

/// Moves `row` in front of `anchor` within `ids`, returning `false` if there
/// was nothing to do.
fn reposition(ids: &mut Vec<RowId>, row: RowId, anchor: RowId) -> bool {
    if row == anchor {
        return false;
    }

    let Some(from) = ids.iter().position(|&id| id == row) else {
        return false;
    };
    ids.remove(from);

    let to = ids.iter().position(|&id| id == anchor).unwrap_or(ids.len());
    ids.insert(to, row);

    true
}

/// Appends tracks, in the given order, to the end of a playlist.
///
/// Unknown track ids are skipped. Returns the number of rows added.
pub(crate) fn add_tracks(
    conn: &mut Connection,
    playlist_id: &PlaylistId,
    track_ids: &[i64],
) -> StoreResult<usize> {
    let tx = conn.transaction()?;

    ensure_playlist(&tx, playlist_id)?;

    let mut position: i64 = tx.query_row(
        "SELECT COALESCE(MAX(position), 0) FROM playlist_tracks WHERE playlist_id = ?",
        [playlist_id],
        |r| r.get(0),
    )?;

    let mut added = 0;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO playlist_tracks (playlist_id, durable_id, position)
             SELECT ?1, durable_id, ?2 FROM tracks WHERE id = ?3",
        )?;
        for track_id in track_ids {
            let inserted = stmt.execute(params![playlist_id, position + 1, track_id])?;
            if inserted > 0 {
                position += 1;
                added += inserted;
            }
        }
    }

    tx.commit()?;

    Ok(added)
}

/// Finds library tracks whose title, album or artist contain the given text.
///
/// Text shorter than the minimum search length matches nothing.
pub(crate) fn search_track_ids(conn: &Connection, text: &str) -> StoreResult<Vec<i64>> {
    let text = text.trim();
    if text.len() < MIN_SEARCH_LEN {
        return Ok(vec![]);
    }

    let sql = "
        SELECT tr.id
        FROM tracks tr
        JOIN albums al ON tr.album_id = al.id
        JOIN artists ar ON al.artist_id = ar.id
        WHERE tr.title LIKE ?1 OR al.title LIKE ?1 OR ar.name LIKE ?1
        ORDER BY ar.name, al.title, tr.track_number
    ";

    let mut stmt = conn.prepare_cached(sql)?;
    let ids = stmt
        .query_map([format!("%{text}%")], |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ids)
}

pub(crate) fn create_playlist(conn: &Connection, playlist_id: &PlaylistId, name: &str) -> StoreResult<()> {
    if playlist_exists(conn, playlist_id)? {
        return Err(StoreError::PlaylistExists(playlist_id.clone()));
    }

    conn.execute(
        "INSERT INTO playlists (id, name) VALUES (?, ?)",
        params![playlist_id, name],
    )?;

    Ok(())
}

pub(crate) fn list_playlists(conn: &Connection) -> StoreResult<Vec<Playlist>> {
    let sql = "
        SELECT p.id, p.name, COUNT(pt.id)
        FROM playlists p
        LEFT JOIN playlist_tracks pt ON pt.playlist_id = p.id
        GROUP BY p.id
        ORDER BY p.name
    ";

    let mut stmt = conn.prepare_cached(sql)?;
    let playlists = stmt
        .query_map([], Playlist::from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(playlists)
}

fn playlist_exists(conn: &Connection, playlist_id: &PlaylistId) -> StoreResult<bool> {
    let found = conn
        .prepare_cached("SELECT 1 FROM playlists WHERE id = ?")?
        .query_row([playlist_id], |_| Ok(()))
        .optional()?;

    Ok(found.is_some())
}

fn ensure_playlist(conn: &Connection, playlist_id: &PlaylistId) -> StoreResult<()> {
    if playlist_exists(conn, playlist_id)? {
        Ok(())
    } else {
        Err(StoreError::UnknownPlaylist(playlist_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    /// Seeds one artist, one album and `count` tracks, returning the track ids.
    fn seed_library(conn: &Connection, count: i64) -> Vec<i64> {
        conn.execute("INSERT INTO artists (name) VALUES ('Nick Drake')", [])
            .unwrap();
        conn.execute(
            "INSERT INTO albums (artist_id, title) VALUES (1, 'Pink Moon')",
            [],
        )
        .unwrap();

        (1..=count)
            .map(|n| {
                conn.execute(
                    "INSERT INTO tracks (durable_id, album_id, track_number, title, duration, filename)
                     VALUES (?, 1, ?, ?, 120, ?)",
                    params![1000 + n, n, format!("Song {n}"), format!("/music/{n}.mp3")],
                )
                .unwrap();
                conn.last_insert_rowid()
            })
            .collect()
    }

    fn setup(tracks: i64) -> (Connection, PlaylistId, Vec<RowId>) {
        let mut conn = open_in_memory().unwrap();
        let track_ids = seed_library(&conn, tracks);
        let playlist_id = PlaylistId::new("P");
        create_playlist(&conn, &playlist_id, "Mix").unwrap();
        add_tracks(&mut conn, &playlist_id, &track_ids).unwrap();
        let rows = row_ids(&conn, &playlist_id);
        (conn, playlist_id, rows)
    }

    fn row_ids(conn: &Connection, playlist_id: &PlaylistId) -> Vec<RowId> {
        fetch_playlist_rows(conn, playlist_id, None)
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect()
    }

    #[test]
    fn fetch_returns_rows_in_position_order() {
        let (conn, playlist_id, ids) = setup(3);

        let rows = fetch_playlist_rows(&conn, &playlist_id, None).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), ids);
        assert!(rows.iter().all(|r| r.playlist_id == playlist_id));
        assert_eq!(rows[0].title, "Song 1");
        assert_eq!(rows[0].artist, "Nick Drake");
    }

    #[test]
    fn fetch_applies_filter() {
        let (conn, playlist_id, _) = setup(3);

        let rows = fetch_playlist_rows(&conn, &playlist_id, Some("Song 2")).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Song 2");
    }

    #[test]
    fn fetch_unknown_playlist_fails() {
        let conn = open_in_memory().unwrap();

        let result = fetch_playlist_rows(&conn, &PlaylistId::new("nope"), None);

        assert!(matches!(result, Err(StoreError::UnknownPlaylist(_))));
    }

    #[test]
    fn move_before_places_row_ahead_of_anchor() {
        let (mut conn, playlist_id, ids) = setup(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        let request = PositionalUpdate {
            row_id: a,
            insert_before_id: c,
            scope_playlist_id: playlist_id.clone(),
        };
        move_before(&mut conn, &request).unwrap();

        assert_eq!(row_ids(&conn, &playlist_id), vec![b, a, c, d]);
    }

    #[test]
    fn move_before_moves_row_up() {
        let (mut conn, playlist_id, ids) = setup(3);

        let request = PositionalUpdate {
            row_id: ids[2],
            insert_before_id: ids[0],
            scope_playlist_id: playlist_id.clone(),
        };
        move_before(&mut conn, &request).unwrap();

        assert_eq!(row_ids(&conn, &playlist_id), vec![ids[2], ids[0], ids[1]]);
    }

    #[test]
    fn move_before_itself_is_a_no_op() {
        let (mut conn, playlist_id, ids) = setup(3);

        let request = PositionalUpdate {
            row_id: ids[1],
            insert_before_id: ids[1],
            scope_playlist_id: playlist_id.clone(),
        };
        move_before(&mut conn, &request).unwrap();

        assert_eq!(row_ids(&conn, &playlist_id), ids);
    }

    #[test]
    fn move_before_rejects_rows_from_another_playlist() {
        let (mut conn, playlist_id, ids) = setup(2);
        let other = PlaylistId::new("Q");
        create_playlist(&conn, &other, "Other").unwrap();

        let request = PositionalUpdate {
            row_id: ids[0],
            insert_before_id: ids[1],
            scope_playlist_id: other,
        };
        let result = move_before(&mut conn, &request);

        assert!(matches!(result, Err(StoreError::RowNotInPlaylist { .. })));
        assert_eq!(row_ids(&conn, &playlist_id), ids);
    }

    #[test]
    fn add_tracks_appends_and_allows_duplicates() {
        let (mut conn, playlist_id, ids) = setup(2);
        let first_track = fetch_playlist_rows(&conn, &playlist_id, None).unwrap()[0].track_id;

        let added = add_tracks(&mut conn, &playlist_id, &[first_track, 9999]).unwrap();

        assert_eq!(added, 1);
        let rows = fetch_playlist_rows(&conn, &playlist_id, None).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows.iter().map(|r| r.id).collect::<Vec<_>>()[..2], &ids[..]);
        assert_eq!(rows[2].track_id, first_track);
        assert_ne!(rows[2].id, rows[0].id);
    }

    #[test]
    fn create_playlist_twice_fails() {
        let conn = open_in_memory().unwrap();
        let playlist_id = PlaylistId::new("P");

        create_playlist(&conn, &playlist_id, "Mix").unwrap();
        let result = create_playlist(&conn, &playlist_id, "Mix");

        assert!(matches!(result, Err(StoreError::PlaylistExists(_))));
    }

    #[test]
    fn list_playlists_counts_tracks() {
        let (conn, playlist_id, _) = setup(3);

        let playlists = list_playlists(&conn).unwrap();

        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].id, playlist_id);
        assert_eq!(playlists[0].track_count, 3);
    }

    #[test]
    fn search_requires_minimum_length() {
        let (conn, _, _) = setup(3);

        assert!(search_track_ids(&conn, "So").unwrap().is_empty());
        assert_eq!(search_track_ids(&conn, "Pink").unwrap().len(), 3);
    }

    #[test]
    fn reposition_handles_anchor_at_end() {
        let mut ids = vec![1, 2, 3];

        assert!(reposition(&mut ids, 1, 3));
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
