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

//! Media library indexing and database persistence.
//!
//! This module handles the discovery of audio files on the local filesystem
//! and the management of associated database records.
//!
//! It utilizes `WalkDir` for directory traversal and `Lofty` for metadata
//! extraction.
//!
//! Each track is given a durable id derived from its path. Playlists refer to
//! tracks through that id, so rebuilding the library keeps playlist contents
//! intact as long as the files have not moved.

use anyhow::{Context, Result};
use lofty::prelude::*;
use lofty::probe::Probe;
use log::{debug, info, warn};
use rusqlite::{Connection, params};
use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;
use xxhash_rust::xxh3::xxh3_64;

const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "flac", "ogg", "m4a"];

/// Scans the media directories for audio files and rebuilds the library.
///
/// This clears all existing library records and re-indexes every root
/// directory inside a single transaction. Playlist tables are not touched.
///
/// # Returns
///
/// Returns the total number of tracks in the library after the scan.
///
/// # Errors
///
/// Returns an error if the transaction fails or if database constraints are
/// violated during insertion. Unreadable files are skipped.
pub(crate) fn process_music_library(conn: &mut Connection, roots: &[String]) -> Result<i64> {
    let mut artist_cache: HashMap<String, i64> = HashMap::new();
    let mut album_cache: HashMap<(i64, String), i64> = HashMap::new();

    let tx = conn.transaction()?;

    tx.execute("DELETE FROM tracks", [])?;
    tx.execute("DELETE FROM albums", [])?;
    tx.execute("DELETE FROM artists", [])?;

    for root in roots {
        info!("Scanning {root}");

        for entry in WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| is_audio_file(e.path()))
        {
            let path = entry.path();

            let Some(filename) = track_filename(path) else {
                warn!("Skipping {}: path is not valid UTF-8", path.display());
                continue;
            };

            let tagged_file = match Probe::open(path).and_then(|p| p.read()) {
                Ok(file) => file,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) else {
                debug!("Skipping (no tags): {}", path.display());
                continue;
            };

            let file_stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();

            let artist_name = tag.artist().map(|s| s.to_string()).unwrap_or_else(|| "Unknown Artist".into());
            let album_title = tag.album().map(|s| s.to_string()).unwrap_or_else(|| "Unknown Album".into());
            let track_title = tag.title().map(|s| s.to_string()).unwrap_or(file_stem);
            let genre = tag.genre().map(|s| s.to_string());
            let track_number = tag.track();
            let duration = i64::try_from(tagged_file.properties().duration().as_secs()).unwrap_or(-1);

            let artist_id = if let Some(&id) = artist_cache.get(&artist_name) {
                id
            } else {
                tx.execute("INSERT OR IGNORE INTO artists (name) VALUES (?)", params![artist_name])?;
                let id: i64 = tx.query_row("SELECT id FROM artists WHERE name = ?", params![artist_name], |r| r.get(0))?;
                artist_cache.insert(artist_name.clone(), id);
                id
            };

            let album_key = (artist_id, album_title.clone());
            let album_id = if let Some(&id) = album_cache.get(&album_key) {
                id
            } else {
                tx.execute("INSERT OR IGNORE INTO albums (artist_id, title) VALUES (?, ?)", params![artist_id, album_title])?;
                let id: i64 = tx.query_row("SELECT id FROM albums WHERE artist_id = ? AND title = ?", params![artist_id, album_title], |r| r.get(0))?;
                album_cache.insert(album_key, id);
                id
            };

            tx.execute(
                "INSERT OR IGNORE INTO tracks (durable_id, album_id, track_number, title, duration, genre, filename) VALUES (?, ?, ?, ?, ?, ?, ?)",
                params![durable_id(&filename), album_id, track_number, track_title, duration, genre, filename],
            )?;
        }
    }

    tx.commit().context("Failed to commit transaction")?;

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM tracks", [], |row| row.get(0))?;

    info!("Library scan complete, {count} tracks");

    Ok(count)
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| AUDIO_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

/// The stored filename for a track, `None` if the path is not valid UTF-8.
fn track_filename(path: &Path) -> Option<String> {
    path.to_str().map(str::to_string)
}

/// Stable identity for a track file, independent of its row id.
pub(crate) fn durable_id(filename: &str) -> i64 {
    xxh3_64(filename.as_bytes()) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    #[test]
    fn durable_id_is_stable_per_path() {
        assert_eq!(durable_id("/music/a.mp3"), durable_id("/music/a.mp3"));
        assert_ne!(durable_id("/music/a.mp3"), durable_id("/music/b.mp3"));
    }

    #[test]
    fn recognises_audio_extensions() {
        assert!(is_audio_file(Path::new("/music/a.MP3")));
        assert!(is_audio_file(Path::new("/music/a.flac")));
        assert!(!is_audio_file(Path::new("/music/cover.jpg")));
        assert!(!is_audio_file(Path::new("/music/README")));
    }

    #[test]
    fn filenames_must_be_utf8() {
        assert_eq!(track_filename(Path::new("/music/a.mp3")), Some("/music/a.mp3".into()));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_skipped_not_fatal() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let path = Path::new(OsStr::from_bytes(b"/music/caf\xe9.mp3"));
        assert!(is_audio_file(path));
        assert_eq!(track_filename(path), None);
    }

    #[test]
    fn scanning_an_empty_root_keeps_playlists() {
        let mut conn = open_in_memory().unwrap();
        conn.execute("INSERT INTO playlists (id, name) VALUES ('P', 'Mix')", [])
            .unwrap();
        conn.execute(
            "INSERT INTO playlist_tracks (playlist_id, durable_id, position) VALUES ('P', 42, 1)",
            [],
        )
        .unwrap();

        let count = process_music_library(&mut conn, &["/nonexistent/music/root".into()]).unwrap();

        assert_eq!(count, 0);
        let members: i64 = conn
            .query_row("SELECT COUNT(*) FROM playlist_tracks", [], |r| r.get(0))
            .unwrap();
        assert_eq!(members, 1);
    }
}
