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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload store access
//! from the main UI thread. It provides a dedicated worker loop that
//! translates [`AppTask`] requests into database operations and broadcasts
//! the results back to the application via [`AppEvent`]s.
//!
//! The UI never waits for a task. A reorder, for example, is sent here and the
//! list stays interactive until the matching completion event arrives.

mod handlers;

use anyhow::Result;
use log::{error, info};
use rusqlite::Connection;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    config::AppConfig,
    controller::FetchRequest,
    db,
    events::AppEvent,
    model::{PlaylistId, PositionalUpdate},
    reorder::PlaylistTrackUpdater,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchPlaylist(FetchRequest),
    UpdatePlaylistTrack(PositionalUpdate),

    AddTracksToPlaylist {
        playlist_id: PlaylistId,
        track_ids: Vec<i64>,
    },
    AddMatchingToPlaylist {
        playlist_id: PlaylistId,
        text: String,
    },

    CreatePlaylist {
        playlist_id: PlaylistId,
        name: String,
    },
    ListPlaylists,

    ScanCatalog,
}

impl PlaylistTrackUpdater for Sender<AppTask> {
    fn update_playlist_track(&self, request: PositionalUpdate) -> Result<()> {
        self.send(AppTask::UpdatePlaylistTrack(request))?;
        Ok(())
    }
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread initializes its own database connection and enters
/// a blocking loop, listening for incoming [`AppTask`]s.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(config: &AppConfig, task_rx: Receiver<AppTask>, event_tx: Sender<AppEvent>) {
    let config = config.clone();

    thread::spawn(move || {
        let mut conn = match db::init_db(&config.database_file) {
            Ok(conn) => conn,
            Err(e) => {
                error!("Failed to initialise database: {e:#}");
                let _ = event_tx.send(AppEvent::FatalError(format!("{e:#}")));
                return;
            }
        };

        info!("Task worker ready, database {}", config.database_file);

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                conn: &mut conn,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                error!("Task failed: {e:#}");
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
pub(crate) struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    conn: &'a mut Connection,
}

/// Orchestrates the execution of a single task.
///
/// Store failures that belong to a specific request are reported through that
/// request's completion event, an error returned here means the result could
/// not be delivered at all.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::FetchPlaylist(request) => handlers::fetch_playlist(ctx, request),
        AppTask::UpdatePlaylistTrack(request) => handlers::update_playlist_track(ctx, request),

        AppTask::AddTracksToPlaylist { playlist_id, track_ids } => {
            handlers::add_tracks_to_playlist(ctx, playlist_id, &track_ids)
        }
        AppTask::AddMatchingToPlaylist { playlist_id, text } => {
            handlers::add_matching_to_playlist(ctx, playlist_id, &text)
        }

        AppTask::CreatePlaylist { playlist_id, name } => handlers::create_playlist(ctx, playlist_id, &name),
        AppTask::ListPlaylists => handlers::list_playlists(ctx),

        AppTask::ScanCatalog => handlers::scan_catalog(ctx),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::{db::playlist, model::Snapshot};

    fn context_with_playlist() -> (Connection, AppConfig) {
        let conn = db::open_in_memory().unwrap();
        conn.execute("INSERT INTO artists (name) VALUES ('Low')", []).unwrap();
        conn.execute("INSERT INTO albums (artist_id, title) VALUES (1, 'Things We Lost')", [])
            .unwrap();
        for n in 1..=3 {
            conn.execute(
                "INSERT INTO tracks (durable_id, album_id, track_number, title, duration, filename)
                 VALUES (?1, 1, ?1, ?2, 200, ?3)",
                rusqlite::params![n, format!("Song {n}"), format!("/m/{n}.mp3")],
            )
            .unwrap();
        }
        playlist::create_playlist(&conn, &PlaylistId::new("P"), "Mix").unwrap();
        (conn, AppConfig::default())
    }

    #[test]
    fn update_task_reports_completion_with_original_request() {
        let (mut conn, config) = context_with_playlist();
        let (event_tx, event_rx) = mpsc::channel();
        let mut ctx = TaskContext {
            config: &config,
            event_tx: &event_tx,
            conn: &mut conn,
        };

        handle_task(
            AppTask::AddTracksToPlaylist {
                playlist_id: PlaylistId::new("P"),
                track_ids: vec![1, 2, 3],
            },
            &mut ctx,
        )
        .unwrap();

        match event_rx.try_recv() {
            Ok(AppEvent::PlaylistTracksAdded(added)) => {
                assert_eq!(added.affected_context_id, PlaylistId::new("P"))
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::Notify(_))));

        let rows = playlist::fetch_playlist_rows(&*ctx.conn, &PlaylistId::new("P"), None).unwrap();
        let request = PositionalUpdate {
            row_id: rows[2].id,
            insert_before_id: rows[0].id,
            scope_playlist_id: PlaylistId::new("P"),
        };

        handle_task(AppTask::UpdatePlaylistTrack(request.clone()), &mut ctx).unwrap();

        match event_rx.try_recv() {
            Ok(AppEvent::PlaylistTrackUpdated { request: r, outcome }) => {
                assert_eq!(r, request);
                assert!(outcome.is_ok());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn failed_update_is_reported_not_raised() {
        let (mut conn, config) = context_with_playlist();
        let (event_tx, event_rx) = mpsc::channel();
        let mut ctx = TaskContext {
            config: &config,
            event_tx: &event_tx,
            conn: &mut conn,
        };
        let request = PositionalUpdate {
            row_id: 41,
            insert_before_id: 42,
            scope_playlist_id: PlaylistId::new("P"),
        };

        handle_task(AppTask::UpdatePlaylistTrack(request), &mut ctx).unwrap();

        match event_rx.try_recv() {
            Ok(AppEvent::PlaylistTrackUpdated { outcome, .. }) => assert!(outcome.is_err()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn fetch_task_echoes_sequence() {
        let (mut conn, config) = context_with_playlist();
        let (event_tx, event_rx) = mpsc::channel();
        let mut ctx = TaskContext {
            config: &config,
            event_tx: &event_tx,
            conn: &mut conn,
        };

        handle_task(
            AppTask::FetchPlaylist(FetchRequest {
                seq: 7,
                playlist_id: PlaylistId::new("P"),
                filter: None,
            }),
            &mut ctx,
        )
        .unwrap();

        match event_rx.try_recv() {
            Ok(AppEvent::PlaylistFetched { seq, result }) => {
                assert_eq!(seq, 7);
                let snapshot: Snapshot = result.unwrap();
                assert_eq!(snapshot.playlist_id, PlaylistId::new("P"));
                assert!(snapshot.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
