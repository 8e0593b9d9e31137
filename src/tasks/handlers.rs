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

use anyhow::Result;
use log::{info, warn};

use crate::{
    controller::FetchRequest,
    db::{playlist, scan},
    events::AppEvent,
    model::{PlaylistId, PositionalUpdate, Snapshot},
    notify::{MessageKey, Notification, Severity},
    reorder::relay::PlaylistTracksAdded,
    tasks::TaskContext,
};

pub(super) fn fetch_playlist(ctx: &mut TaskContext, request: FetchRequest) -> Result<()> {
    let FetchRequest {
        seq,
        playlist_id,
        filter,
    } = request;

    let result = playlist::fetch_playlist_rows(ctx.conn, &playlist_id, filter.as_deref())
        .map(|rows| Snapshot::new(playlist_id, filter, rows));

    ctx.event_tx.send(AppEvent::PlaylistFetched { seq, result })?;

    Ok(())
}

pub(super) fn update_playlist_track(ctx: &mut TaskContext, request: PositionalUpdate) -> Result<()> {
    let outcome = playlist::move_before(ctx.conn, &request);

    if let Err(e) = &outcome {
        warn!("Store rejected {request:?}: {e}");
    }

    ctx.event_tx
        .send(AppEvent::PlaylistTrackUpdated { request, outcome })?;

    Ok(())
}

pub(super) fn add_tracks_to_playlist(ctx: &mut TaskContext, playlist_id: PlaylistId, track_ids: &[i64]) -> Result<()> {
    match playlist::add_tracks(ctx.conn, &playlist_id, track_ids) {
        Ok(count) => tracks_added(ctx, playlist_id, count),
        Err(e) => failure(ctx, e.to_string()),
    }
}

pub(super) fn add_matching_to_playlist(ctx: &mut TaskContext, playlist_id: PlaylistId, text: &str) -> Result<()> {
    let added = playlist::search_track_ids(ctx.conn, text)
        .and_then(|track_ids| playlist::add_tracks(ctx.conn, &playlist_id, &track_ids));

    match added {
        Ok(count) => tracks_added(ctx, playlist_id, count),
        Err(e) => failure(ctx, e.to_string()),
    }
}

pub(super) fn create_playlist(ctx: &mut TaskContext, playlist_id: PlaylistId, name: &str) -> Result<()> {
    match playlist::create_playlist(ctx.conn, &playlist_id, name) {
        Ok(()) => notify(ctx, MessageKey::PlaylistCreated(playlist_id), Severity::Info),
        Err(e) => failure(ctx, e.to_string()),
    }
}

pub(super) fn list_playlists(ctx: &mut TaskContext) -> Result<()> {
    let playlists = playlist::list_playlists(ctx.conn)?;
    ctx.event_tx.send(AppEvent::PlaylistsListed(playlists))?;

    Ok(())
}

pub(super) fn scan_catalog(ctx: &mut TaskContext) -> Result<()> {
    match scan::process_music_library(ctx.conn, &ctx.config.media_dirs) {
        Ok(count) => {
            notify(ctx, MessageKey::LibraryScanned(count), Severity::Info)?;
            ctx.event_tx.send(AppEvent::CatalogUpdated)?;
            Ok(())
        }
        Err(e) => failure(ctx, format!("Failure processing catalog: {e:#}")),
    }
}

/// Broadcasts a successful add, whichever playlist is currently on screen.
fn tracks_added(ctx: &mut TaskContext, playlist_id: PlaylistId, count: usize) -> Result<()> {
    info!("Added {count} track(s) to playlist '{playlist_id}'");

    ctx.event_tx
        .send(AppEvent::PlaylistTracksAdded(PlaylistTracksAdded {
            affected_context_id: playlist_id.clone(),
        }))?;

    notify(ctx, MessageKey::TracksAdded { count, playlist_id }, Severity::Info)
}

fn failure(ctx: &mut TaskContext, message: String) -> Result<()> {
    warn!("{message}");
    notify(ctx, MessageKey::Failure(message), Severity::Error)
}

fn notify(ctx: &mut TaskContext, key: MessageKey, severity: Severity) -> Result<()> {
    ctx.event_tx
        .send(AppEvent::Notify(Notification { key, severity }))?;

    Ok(())
}
