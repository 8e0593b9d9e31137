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

use std::time::Instant;

use anyhow::Result;
use log::{debug, warn};

use crate::{
    App,
    db::{StoreError, StoreResult},
    model::{Playlist, PlaylistId, PositionalUpdate, Snapshot},
    notify::{MessageKey, Notification, Notify, Severity},
    reorder::{
        Refresh,
        relay::{self, PlaylistTracksAdded},
        view::ViewState,
    },
    tasks::AppTask,
};

pub(super) fn handle_tick(app: &mut App) {
    app.notifications.expire(Instant::now());
}

pub(super) fn handle_switch_playlist(app: &mut App, id: PlaylistId) -> Result<()> {
    if &id != app.list.context() {
        app.playlist_view.on_context_changed();
    }
    app.playlist_view.set_read_only(app.config.is_read_only(&id));
    app.list.set_context(id)
}

pub(super) fn handle_set_filter(app: &mut App, filter: Option<String>) -> Result<()> {
    app.list.set_filter(filter)
}

pub(super) fn handle_toggle_read_only(app: &mut App) {
    // Playlists configured as read-only stay that way
    if app.config.is_read_only(app.list.context()) {
        app.event_tx.notify(
            MessageKey::Failure(format!("Playlist '{}' is read-only", app.list.context())),
            Severity::Warning,
        );
        return;
    }

    let read_only = !app.playlist_view.read_only();
    app.playlist_view.set_read_only(read_only);
    app.event_tx.notify(MessageKey::ReadOnly(read_only), Severity::Info);
}

pub(super) fn handle_add_selection_to_playlist(app: &mut App, target: PlaylistId) -> Result<()> {
    let snapshot = app.list.snapshot();

    // Placeholder rows belong to another playlist and cannot be selected
    let track_ids = match app.playlist_view.view_state(snapshot, app.list.context()) {
        ViewState::Placeholder { .. } => vec![],
        ViewState::Grid { .. } => app.playlist_view.selected_track_ids(snapshot),
    };

    if track_ids.is_empty() {
        app.event_tx
            .notify(MessageKey::Failure("Nothing selected".into()), Severity::Warning);
        return Ok(());
    }

    app.task_tx.send(AppTask::AddTracksToPlaylist {
        playlist_id: target,
        track_ids,
    })?;
    app.playlist_view.clear_selection();

    Ok(())
}

pub(super) fn handle_playlist_fetched(app: &mut App, seq: u64, result: StoreResult<Snapshot>) {
    match result {
        Ok(snapshot) => {
            if app.list.on_fetched(seq, snapshot) {
                app.playlist_view.on_snapshot_replaced(app.list.snapshot());
            }
        }
        Err(e) => {
            if app.list.on_fetch_failed(seq) {
                warn!("Failed to fetch playlist '{}': {e}", app.list.context());
                app.event_tx.notify(MessageKey::PageError, Severity::Warning);
            }
        }
    }
}

pub(super) fn handle_playlist_track_updated(
    app: &mut App,
    request: &PositionalUpdate,
    outcome: &Result<(), StoreError>,
) -> Result<()> {
    let completion = app
        .reorder
        .on_update_finished(request, outcome, &mut app.list, &app.event_tx)?;
    debug!("Move of row {} finished: {completion:?}", request.row_id);

    Ok(())
}

pub(super) fn handle_playlist_tracks_added(app: &mut App, event: &PlaylistTracksAdded) -> Result<()> {
    relay::on_tracks_added(event, &mut app.list)?;

    Ok(())
}

pub(super) fn handle_playlists_listed(app: &mut App, playlists: &[Playlist]) -> Result<()> {
    if !app.has_context() {
        if let Some(first) = playlists.first() {
            handle_switch_playlist(app, first.id.clone())?;
        }
    }

    let listing = if playlists.is_empty() {
        "none, create one with :new <id>".to_string()
    } else {
        playlists
            .iter()
            .map(|p| format!("{} \"{}\" ({})", p.id, p.name, p.track_count))
            .collect::<Vec<_>>()
            .join(", ")
    };
    app.event_tx.notify(MessageKey::Playlists(listing), Severity::Info);

    Ok(())
}

pub(super) fn handle_catalog_updated(app: &mut App) -> Result<()> {
    if app.has_context() {
        app.list.refresh()?;
    }

    Ok(())
}

pub(super) fn handle_notify(app: &mut App, notification: Notification) {
    app.notifications.show(notification, Instant::now());
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.notifications.show(
        Notification {
            key: MessageKey::Failure(message),
            severity: Severity::Error,
        },
        Instant::now(),
    );
}
