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

//! Application events and the main event loop.
//!
//! Everything that changes UI state arrives here as an [`AppEvent`]: key
//! presses, ticks, and the results the task worker sends back. Events are
//! processed one at a time on the main thread, and the UI is redrawn after
//! each one.

mod handlers;
use handlers::*;

use std::{io::Stdout, sync::Arc};

use anyhow::{Result, bail};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use log::info;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    components::PlaylistSongsAction,
    db::StoreResult,
    model::{Playlist, PlaylistId, PositionalUpdate, Snapshot},
    notify::Notification,
    render::draw,
    reorder::{Refresh, relay::PlaylistTracksAdded},
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    SwitchPlaylist(PlaylistId),
    SetFilter(Option<String>),
    ToggleReadOnly,
    AddSelectionToPlaylist(PlaylistId),

    PlaylistFetched {
        seq: u64,
        result: StoreResult<Snapshot>,
    },
    PlaylistTrackUpdated {
        request: PositionalUpdate,
        outcome: StoreResult<()>,
    },
    PlaylistTracksAdded(PlaylistTracksAdded),
    PlaylistsListed(Vec<Playlist>),
    CatalogUpdated,

    Notify(Notification),

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
///
/// # Errors
///
/// Returns an error on a fatal event, if a request cannot be handed to the
/// task worker, or if drawing fails.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::FatalError(message) => bail!(message),

            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Tick => handle_tick(app),

            AppEvent::SwitchPlaylist(id) => handle_switch_playlist(app, id)?,
            AppEvent::SetFilter(filter) => handle_set_filter(app, filter)?,
            AppEvent::ToggleReadOnly => handle_toggle_read_only(app),
            AppEvent::AddSelectionToPlaylist(id) => handle_add_selection_to_playlist(app, id)?,

            AppEvent::PlaylistFetched { seq, result } => handle_playlist_fetched(app, seq, result),
            AppEvent::PlaylistTrackUpdated { request, outcome } => {
                handle_playlist_track_updated(app, &request, &outcome)?
            }
            AppEvent::PlaylistTracksAdded(event) => handle_playlist_tracks_added(app, &event)?,
            AppEvent::PlaylistsListed(playlists) => handle_playlists_listed(app, &playlists)?,
            AppEvent::CatalogUpdated => handle_catalog_updated(app)?,

            AppEvent::Notify(notification) => handle_notify(app, notification),
            AppEvent::Error(message) => handle_error(app, message),
        }

        terminal.draw(|f| draw(f, app))?;
    }

    info!("Leaving event loop");
    Ok(())
}

/// Routes a key press to the first component that wants it.
///
/// The command line takes every key while it is open. Otherwise the playlist
/// view gets the key, and a completed reorder gesture is handed to the
/// coordinator together with the snapshot the gesture was made against.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    if app.commander.handle_event(&event, &app.task_tx, &app.event_tx) {
        return Ok(());
    }

    let snapshot = Arc::clone(app.list.snapshot());
    if let Some(action) = app
        .playlist_view
        .process_event(&event, &snapshot, app.list.context())
    {
        match action {
            PlaylistSongsAction::Reorder(gesture) => {
                app.reorder.on_drag_completed(
                    gesture,
                    &snapshot,
                    app.list.context(),
                    app.playlist_view.read_only(),
                    &app.task_tx,
                    &app.event_tx,
                )?;
            }
        }
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('r'), KeyModifiers::NONE) if app.has_context() => app.list.refresh()?,

        _ => {}
    }

    Ok(())
}
