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

//! Forwarding of add-to-playlist events into a list refresh.
//!
//! Tracks can be added to any playlist from anywhere in the application, so
//! the event is broadcast without regard to which list is on screen. The
//! relay only reacts when the affected playlist is the one being displayed.

use anyhow::Result;
use log::debug;

use crate::{model::PlaylistId, reorder::Refresh};

/// Emitted once for every successful add-to-playlist action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaylistTracksAdded {
    pub(crate) affected_context_id: PlaylistId,
}

pub(crate) fn is_relevant(event: &PlaylistTracksAdded, context: &PlaylistId) -> bool {
    event.affected_context_id == *context
}

/// Refreshes the list if the event concerns the playlist it displays.
///
/// Returns whether a refresh was issued.
pub(crate) fn on_tracks_added(event: &PlaylistTracksAdded, list: &mut impl Refresh) -> Result<bool> {
    if !is_relevant(event, list.current_context()) {
        debug!(
            "Ignoring tracks added to '{}' while showing '{}'",
            event.affected_context_id,
            list.current_context()
        );
        return Ok(false);
    }

    list.refresh()?;

    Ok(true)
}
