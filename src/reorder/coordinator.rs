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

//! Translation of drag gestures into store requests.
//!
//! A gesture is resolved against the snapshot that was on screen while the
//! drag happened, the resulting request is sent to the store, and the list is
//! refreshed once the store reports success. Nothing is reordered locally, on
//! failure the rows simply stay as they were.

use std::fmt;

use anyhow::Result;
use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    model::{DragCompleted, PlaylistId, PositionalUpdate, Snapshot},
    notify::{MessageKey, Notify, Severity},
    reorder::{PlaylistTrackUpdater, Refresh},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ReorderError {
    #[error("drag position {index} is outside the list of {len} rows")]
    OutOfRange { index: usize, len: usize },
}

/// How a finished store request was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Completion {
    /// The store applied the move and the list was refreshed.
    Refreshed,
    /// The store applied the move, but the list has since switched to
    /// another playlist so no refresh was issued.
    StaleContext,
    /// The store rejected the move, the list was left untouched.
    Failed,
}

/// Maps a gesture onto the identity sequence of a snapshot.
///
/// The row at `from` is moved in front of the row at `to`.
pub(crate) fn resolve(
    snapshot: &Snapshot,
    gesture: DragCompleted,
    context: &PlaylistId,
) -> Result<PositionalUpdate, ReorderError> {
    let id_at = |index: usize| {
        snapshot.id_at(index).ok_or(ReorderError::OutOfRange {
            index,
            len: snapshot.len(),
        })
    };

    Ok(PositionalUpdate {
        row_id: id_at(gesture.from)?,
        insert_before_id: id_at(gesture.to)?,
        scope_playlist_id: context.clone(),
    })
}

#[derive(Debug, Default)]
pub(crate) struct ReorderCoordinator {
    in_flight: usize,
}

impl ReorderCoordinator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of requests sent to the store that have not completed yet.
    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Handles a completed drag.
    ///
    /// Returns the request that was issued, if any. Read-only lists never
    /// issue a request, whatever the gesture.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request could not be handed to the store,
    /// a gesture that does not fit the snapshot is reported to the user
    /// instead.
    pub(crate) fn on_drag_completed(
        &mut self,
        gesture: DragCompleted,
        snapshot: &Snapshot,
        context: &PlaylistId,
        read_only: bool,
        updater: &impl PlaylistTrackUpdater,
        notifier: &impl Notify,
    ) -> Result<Option<PositionalUpdate>> {
        if read_only {
            debug!("Ignoring drag {gesture:?} on read-only playlist '{context}'");
            return Ok(None);
        }

        let request = match resolve(snapshot, gesture, context) {
            Ok(request) => request,
            Err(e) => {
                warn!("Discarding drag {gesture:?}: {e}");
                notifier.notify(MessageKey::PageError, Severity::Warning);
                return Ok(None);
            }
        };

        info!(
            "Moving row {} before row {} in playlist '{}'",
            request.row_id, request.insert_before_id, request.scope_playlist_id
        );

        updater.update_playlist_track(request.clone())?;
        self.in_flight += 1;

        Ok(Some(request))
    }

    /// Reacts to the store's answer for a request issued by
    /// [`Self::on_drag_completed`].
    ///
    /// A successful move refreshes the list only if it is still showing the
    /// playlist the request was made for.
    pub(crate) fn on_update_finished<E: fmt::Display>(
        &mut self,
        request: &PositionalUpdate,
        outcome: &Result<(), E>,
        list: &mut impl Refresh,
        notifier: &impl Notify,
    ) -> Result<Completion> {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            Ok(()) if list.current_context() == &request.scope_playlist_id => {
                list.refresh()?;
                Ok(Completion::Refreshed)
            }
            Ok(()) => {
                info!(
                    "Move in playlist '{}' completed after switching to '{}', not refreshing",
                    request.scope_playlist_id,
                    list.current_context()
                );
                Ok(Completion::StaleContext)
            }
            Err(e) => {
                warn!("Failed to move row {}: {e}", request.row_id);
                notifier.notify(MessageKey::PageError, Severity::Warning);
                Ok(Completion::Failed)
            }
        }
    }
}
