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

//! Event routing for the playlist songs view.
//!
//! Keyboard input only reaches the track table while the live grid is shown.
//! Placeholder rows have no gesture source attached.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::{
    components::{
        playlist::{PlaylistSongsAction, PlaylistSongsView},
        track_table::TrackTableAction,
    },
    model::{PlaylistId, Snapshot},
};

impl PlaylistSongsView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        snapshot: &Snapshot,
        context: &PlaylistId,
    ) -> Option<PlaylistSongsAction> {
        let gesture = self.view_state(snapshot, context).gesture()?;

        if let Event::Key(key_event) = event {
            if (key_event.code, key_event.modifiers) == (KeyCode::Char('e'), KeyModifiers::NONE) {
                if self.expand {
                    self.expanded = !self.expanded;
                }
                return None;
            }
        }

        let selectable = self.has_bulk_actions();

        match self
            .table
            .as_widget(&snapshot.rows, gesture, selectable)
            .process_event(event)?
        {
            TrackTableAction::Dropped(drag) => Some(PlaylistSongsAction::Reorder(drag)),
        }
    }
}
