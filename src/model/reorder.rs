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

//! Messages describing a reorder, from the gesture to the store request.

use crate::model::{PlaylistId, RowId};

/// A completed drag, expressed as a pair of zero-based visual positions in
/// the rendered snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DragCompleted {
    pub(crate) from: usize,
    pub(crate) to: usize,
}

/// Instruction to move `row_id` so that it immediately precedes
/// `insert_before_id`, within the playlist `scope_playlist_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PositionalUpdate {
    pub(crate) row_id: RowId,
    pub(crate) insert_before_id: RowId,
    pub(crate) scope_playlist_id: PlaylistId,
}
