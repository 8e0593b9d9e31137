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

//! Per-render decision of what the playlist view shows.
//!
//! [`compute_view_state`] picks between placeholder rows and the live grid,
//! and whether the grid accepts reorder gestures. Which columns are visible
//! is decided separately from the terminal width. Columns never hide rows, so
//! gesture positions always index the full snapshot.

use crate::{
    model::{PlaylistId, Snapshot},
    reorder::{
        layout::{LayoutAdjust, layout},
        stale::{Staleness, detect},
    },
};

/// Number of placeholder rows, independent of the real data.
pub(crate) const PLACEHOLDER_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GestureMode {
    /// Rows can be grabbed and dropped.
    Reorder,
    /// Rows render as-is, grabbing is disabled entirely.
    PassThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewState {
    Placeholder { rows: usize, layout: LayoutAdjust },
    Grid { gesture: GestureMode, layout: LayoutAdjust },
}

impl ViewState {
    pub(crate) fn layout(&self) -> LayoutAdjust {
        match self {
            ViewState::Placeholder { layout, .. } | ViewState::Grid { layout, .. } => *layout,
        }
    }

    pub(crate) fn gesture(&self) -> Option<GestureMode> {
        match self {
            ViewState::Placeholder { .. } => None,
            ViewState::Grid { gesture, .. } => Some(*gesture),
        }
    }
}

pub(crate) fn compute_view_state(
    snapshot: &Snapshot,
    context: &PlaylistId,
    selected_count: usize,
    read_only: bool,
) -> ViewState {
    let layout = layout(selected_count);

    match detect(snapshot, context) {
        Staleness::Stale => ViewState::Placeholder {
            rows: PLACEHOLDER_ROWS,
            layout,
        },
        Staleness::Fresh => ViewState::Grid {
            gesture: if read_only {
                GestureMode::PassThrough
            } else {
                GestureMode::Reorder
            },
            layout,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Breakpoint {
    XSmall,
    Compact,
    Desktop,
}

/// Terminal width thresholds, in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Breakpoints {
    pub(crate) desktop_min_width: u16,
    pub(crate) xsmall_max_width: u16,
}

impl Breakpoints {
    pub(crate) fn classify(&self, width: u16) -> Breakpoint {
        if width >= self.desktop_min_width {
            Breakpoint::Desktop
        } else if width < self.xsmall_max_width {
            Breakpoint::XSmall
        } else {
            Breakpoint::Compact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Column {
    Number,
    Title,
    Album,
    Artist,
    Duration,
}

pub(crate) fn visible_columns(breakpoint: Breakpoint) -> &'static [Column] {
    match breakpoint {
        Breakpoint::Desktop => &[
            Column::Number,
            Column::Title,
            Column::Album,
            Column::Artist,
            Column::Duration,
        ],
        Breakpoint::Compact | Breakpoint::XSmall => &[Column::Title, Column::Duration],
    }
}

/// Whether the expand-row details pane can be shown.
pub(crate) fn expand_available(breakpoint: Breakpoint) -> bool {
    breakpoint != Breakpoint::XSmall
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::row;

    fn snapshot(ids: &[i64], playlist: &str) -> Snapshot {
        Snapshot::new(
            PlaylistId::new(playlist),
            None,
            ids.iter().map(|id| row(*id, playlist)).collect(),
        )
    }

    const BREAKPOINTS: Breakpoints = Breakpoints {
        desktop_min_width: 100,
        xsmall_max_width: 60,
    };

    #[test]
    fn stale_snapshot_renders_placeholder_without_gesture() {
        let state = compute_view_state(&snapshot(&[9], "X"), &PlaylistId::new("Y"), 0, false);

        assert_eq!(
            state,
            ViewState::Placeholder {
                rows: PLACEHOLDER_ROWS,
                layout: LayoutAdjust { shifted_up: false },
            }
        );
        assert_eq!(state.gesture(), None);
    }

    #[test]
    fn fresh_snapshot_renders_reorderable_grid() {
        let state = compute_view_state(&snapshot(&[1, 2], "P"), &PlaylistId::new("P"), 0, false);

        assert_eq!(state.gesture(), Some(GestureMode::Reorder));
    }

    #[test]
    fn read_only_grid_passes_through() {
        let state = compute_view_state(&snapshot(&[1, 2], "P"), &PlaylistId::new("P"), 0, true);

        assert_eq!(state.gesture(), Some(GestureMode::PassThrough));
    }

    #[test]
    fn selection_shifts_layout_in_both_states() {
        let grid = compute_view_state(&snapshot(&[1], "P"), &PlaylistId::new("P"), 2, false);
        let placeholder = compute_view_state(&snapshot(&[], "P"), &PlaylistId::new("P"), 2, false);

        assert!(grid.layout().shifted_up);
        assert!(placeholder.layout().shifted_up);
    }

    #[test]
    fn classifies_widths() {
        assert_eq!(BREAKPOINTS.classify(140), Breakpoint::Desktop);
        assert_eq!(BREAKPOINTS.classify(100), Breakpoint::Desktop);
        assert_eq!(BREAKPOINTS.classify(80), Breakpoint::Compact);
        assert_eq!(BREAKPOINTS.classify(59), Breakpoint::XSmall);
    }

    #[test]
    fn narrow_layouts_hide_number_album_and_artist() {
        let compact = visible_columns(Breakpoint::Compact);

        assert!(compact.contains(&Column::Title));
        assert!(!compact.contains(&Column::Number));
        assert!(!compact.contains(&Column::Album));
        assert!(!compact.contains(&Column::Artist));
        assert_eq!(visible_columns(Breakpoint::Desktop).len(), 5);
        assert!(!expand_available(Breakpoint::XSmall));
        assert!(expand_available(Breakpoint::Compact));
    }
}
