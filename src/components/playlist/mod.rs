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

//! Playlist songs view.
//!
//! This module composes the reorder logic into the view that displays one
//! playlist. Each frame it asks [`compute_view_state`] whether to show
//! placeholder rows or the live table, and whether the table may be
//! reordered. The rows themselves always come from the list controller's
//! current snapshot.

mod event;
mod render;

pub(crate) use render::ListStatus;

use crate::{
    components::track_table::TrackTableState,
    model::{PlaylistId, Snapshot},
    reorder::view::{Breakpoint, Breakpoints, ViewState, compute_view_state, expand_available},
};

/// Bulk actions offered while rows are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BulkAction {
    AddToPlaylist,
    ClearSelection,
}

impl BulkAction {
    pub(crate) fn hint(&self) -> &'static str {
        match self {
            BulkAction::AddToPlaylist => ":add <playlist>",
            BulkAction::ClearSelection => "^L clear",
        }
    }
}

/// Parameters the embedding application configures the view with.
#[derive(Debug, Clone)]
pub(crate) struct PlaylistSongsProps {
    pub(crate) playlist_id: PlaylistId,
    pub(crate) read_only: bool,
    /// `None` disables row selection altogether.
    pub(crate) bulk_actions: Option<Vec<BulkAction>>,
    pub(crate) filter: Option<String>,
    pub(crate) expand: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PlaylistSongsAction {
    Reorder(crate::model::DragCompleted),
}

pub(crate) struct PlaylistSongsView {
    read_only: bool,
    bulk_actions: Option<Vec<BulkAction>>,
    expand: bool,
    expanded: bool,
    breakpoints: Breakpoints,
    breakpoint: Breakpoint,
    pub(crate) table: TrackTableState,
}

impl PlaylistSongsView {
    pub(crate) fn new(props: &PlaylistSongsProps, breakpoints: Breakpoints) -> Self {
        Self {
            read_only: props.read_only,
            bulk_actions: props.bulk_actions.clone(),
            expand: props.expand,
            expanded: false,
            breakpoints,
            breakpoint: Breakpoint::Desktop,
            table: TrackTableState::new(),
        }
    }

    pub(crate) fn read_only(&self) -> bool {
        self.read_only
    }

    /// Switches between an editable and a read-only list. Any drag in
    /// progress is abandoned.
    pub(crate) fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        self.table.cancel_grab();
    }

    pub(crate) fn has_bulk_actions(&self) -> bool {
        self.bulk_actions.as_ref().is_some_and(|actions| !actions.is_empty())
    }

    pub(crate) fn selected_count(&self) -> usize {
        self.table.selected_count()
    }

    pub(crate) fn view_state(&self, snapshot: &Snapshot, context: &PlaylistId) -> ViewState {
        compute_view_state(snapshot, context, self.selected_count(), self.read_only)
    }

    /// Called whenever the controller replaced its snapshot.
    pub(crate) fn on_snapshot_replaced(&mut self, snapshot: &Snapshot) {
        self.table.reset_for_rows(snapshot.len());
    }

    /// Track ids of the selected rows in playlist order, or of the cursor
    /// row if nothing is selected.
    pub(crate) fn selected_track_ids(&self, snapshot: &Snapshot) -> Vec<i64> {
        if self.table.selection.is_empty() {
            return self
                .table
                .cursor()
                .and_then(|i| snapshot.rows.get(i))
                .map(|row| vec![row.track_id])
                .unwrap_or_default();
        }

        snapshot
            .rows
            .iter()
            .filter(|row| self.table.selection.contains(&row.id))
            .map(|row| row.track_id)
            .collect()
    }

    pub(crate) fn clear_selection(&mut self) {
        self.table.clear_selection();
    }

    /// Selection and grab belong to the playlist being left.
    pub(crate) fn on_context_changed(&mut self) {
        self.table.clear_selection();
        self.table.cancel_grab();
    }

    fn expand_visible(&self) -> bool {
        self.expand && self.expanded && expand_available(self.breakpoint)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::{DragCompleted, fixtures::row};

    const BREAKPOINTS: Breakpoints = Breakpoints {
        desktop_min_width: 100,
        xsmall_max_width: 60,
    };

    fn props(read_only: bool) -> PlaylistSongsProps {
        PlaylistSongsProps {
            playlist_id: PlaylistId::new("P"),
            read_only,
            bulk_actions: Some(vec![BulkAction::AddToPlaylist, BulkAction::ClearSelection]),
            filter: None,
            expand: true,
        }
    }

    fn snapshot(ids: &[i64], playlist: &str) -> Snapshot {
        Snapshot::new(
            PlaylistId::new(playlist),
            None,
            ids.iter().map(|id| row(*id, playlist)).collect(),
        )
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn enter() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    fn drag(view: &mut PlaylistSongsView, snapshot: &Snapshot, context: &PlaylistId, from: usize, to: usize) -> Vec<PlaylistSongsAction> {
        let mut events = vec![key('g')];
        events.extend(std::iter::repeat_n(key('j'), from));
        events.push(key('m'));
        events.push(key('g'));
        events.extend(std::iter::repeat_n(key('j'), to));
        events.push(enter());

        events
            .iter()
            .filter_map(|e| view.process_event(e, snapshot, context))
            .collect()
    }

    #[test]
    fn drag_on_fresh_list_requests_reorder() {
        let s = snapshot(&[1, 2, 3], "P");
        let context = PlaylistId::new("P");
        let mut view = PlaylistSongsView::new(&props(false), BREAKPOINTS);
        view.on_snapshot_replaced(&s);

        let actions = drag(&mut view, &s, &context, 2, 0);

        assert_eq!(actions, vec![PlaylistSongsAction::Reorder(DragCompleted { from: 2, to: 0 })]);
    }

    #[test]
    fn gesture_indices_ignore_hidden_columns() {
        let s = snapshot(&[1, 2, 3, 4], "P");
        let context = PlaylistId::new("P");

        for breakpoint in [Breakpoint::Desktop, Breakpoint::Compact, Breakpoint::XSmall] {
            let mut view = PlaylistSongsView::new(&props(false), BREAKPOINTS);
            view.breakpoint = breakpoint;
            view.on_snapshot_replaced(&s);

            let actions = drag(&mut view, &s, &context, 3, 1);

            assert_eq!(
                actions,
                vec![PlaylistSongsAction::Reorder(DragCompleted { from: 3, to: 1 })],
                "{breakpoint:?}"
            );
        }
    }

    #[test]
    fn read_only_list_emits_no_gesture() {
        let s = snapshot(&[1, 2, 3], "P");
        let context = PlaylistId::new("P");
        let mut view = PlaylistSongsView::new(&props(true), BREAKPOINTS);
        view.on_snapshot_replaced(&s);

        assert!(drag(&mut view, &s, &context, 0, 2).is_empty());
    }

    #[test]
    fn stale_list_has_no_gesture_source() {
        let s = snapshot(&[9], "X");
        let context = PlaylistId::new("Y");
        let mut view = PlaylistSongsView::new(&props(false), BREAKPOINTS);
        view.on_snapshot_replaced(&s);

        assert!(matches!(view.view_state(&s, &context), ViewState::Placeholder { .. }));
        assert!(drag(&mut view, &s, &context, 0, 0).is_empty());
        assert_eq!(view.table.grab, None);
    }

    #[test]
    fn selection_is_disabled_without_bulk_actions() {
        let s = snapshot(&[1, 2], "P");
        let context = PlaylistId::new("P");
        let mut view = PlaylistSongsView::new(
            &PlaylistSongsProps {
                bulk_actions: None,
                ..props(false)
            },
            BREAKPOINTS,
        );
        view.on_snapshot_replaced(&s);

        view.process_event(&key(' '), &s, &context);

        assert_eq!(view.selected_count(), 0);
    }

    #[test]
    fn selected_track_ids_follow_playlist_order() {
        let s = snapshot(&[1, 2, 3], "P");
        let context = PlaylistId::new("P");
        let mut view = PlaylistSongsView::new(&props(false), BREAKPOINTS);
        view.on_snapshot_replaced(&s);

        assert_eq!(view.selected_track_ids(&s), vec![10]);

        view.process_event(&key('G'), &s, &context);
        view.process_event(&key(' '), &s, &context);
        view.process_event(&key('g'), &s, &context);
        view.process_event(&key(' '), &s, &context);

        assert_eq!(view.selected_track_ids(&s), vec![10, 30]);
    }

    #[test]
    fn toggling_read_only_abandons_grab() {
        let s = snapshot(&[1, 2], "P");
        let context = PlaylistId::new("P");
        let mut view = PlaylistSongsView::new(&props(false), BREAKPOINTS);
        view.on_snapshot_replaced(&s);

        view.process_event(&key('m'), &s, &context);
        assert_eq!(view.table.grab, Some(0));

        view.set_read_only(true);

        assert_eq!(view.table.grab, None);
    }

    #[test]
    fn leaving_playlist_drops_selection_and_grab() {
        let s = snapshot(&[1, 2], "P");
        let context = PlaylistId::new("P");
        let mut view = PlaylistSongsView::new(&props(false), BREAKPOINTS);
        view.on_snapshot_replaced(&s);

        view.process_event(&key(' '), &s, &context);
        view.process_event(&key('m'), &s, &context);
        assert_eq!(view.selected_count(), 1);

        view.on_context_changed();

        assert_eq!(view.selected_count(), 0);
        assert_eq!(view.table.grab, None);
    }
}
