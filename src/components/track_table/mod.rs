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

//! Interactive track table widget and state management.
//!
//! This module provides the table used to display playlist rows. It separates
//! persistent state ([`TrackTableState`]) from the transient widget view
//! ([`TrackTable`]) that borrows the rows of the current snapshot for one
//! event or one frame.
//!
//! The table is also the gesture source for reordering: a row is grabbed,
//! the cursor is moved to the drop target, and dropping it yields a single
//! [`DragCompleted`]. The table never moves rows itself.

mod event;
mod render;

use std::collections::HashSet;

use ratatui::widgets::TableState;

use crate::{
    model::{DragCompleted, PlaylistRow, RowId},
    reorder::view::GestureMode,
};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TrackTableAction {
    Dropped(DragCompleted),
}

pub(crate) struct TrackTableState {
    pub(crate) selection: HashSet<RowId>,
    pub(crate) table_state: TableState,
    pub(crate) grab: Option<usize>,
}

impl TrackTableState {
    pub(crate) fn new() -> Self {
        Self {
            selection: HashSet::new(),
            table_state: TableState::new(),
            grab: None,
        }
    }

    pub(crate) fn as_widget<'a>(
        &'a mut self,
        rows: &'a [PlaylistRow],
        gesture: GestureMode,
        selectable: bool,
    ) -> TrackTable<'a> {
        TrackTable {
            rows,
            selection: &mut self.selection,
            table_state: &mut self.table_state,
            grab: &mut self.grab,
            gesture,
            selectable,
        }
    }

    pub(crate) fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub(crate) fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub(crate) fn cancel_grab(&mut self) {
        self.grab = None;
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Resets per-snapshot state after the rows have been replaced.
    ///
    /// Selection and any grab refer to the old rows and are dropped, the
    /// cursor is kept where it was as far as the new row count allows.
    pub(crate) fn reset_for_rows(&mut self, row_count: usize) {
        self.selection.clear();
        self.grab = None;

        let cursor = match (self.table_state.selected(), row_count) {
            (_, 0) => None,
            (Some(i), n) => Some(i.min(n - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(cursor);
    }
}

pub(crate) struct TrackTable<'a> {
    rows: &'a [PlaylistRow],
    selection: &'a mut HashSet<RowId>,
    table_state: &'a mut TableState,
    grab: &'a mut Option<usize>,
    gesture: GestureMode,
    selectable: bool,
}

impl<'a> TrackTable<'a> {
    fn goto_next(&mut self) {
        let len = self.rows.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { if self.grab.is_some() { i } else { 0 } } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.rows.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { if self.grab.is_some() { 0 } else { len - 1 } } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.rows.is_empty() {
            self.table_state.select(Some(self.rows.len() - 1));
        }
    }

    /// Starts a drag from the cursor row. Only possible while reordering is
    /// enabled.
    fn grab_current(&mut self) {
        if self.gesture != GestureMode::Reorder {
            return;
        }

        if let Some(i) = self.table_state.selected().filter(|&i| i < self.rows.len()) {
            *self.grab = Some(i);
        }
    }

    /// Ends a drag at the cursor row.
    ///
    /// Dropping a row back onto itself completes nothing.
    fn drop_grabbed(&mut self) -> Option<TrackTableAction> {
        let from = self.grab.take()?;
        let to = self.table_state.selected()?;

        if self.gesture != GestureMode::Reorder || from == to {
            return None;
        }

        Some(TrackTableAction::Dropped(DragCompleted { from, to }))
    }

    fn toggle_select_current(&mut self) {
        if let Some(row) = self.table_state.selected().and_then(|i| self.rows.get(i)) {
            if !self.selection.insert(row.id) {
                self.selection.remove(&row.id);
            }
        }
    }

    fn select_all(&mut self) {
        self.selection.extend(self.rows.iter().map(|r| r.id));
    }

    fn select_inverse(&mut self) {
        for row in self.rows.iter() {
            if !self.selection.insert(row.id) {
                self.selection.remove(&row.id);
            }
        }
    }

    fn select_none(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::fixtures::row;

    fn rows(n: i64) -> Vec<PlaylistRow> {
        (1..=n).map(|id| row(id, "P")).collect()
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn press(state: &mut TrackTableState, rows: &[PlaylistRow], gesture: GestureMode, events: &[Event]) -> Vec<TrackTableAction> {
        events
            .iter()
            .filter_map(|e| state.as_widget(rows, gesture, true).process_event(e))
            .collect()
    }

    #[test]
    fn grab_move_drop_emits_one_gesture() {
        let rows = rows(4);
        let mut state = TrackTableState::new();
        state.reset_for_rows(rows.len());

        let actions = press(
            &mut state,
            &rows,
            GestureMode::Reorder,
            &[
                key(KeyCode::Char('m')),
                key(KeyCode::Char('j')),
                key(KeyCode::Char('j')),
                key(KeyCode::Enter),
                key(KeyCode::Enter),
            ],
        );

        assert_eq!(actions, vec![TrackTableAction::Dropped(DragCompleted { from: 0, to: 2 })]);
        assert_eq!(state.grab, None);
    }

    #[test]
    fn pass_through_never_grabs() {
        let rows = rows(3);
        let mut state = TrackTableState::new();
        state.reset_for_rows(rows.len());

        let actions = press(
            &mut state,
            &rows,
            GestureMode::PassThrough,
            &[key(KeyCode::Char('m')), key(KeyCode::Down), key(KeyCode::Enter)],
        );

        assert!(actions.is_empty());
        assert_eq!(state.grab, None);
    }

    #[test]
    fn drop_on_origin_or_escape_emits_nothing() {
        let rows = rows(3);
        let mut state = TrackTableState::new();
        state.reset_for_rows(rows.len());

        let actions = press(
            &mut state,
            &rows,
            GestureMode::Reorder,
            &[
                key(KeyCode::Char('m')),
                key(KeyCode::Enter),
                key(KeyCode::Char('m')),
                key(KeyCode::Down),
                key(KeyCode::Esc),
                key(KeyCode::Enter),
            ],
        );

        assert!(actions.is_empty());
    }

    #[test]
    fn cursor_does_not_wrap_while_grabbing() {
        let rows = rows(2);
        let mut state = TrackTableState::new();
        state.reset_for_rows(rows.len());

        press(
            &mut state,
            &rows,
            GestureMode::Reorder,
            &[key(KeyCode::Char('m')), key(KeyCode::Up)],
        );

        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn selection_keys_update_selection() {
        let rows = rows(3);
        let mut state = TrackTableState::new();
        state.reset_for_rows(rows.len());

        press(&mut state, &rows, GestureMode::Reorder, &[key(KeyCode::Char(' '))]);
        assert_eq!(state.selected_count(), 1);

        press(&mut state, &rows, GestureMode::Reorder, &[ctrl('t')]);
        assert_eq!(state.selected_count(), 2);

        press(&mut state, &rows, GestureMode::Reorder, &[ctrl('a')]);
        assert_eq!(state.selected_count(), 3);

        press(&mut state, &rows, GestureMode::Reorder, &[ctrl('l')]);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn reset_clamps_cursor_and_drops_grab() {
        let mut state = TrackTableState::new();
        state.table_state.select(Some(5));
        state.grab = Some(5);
        state.selection.insert(1);

        state.reset_for_rows(3);

        assert_eq!(state.cursor(), Some(2));
        assert_eq!(state.grab, None);
        assert_eq!(state.selected_count(), 0);

        state.reset_for_rows(0);
        assert_eq!(state.cursor(), None);
    }
}
