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

//! UI rendering logic for the playlist songs view.
//!
//! This module draws either the placeholder rows or the live track table,
//! chosen by the view state, together with the header line. While rows are
//! selected the bulk-action bar is drawn in place of the header so the table
//! keeps its position.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::playlist::PlaylistSongsView,
    model::{PlaylistId, PlaylistRow, Snapshot},
    reorder::view::{ViewState, visible_columns},
    theme::Theme,
    util::format::{TimeFormat, format_duration},
};

const PLACEHOLDER_CELL: &str = "░░░░░░░░░░░░";

/// Progress of store requests, shown in the header.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ListStatus {
    pub(crate) loading: bool,
    pub(crate) saving: bool,
}

impl PlaylistSongsView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        snapshot: &Snapshot,
        context: &PlaylistId,
        status: ListStatus,
        theme: &Theme,
    ) {
        self.breakpoint = self.breakpoints.classify(area.width);

        let state = self.view_state(snapshot, context);
        let details_height = if self.expand_visible() && state.gesture().is_some() { 5 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(details_height),
            ])
            .split(area);

        if state.layout().shifted_up && self.has_bulk_actions() {
            self.draw_bulk_actions(f, chunks[0], theme);
        } else {
            self.draw_header(f, chunks[0], snapshot, context, status, theme);
        }

        match state {
            ViewState::Placeholder { rows, .. } => draw_placeholder(f, chunks[1], rows, theme),
            ViewState::Grid { gesture, .. } => {
                let columns = visible_columns(self.breakpoint);
                let selectable = self.has_bulk_actions();
                self.table
                    .as_widget(&snapshot.rows, gesture, selectable)
                    .draw(f, chunks[1], columns, theme);

                if details_height > 0 {
                    if let Some(row) = self.table.cursor().and_then(|i| snapshot.rows.get(i)) {
                        draw_details(f, chunks[2], row, theme);
                    }
                }
            }
        }
    }

    fn draw_header(
        &self,
        f: &mut Frame,
        area: Rect,
        snapshot: &Snapshot,
        context: &PlaylistId,
        status: ListStatus,
        theme: &Theme,
    ) {
        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let mut header_text = format!("Playlist {context}");

        if snapshot.playlist_id == *context && !snapshot.is_empty() {
            let _ = write!(
                header_text,
                " | {} tracks | {}",
                snapshot.len(),
                format_duration(snapshot.total_duration().try_into().unwrap_or_default(), TimeFormat::Hours)
            );
        } else if !status.loading {
            header_text.push_str(" | empty or loading");
        }

        if let Some(filter) = &snapshot.filter {
            let _ = write!(header_text, " | filter \"{filter}\"");
        }

        if self.read_only {
            header_text.push_str(" | read-only");
        }

        if status.saving {
            header_text.push_str(" | saving…");
        } else if status.loading {
            header_text.push_str(" | loading…");
        }

        if self.table.grab.is_some() {
            header_text.push_str(" | moving: j/k to place, Enter to drop, Esc to cancel");
        }

        let header = Paragraph::new(header_text).block(header_block);

        f.render_widget(header, area);
    }

    fn draw_bulk_actions(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::horizontal(1));

        let mut spans = vec![Span::styled(
            format!("{} selected", self.selected_count()),
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
        )];

        for action in self.bulk_actions.iter().flatten() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(action.hint()));
        }

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

fn draw_placeholder(f: &mut Frame, area: Rect, rows: usize, theme: &Theme) {
    let style = Style::default().fg(theme.placeholder_colour);
    let lines: Vec<Line> = std::iter::once(Line::raw(""))
        .chain((0..rows).map(|_| Line::styled(format!("  {PLACEHOLDER_CELL}  {PLACEHOLDER_CELL}{PLACEHOLDER_CELL}"), style)))
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_details(f: &mut Frame, area: Rect, row: &PlaylistRow, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let label = Style::default().fg(theme.table_time_fg);
    let track_number = row.track_number.map(|n| n.to_string()).unwrap_or_else(|| "-".into());

    let lines = vec![
        Line::from(vec![Span::styled("File   ", label), Span::raw(row.filename.as_str())]),
        Line::from(vec![Span::styled("Genre  ", label), Span::raw(row.genre.as_deref().unwrap_or("-"))]),
        Line::from(vec![Span::styled("Track  ", label), Span::raw(track_number)]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
