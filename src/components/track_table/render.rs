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

//! UI rendering logic for the track table.
//!
//! This module handles the visual representation of playlist rows, including
//! the width dependent column set, selection and grab highlighting, and theme
//! application using the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::track_table::TrackTable,
    reorder::view::{Column, GestureMode},
    theme::Theme,
    util::format::format_time,
};

impl TrackTable<'_> {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, columns: &[Column], theme: &Theme) {
        let grab = *self.grab;

        let rows = self.rows.iter().enumerate().map(|(index, item)| {
            let selected = self.selection.contains(&item.id);
            let marker = if grab == Some(index) {
                Line::from("≡").style(Style::default().fg(theme.background_colour).bg(theme.grab_colour))
            } else if selected {
                Line::from("+").style(Style::default().fg(theme.background_colour).bg(theme.accent_colour))
            } else {
                Line::from("")
            };

            let mut cells = vec![Cell::from(marker)];
            cells.extend(columns.iter().map(|column| match column {
                Column::Number => Cell::from(
                    Line::from(format!("{}", index + 1))
                        .style(Style::default().fg(theme.table_track_number_fg))
                        .alignment(Alignment::Right),
                ),
                Column::Title => Cell::from(Line::from(item.title.as_str()).style(Style::default().fg(theme.table_track_fg))),
                Column::Album => Cell::from(Line::from(item.album.as_str()).style(Style::default().fg(theme.table_album_fg))),
                Column::Artist => Cell::from(Line::from(item.artist.as_str()).style(Style::default().fg(theme.table_artist_fg))),
                Column::Duration => {
                    let duration: u64 = item.duration.try_into().unwrap_or(0);
                    Cell::from(
                        Line::from(format_time(duration))
                            .style(Style::default().fg(theme.table_time_fg))
                            .alignment(Alignment::Right),
                    )
                }
            }));

            Row::new(cells)
        });

        let header = Row::new(
            std::iter::once(Cell::from("")).chain(columns.iter().map(|column| Cell::from(header_line(*column)))),
        )
        .style(Style::default().bold().fg(theme.accent_colour))
        .bottom_margin(1);

        let highlight = if grab.is_some() {
            Style::default().bg(theme.grab_colour).fg(theme.background_colour).add_modifier(Modifier::BOLD)
        } else if self.gesture == GestureMode::Reorder {
            Style::default().bg(theme.highlight_colour).fg(theme.table_track_fg)
        } else {
            Style::default().bg(theme.border_colour).fg(theme.table_track_fg)
        };

        let table = Table::new(rows, widths(columns))
            .header(header)
            .row_highlight_style(highlight)
            .block(Block::default());

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}

fn header_line(column: Column) -> Line<'static> {
    match column {
        Column::Number => Line::from("#").alignment(Alignment::Right),
        Column::Title => Line::from("Title"),
        Column::Album => Line::from("Album"),
        Column::Artist => Line::from("Artist"),
        Column::Duration => Line::from("Time").alignment(Alignment::Right),
    }
}

fn widths(columns: &[Column]) -> Vec<Constraint> {
    std::iter::once(Constraint::Length(1))
        .chain(columns.iter().map(|column| match column {
            Column::Number => Constraint::Length(4),
            Column::Title => Constraint::Fill(3),
            Column::Album => Constraint::Fill(2),
            Column::Artist => Constraint::Fill(2),
            Column::Duration => Constraint::Length(6),
        }))
        .collect()
}
