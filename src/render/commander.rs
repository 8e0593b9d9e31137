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

//! Render the command and status line.
//!
//! While the command line is open it shows the typed text and the cursor.
//! Otherwise it shows the current notification, coloured by severity, or a
//! short hint.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const HINT: &str = ":pl <id> switch  :ls list  m move  e details  q quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;
    let theme = &app.theme;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let line = if commander.active() {
        Line::from(vec![Span::raw(":"), Span::raw(commander.input.value())])
            .style(Style::default().fg(theme.commander_colour))
    } else if let Some(notification) = app.notifications.current() {
        Line::from(notification.key.to_string()).style(Style::default().fg(theme.severity_colour(notification.severity)))
    } else {
        Line::from(HINT).style(Style::default().fg(theme.border_colour))
    };

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.status_bar_colour)),
        container[0],
    );

    if commander.active() {
        // One column for the ':' prompt
        let cursor_x = container[0].x + 1 + commander.input.cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
