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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. The screen is the playlist songs
//! view with the command and status line below it.

mod commander;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::{App, components::playlist::ListStatus, render::commander::draw_commander};

/// Renders the user interface to the terminal frame.
///
/// Called after every processed event. It takes the application state
/// mutably because the playlist view keeps its scroll position and the width
/// class of the last frame.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let status = ListStatus {
        loading: app.list.is_loading(),
        saving: app.reorder.in_flight() > 0,
    };

    app.playlist_view.draw(
        f,
        outer[0],
        app.list.snapshot(),
        app.list.context(),
        status,
        &app.theme,
    );

    draw_commander(f, outer[1], app);
}
