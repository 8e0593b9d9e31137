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

//! # Playlist Songs TUI.
//!
//! A terminal-based playlist editor with keyboard reordering.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background store worker.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, the playlist view
//!   and the reorder coordinator.
//! * The **Task Worker** owns the database connection and answers fetch,
//!   reorder and add requests asynchronously.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The list never reorders itself. A completed gesture becomes a request to
//! the store, and the list only changes when a fresh snapshot is fetched
//! afterwards. Communication between the UI and the worker is handled via
//! `std::sync::mpsc` channels.

mod commander;
mod components;
mod config;
mod controller;
mod db;
mod events;
mod logging;
mod model;
mod notify;
mod render;
mod reorder;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    commander::Commander,
    components::{BulkAction, PlaylistSongsProps, PlaylistSongsView},
    config::AppConfig,
    controller::ListController,
    events::{AppEvent, process_events},
    model::PlaylistId,
    notify::Notifications,
    reorder::{Refresh, coordinator::ReorderCoordinator},
    tasks::AppTask,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub list: ListController,
    pub reorder: ReorderCoordinator,

    pub playlist_view: PlaylistSongsView,
    pub commander: Commander,
    pub notifications: Notifications,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        // An empty context shows nothing until the first playlist is listed
        let playlist_id = config.default_playlist().unwrap_or_else(|| PlaylistId::new(""));

        let props = PlaylistSongsProps {
            read_only: config.is_read_only(&playlist_id),
            playlist_id,
            bulk_actions: Some(vec![BulkAction::AddToPlaylist, BulkAction::ClearSelection]),
            filter: None,
            expand: true,
        };

        let list = ListController::new(props.playlist_id.clone(), task_tx.clone()).with_filter(props.filter.clone());
        let playlist_view = PlaylistSongsView::new(&props, config.breakpoints());

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            list,
            reorder: ReorderCoordinator::new(),
            playlist_view,
            commander: Commander::new(),
            notifications: Notifications::new(),
        }
    }

    /// Whether a playlist has been chosen yet.
    pub fn has_context(&self) -> bool {
        !self.list.context().as_str().is_empty()
    }
}

/// The entry point of the application.
///
/// Loads the configuration, installs the file logger, sets up the
/// communication channels, manages the terminal lifecycle, and returns an
/// error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    // The TUI owns the terminal, so a logger that cannot be installed is
    // reported once up front and otherwise ignored
    match logging::init_logging(&config) {
        Ok(path) => info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {e:#}"),
    }

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!("Application error: {e:#}");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Err(e) = util::term::set_terminal_bg(app.theme.background_colour) {
        warn!("Could not set terminal background: {e}");
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process [`AppTask`]s against the database.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it requests the initial data and hands control
/// to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App, task_rx: Receiver<AppTask>) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key presses to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Failed to read terminal event: {e}");
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial fetch of the configured playlist, and the list of playlists to
    // pick one from if none was configured
    if app.has_context() {
        app.list.refresh()?;
    }
    app.task_tx.send(AppTask::ListPlaylists)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
