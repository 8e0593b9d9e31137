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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line. It manages a text input
//! component and, when a command is submitted, parses it and dispatches the
//! corresponding application event or task.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use log::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    events::AppEvent,
    model::PlaylistId,
    notify::{MessageKey, Notify, Severity},
    tasks::AppTask,
};

/// A parsed command line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    Scan,
    ListPlaylists,
    SwitchPlaylist(PlaylistId),
    NewPlaylist { id: PlaylistId, name: String },
    AddSelection(PlaylistId),
    AddMatching { id: PlaylistId, text: String },
    Filter(Option<String>),
    ToggleReadOnly,
}

/// Why a command line could not be parsed. The message is shown as is.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ParseError(pub(crate) String);

pub(crate) fn parse(buffer: &str) -> Result<Command, ParseError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] => Ok(Command::Quit),
        ["scan"] => Ok(Command::Scan),
        ["ls"] => Ok(Command::ListPlaylists),
        ["ro"] => Ok(Command::ToggleReadOnly),

        ["pl", id] => Ok(Command::SwitchPlaylist(PlaylistId::new(*id))),
        ["pl", ..] => Err(usage("pl <playlist>")),

        ["new", id, name_parts @ ..] => {
            let name = if name_parts.is_empty() {
                (*id).to_string()
            } else {
                name_parts.join(" ")
            };
            Ok(Command::NewPlaylist {
                id: PlaylistId::new(*id),
                name,
            })
        }
        ["new"] => Err(usage("new <playlist> [name]")),

        ["add", id] => Ok(Command::AddSelection(PlaylistId::new(*id))),
        ["add", ..] => Err(usage("add <playlist>")),

        ["addm", id, text_parts @ ..] if !text_parts.is_empty() => Ok(Command::AddMatching {
            id: PlaylistId::new(*id),
            text: text_parts.join(" "),
        }),
        ["addm", ..] => Err(usage("addm <playlist> <text>")),

        ["filter"] => Ok(Command::Filter(None)),
        ["filter", text_parts @ ..] => Ok(Command::Filter(Some(text_parts.join(" ")))),

        [] => Err(ParseError("Empty command".into())),
        [cmd, ..] => Err(ParseError(format!("Unknown command: {cmd}"))),
    }
}

fn usage(text: &str) -> ParseError {
    ParseError(format!("Usage: :{text}"))
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Returns whether the event was consumed by the command line.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.is_empty() {
                    if let Err(e) = self.run_command(&buffer, task_tx, event_tx) {
                        debug!("Command '{buffer}' not delivered: {e:#}");
                    }
                }
            }

            _ => {
                // Delegate all other keys to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }

    fn run_command(&self, buffer: &str, task_tx: &Sender<AppTask>, event_tx: &Sender<AppEvent>) -> Result<()> {
        let command = match parse(buffer) {
            Ok(command) => command,
            Err(ParseError(message)) => {
                event_tx.notify(MessageKey::Failure(message), Severity::Warning);
                return Ok(());
            }
        };

        debug!("Running {command:?}");

        match command {
            Command::Quit => event_tx.send(AppEvent::ExitApplication)?,
            Command::Scan => task_tx.send(AppTask::ScanCatalog)?,
            Command::ListPlaylists => task_tx.send(AppTask::ListPlaylists)?,
            Command::ToggleReadOnly => event_tx.send(AppEvent::ToggleReadOnly)?,
            Command::SwitchPlaylist(id) => event_tx.send(AppEvent::SwitchPlaylist(id))?,
            Command::NewPlaylist { id, name } => task_tx.send(AppTask::CreatePlaylist { playlist_id: id, name })?,
            Command::AddSelection(id) => event_tx.send(AppEvent::AddSelectionToPlaylist(id))?,
            Command::AddMatching { id, text } => {
                task_tx.send(AppTask::AddMatchingToPlaylist { playlist_id: id, text })?
            }
            Command::Filter(filter) => event_tx.send(AppEvent::SetFilter(filter))?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn type_line(commander: &mut Commander, line: &str, task_tx: &Sender<AppTask>, event_tx: &Sender<AppEvent>) {
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));

        assert!(commander.handle_event(&key(KeyCode::Char(':')), task_tx, event_tx));
        for c in line.chars() {
            commander.handle_event(&key(KeyCode::Char(c)), task_tx, event_tx);
        }
        commander.handle_event(&key(KeyCode::Enter), task_tx, event_tx);
    }

    #[test]
    fn parses_playlist_commands() {
        assert_eq!(parse("pl mix"), Ok(Command::SwitchPlaylist(PlaylistId::new("mix"))));
        assert_eq!(
            parse("new mix Road Trip"),
            Ok(Command::NewPlaylist {
                id: PlaylistId::new("mix"),
                name: "Road Trip".into()
            })
        );
        assert_eq!(
            parse("new mix"),
            Ok(Command::NewPlaylist {
                id: PlaylistId::new("mix"),
                name: "mix".into()
            })
        );
        assert_eq!(
            parse("addm mix  blue  monday "),
            Ok(Command::AddMatching {
                id: PlaylistId::new("mix"),
                text: "blue monday".into()
            })
        );
        assert_eq!(parse("filter"), Ok(Command::Filter(None)));
        assert_eq!(parse("filter night"), Ok(Command::Filter(Some("night".into()))));
    }

    #[test]
    fn rejects_incomplete_and_unknown_commands() {
        assert_eq!(parse("pl"), Err(ParseError("Usage: :pl <playlist>".into())));
        assert_eq!(parse("addm mix"), Err(ParseError("Usage: :addm <playlist> <text>".into())));
        assert_eq!(parse("play"), Err(ParseError("Unknown command: play".into())));
    }

    #[test]
    fn submitted_command_is_dispatched_and_closes_the_line() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        type_line(&mut commander, "pl mix", &task_tx, &event_tx);
        type_line(&mut commander, "scan", &task_tx, &event_tx);

        assert!(!commander.active());
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::SwitchPlaylist(id)) if id == PlaylistId::new("mix")));
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::ScanCatalog)));
    }

    #[test]
    fn bad_command_raises_warning() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        type_line(&mut commander, "bogus", &task_tx, &event_tx);

        assert!(task_rx.try_recv().is_err());
        match event_rx.try_recv() {
            Ok(AppEvent::Notify(n)) => assert_eq!(n.severity, Severity::Warning),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn keys_pass_through_while_inactive() {
        let (task_tx, _task_rx) = mpsc::channel();
        let (event_tx, _event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        let key = Event::Key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));

        assert!(!commander.handle_event(&key, &task_tx, &event_tx));
    }
}
