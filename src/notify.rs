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

//! Transient user notifications.
//!
//! Notifications are fire-and-forget: any part of the application can raise
//! one through the [`Notify`] sink, it travels over the event channel and is
//! shown on the status line until it expires.

use std::{
    fmt,
    sync::mpsc::Sender,
    time::{Duration, Instant},
};

use crate::{events::AppEvent, model::PlaylistId};

const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MessageKey {
    PageError,
    ReadOnly(bool),
    PlaylistCreated(PlaylistId),
    TracksAdded { count: usize, playlist_id: PlaylistId },
    LibraryScanned(i64),
    Playlists(String),
    Failure(String),
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKey::PageError => write!(f, "Something went wrong, please try again"),
            MessageKey::ReadOnly(true) => write!(f, "Playlist is read-only"),
            MessageKey::ReadOnly(false) => write!(f, "Playlist is editable"),
            MessageKey::PlaylistCreated(id) => write!(f, "Created playlist '{id}'"),
            MessageKey::TracksAdded { count, playlist_id } => {
                write!(f, "Added {count} track(s) to '{playlist_id}'")
            }
            MessageKey::LibraryScanned(count) => write!(f, "Library contains {count} tracks"),
            MessageKey::Playlists(listing) => write!(f, "Playlists: {listing}"),
            MessageKey::Failure(message) => f.write_str(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notification {
    pub(crate) key: MessageKey,
    pub(crate) severity: Severity,
}

pub(crate) trait Notify {
    fn notify(&self, key: MessageKey, severity: Severity);
}

impl Notify for Sender<AppEvent> {
    fn notify(&self, key: MessageKey, severity: Severity) {
        // A closed channel means the application is shutting down.
        let _ = self.send(AppEvent::Notify(Notification { key, severity }));
    }
}

/// The notification currently on the status line.
#[derive(Debug, Default)]
pub(crate) struct Notifications {
    current: Option<(Notification, Instant)>,
}

impl Notifications {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn show(&mut self, notification: Notification, now: Instant) {
        self.current = Some((notification, now));
    }

    /// Drops the current notification once it has been shown long enough.
    pub(crate) fn expire(&mut self, now: Instant) {
        if let Some((_, shown_at)) = &self.current {
            if now.duration_since(*shown_at) >= NOTIFICATION_TTL {
                self.current = None;
            }
        }
    }

    pub(crate) fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning() -> Notification {
        Notification {
            key: MessageKey::PageError,
            severity: Severity::Warning,
        }
    }

    #[test]
    fn notification_expires_after_ttl() {
        let mut notifications = Notifications::new();
        let shown = Instant::now();
        notifications.show(warning(), shown);

        notifications.expire(shown + Duration::from_secs(1));
        assert_eq!(notifications.current(), Some(&warning()));

        notifications.expire(shown + NOTIFICATION_TTL);
        assert_eq!(notifications.current(), None);
    }

    #[test]
    fn sender_delivers_notify_event() {
        let (tx, rx) = std::sync::mpsc::channel();

        tx.notify(MessageKey::PageError, Severity::Warning);

        match rx.try_recv() {
            Ok(AppEvent::Notify(n)) => assert_eq!(n, warning()),
            other => panic!("unexpected {other:?}"),
        }
    }
}
