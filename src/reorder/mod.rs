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

//! Ordered-list reconciliation and reorder coordination.
//!
//! The playlist view never reorders its rows locally. A drag is translated
//! into a [`PositionalUpdate`] for the store, and the rows shown are always
//! the ones most recently fetched from it. This module holds the pieces of
//! that loop:
//!
//! * [`stale`]: decides whether the fetched rows belong to the requested
//!   playlist at all.
//! * [`coordinator`]: turns a completed drag into a store request and reacts
//!   to its outcome.
//! * [`relay`]: refreshes the list when tracks were added to the playlist
//!   being displayed.
//! * [`layout`]: the selection driven layout shift.
//! * [`view`]: combines the above into a single [`view::ViewState`] per
//!   render pass.
//!
//! The collaborators these pieces talk to (the store and the list
//! controller) sit behind the traits below so the logic can be exercised
//! without a database or a terminal.

pub(crate) mod coordinator;
pub(crate) mod layout;
pub(crate) mod relay;
pub(crate) mod stale;
pub(crate) mod view;

use anyhow::Result;

use crate::model::{PlaylistId, PositionalUpdate};

/// The authority on playlist order.
///
/// Issuing a request must not block, the outcome is delivered later as a
/// separate event.
pub(crate) trait PlaylistTrackUpdater {
    fn update_playlist_track(&self, request: PositionalUpdate) -> Result<()>;
}

/// A list that can be re-fetched from the store.
pub(crate) trait Refresh {
    /// The playlist the list is currently asked to display.
    fn current_context(&self) -> &PlaylistId;

    /// Re-fetches the current context, replacing the rows wholesale when the
    /// result arrives.
    fn refresh(&mut self) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::RefCell;

    use anyhow::Result;

    use super::{PlaylistTrackUpdater, Refresh};
    use crate::{
        model::{PlaylistId, PositionalUpdate},
        notify::{MessageKey, Notify, Severity},
    };

    #[derive(Default)]
    pub(crate) struct RecordingUpdater {
        pub(crate) requests: RefCell<Vec<PositionalUpdate>>,
    }

    impl PlaylistTrackUpdater for RecordingUpdater {
        fn update_playlist_track(&self, request: PositionalUpdate) -> Result<()> {
            self.requests.borrow_mut().push(request);
            Ok(())
        }
    }

    pub(crate) struct CountingList {
        pub(crate) context: PlaylistId,
        pub(crate) refreshes: usize,
    }

    impl CountingList {
        pub(crate) fn new(context: &str) -> Self {
            Self {
                context: PlaylistId::new(context),
                refreshes: 0,
            }
        }
    }

    impl Refresh for CountingList {
        fn current_context(&self) -> &PlaylistId {
            &self.context
        }

        fn refresh(&mut self) -> Result<()> {
            self.refreshes += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingNotifier {
        pub(crate) messages: RefCell<Vec<(MessageKey, Severity)>>,
    }

    impl Notify for RecordingNotifier {
        fn notify(&self, key: MessageKey, severity: Severity) {
            self.messages.borrow_mut().push((key, severity));
        }
    }
}
