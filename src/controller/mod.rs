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

//! List controller for the playlist view.
//!
//! The controller owns the requested context, the current filter and the
//! most recent [`Snapshot`]. Fetches run on the task worker; every fetch is
//! tagged with a sequence number and only the answer to the latest one is
//! kept, so a slow response can never overwrite a newer list.
//!
//! The snapshot is kept behind an [`Arc`] and replaced as a whole, nothing
//! edits its rows in place.

use std::sync::{Arc, mpsc::Sender};

use anyhow::Result;
use log::debug;

use crate::{
    model::{PlaylistId, Snapshot},
    reorder::Refresh,
    tasks::AppTask,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FetchRequest {
    pub(crate) seq: u64,
    pub(crate) playlist_id: PlaylistId,
    pub(crate) filter: Option<String>,
}

pub(crate) trait PlaylistFetcher {
    fn fetch(&self, request: FetchRequest) -> Result<()>;
}

impl PlaylistFetcher for Sender<AppTask> {
    fn fetch(&self, request: FetchRequest) -> Result<()> {
        self.send(AppTask::FetchPlaylist(request))?;
        Ok(())
    }
}

pub(crate) struct ListController<F = Sender<AppTask>> {
    context: PlaylistId,
    filter: Option<String>,
    snapshot: Arc<Snapshot>,
    latest_seq: u64,
    loading: bool,
    fetcher: F,
}

impl<F: PlaylistFetcher> ListController<F> {
    pub(crate) fn new(context: PlaylistId, fetcher: F) -> Self {
        Self {
            snapshot: Arc::new(Snapshot::empty(context.clone())),
            context,
            filter: None,
            latest_seq: 0,
            loading: false,
            fetcher,
        }
    }

    /// Sets the initial filter. Nothing is fetched until the first refresh.
    pub(crate) fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter.filter(|f| !f.trim().is_empty());
        self
    }

    pub(crate) fn context(&self) -> &PlaylistId {
        &self.context
    }

    pub(crate) fn snapshot(&self) -> &Arc<Snapshot> {
        &self.snapshot
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    /// Asks for another playlist. The previous rows stay in place until the
    /// new ones arrive, the view detects them as stale.
    pub(crate) fn set_context(&mut self, context: PlaylistId) -> Result<()> {
        if context == self.context {
            return Ok(());
        }

        debug!("Switching playlist '{}' -> '{}'", self.context, context);
        self.context = context;
        self.refresh()
    }

    pub(crate) fn set_filter(&mut self, filter: Option<String>) -> Result<()> {
        let filter = filter.filter(|f| !f.trim().is_empty());
        if filter == self.filter {
            return Ok(());
        }

        self.filter = filter;
        self.refresh()
    }

    /// Accepts the result of a fetch, returning whether it replaced the
    /// current snapshot.
    pub(crate) fn on_fetched(&mut self, seq: u64, snapshot: Snapshot) -> bool {
        if seq != self.latest_seq {
            debug!("Dropping superseded fetch {seq}, latest is {}", self.latest_seq);
            return false;
        }

        self.loading = false;
        self.snapshot = Arc::new(snapshot);
        true
    }

    /// Records a failed fetch. The current snapshot is kept.
    pub(crate) fn on_fetch_failed(&mut self, seq: u64) -> bool {
        if seq != self.latest_seq {
            return false;
        }

        self.loading = false;
        true
    }
}

impl<F: PlaylistFetcher> Refresh for ListController<F> {
    fn current_context(&self) -> &PlaylistId {
        &self.context
    }

    fn refresh(&mut self) -> Result<()> {
        self.latest_seq += 1;
        self.loading = true;

        self.fetcher.fetch(FetchRequest {
            seq: self.latest_seq,
            playlist_id: self.context.clone(),
            filter: self.filter.clone(),
        })
    }
}
