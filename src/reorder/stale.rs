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

//! Stale-context detection.

use crate::model::{PlaylistId, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Staleness {
    Stale,
    Fresh,
}

/// Decides whether the rows of a snapshot may be rendered for a context.
///
/// While a new playlist is being fetched the controller still holds the rows
/// of the previous one, those must not be shown under the new context. A
/// snapshot never mixes playlists, so only the first row is checked.
///
/// An empty snapshot is always stale: an empty playlist cannot be told apart
/// from one that has not loaded yet.
pub(crate) fn detect(snapshot: &Snapshot, context: &PlaylistId) -> Staleness {
    match snapshot.first() {
        Some(row) if row.playlist_id == *context => Staleness::Fresh,
        _ => Staleness::Stale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::row;

    fn snapshot(rows: &[(i64, &str)]) -> Snapshot {
        Snapshot::new(
            PlaylistId::new("requested"),
            None,
            rows.iter().map(|(id, pl)| row(*id, pl)).collect(),
        )
    }

    #[test]
    fn empty_snapshot_is_stale() {
        let context = PlaylistId::new("P");

        assert_eq!(detect(&Snapshot::empty(context.clone()), &context), Staleness::Stale);
    }

    #[test]
    fn matching_first_row_is_fresh() {
        let s = snapshot(&[(1, "P"), (2, "P")]);

        assert_eq!(detect(&s, &PlaylistId::new("P")), Staleness::Fresh);
    }

    #[test]
    fn rows_of_another_playlist_are_stale() {
        let s = snapshot(&[(9, "X")]);

        assert_eq!(detect(&s, &PlaylistId::new("Y")), Staleness::Stale);
    }

    #[test]
    fn only_the_first_row_is_sampled() {
        let s = snapshot(&[(1, "P"), (2, "Q")]);

        assert_eq!(detect(&s, &PlaylistId::new("P")), Staleness::Fresh);
        assert_eq!(detect(&s, &PlaylistId::new("Q")), Staleness::Stale);
    }
}
