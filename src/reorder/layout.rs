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

//! Selection driven layout shift.

/// While rows are selected the bulk-action bar takes the place of the list
/// header instead of pushing the rows down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct LayoutAdjust {
    pub(crate) shifted_up: bool,
}

pub(crate) fn layout(selected_count: usize) -> LayoutAdjust {
    LayoutAdjust {
        shifted_up: selected_count > 0,
    }
}
