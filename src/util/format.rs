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

/// How [`format_duration`] lays out a number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeFormat {
    /// `MM:SS`, minutes are not wrapped.
    Minutes,
    /// `H:MM:SS`, used for playlist totals.
    Hours,
}

/// Formats a duration in seconds into a human-readable `MM:SS` string.
///
/// This is used for the duration column of the track table.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65), "01:05");
/// assert_eq!(format_time(3600), "60:00");
/// ```
pub(crate) fn format_time(total_seconds: u64) -> String {
    format_duration(total_seconds, TimeFormat::Minutes)
}

pub(crate) fn format_duration(total_seconds: u64, format: TimeFormat) -> String {
    let secs = total_seconds % 60;
    match format {
        TimeFormat::Minutes => format!("{:02}:{:02}", total_seconds / 60, secs),
        TimeFormat::Hours => {
            let hours = total_seconds / 3600;
            let mins = (total_seconds % 3600) / 60;
            format!("{hours}:{mins:02}:{secs:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_are_not_wrapped() {
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn totals_include_hours() {
        assert_eq!(format_duration(0, TimeFormat::Hours), "0:00:00");
        assert_eq!(format_duration(3725, TimeFormat::Hours), "1:02:05");
    }
}
