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

/// Formats a position in seconds into a human-readable `M:SS` string.
///
/// Fractional seconds are truncated, never rounded. Positions that are not
/// yet known (negative, NaN or infinite) are shown as `0:00`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(3599.9), "59:59");
/// ```
pub(crate) fn format_time(seconds: f64) -> String {
    let total_seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    };
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}", mins, secs)
}

/// Parses a user-entered position, either plain seconds (`"95"`) or
/// minutes and seconds (`"1:35"`, `"1:35.5"`).
///
/// Returns `None` for anything negative or malformed.
pub(crate) fn parse_time(text: &str) -> Option<f64> {
    let text = text.trim();

    let seconds = match text.split_once(':') {
        Some((mins, secs)) => {
            let mins: u64 = mins.parse().ok()?;
            let secs: f64 = secs.parse().ok()?;
            if !(0.0..60.0).contains(&secs) {
                return None;
            }
            mins as f64 * 60.0 + secs
        }
        None => text.parse().ok()?,
    };

    (seconds.is_finite() && seconds >= 0.0).then_some(seconds)
}
