// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::civil::Weekday;

pub(crate) const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Sunday first.
pub(crate) const LONG_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub(crate) const SHORT_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Index of `weekday` into the day name tables.
pub(crate) fn day_index(weekday: Weekday) -> usize {
    usize::try_from(weekday.to_sunday_zero_offset()).unwrap_or_default()
}

/// Index of `month` (1-12) into the month name tables.
pub(crate) fn month_index(month: i8) -> usize {
    usize::try_from(month - 1).unwrap_or_default()
}

/// Matches the start of `value` against `table`, ignoring ASCII case.
///
/// Returns the index of the first matching name and the rest of `value`.
pub(crate) fn lookup<'a>(table: &[&str], value: &'a str) -> Option<(i64, &'a str)> {
    (0..).zip(table).find_map(|(index, name)| {
        let candidate = value.as_bytes().get(..name.len())?;
        candidate
            .eq_ignore_ascii_case(name.as_bytes())
            // Names are ASCII, so the split lands on a char boundary.
            .then(|| (index, &value[name.len()..]))
    })
}
