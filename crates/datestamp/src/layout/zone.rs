// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use jiff::Zoned;
use jiff::tz::{Offset, TimeZone};

use super::render::push_int;

/// Returns the length of the zone abbreviation at the start of `value`, if any.
///
/// Accepted forms are `ChST`, `MeST`, `GMT` with an optional signed hour,
/// a bare signed hour, three upper-case letters, four upper-case letters
/// ending in `T` (or `WITA`) and five upper-case letters ending in `T`.
pub(crate) fn zone_name_len(value: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    if bytes.len() < 3 {
        return None;
    }

    if value.starts_with("ChST") || value.starts_with("MeST") {
        return Some(4);
    }

    if let Some(rest) = value.strip_prefix("GMT") {
        return Some(3 + signed_hour_len(rest).unwrap_or(0));
    }

    if bytes[0] == b'+' || bytes[0] == b'-' {
        return signed_hour_len(value);
    }

    let upper = bytes.iter().take(6).take_while(|b| b.is_ascii_uppercase()).count();
    match upper {
        3 => Some(3),
        4 if bytes[3] == b'T' || value.starts_with("WITA") => Some(4),
        5 if bytes[4] == b'T' => Some(5),
        _ => None,
    }
}

/// Length of a `+h`/`-hh` suffix with an hour of at most 23.
fn signed_hour_len(value: &str) -> Option<usize> {
    let bytes = value.as_bytes();
    if !matches!(bytes.first(), Some(b'+' | b'-')) {
        return None;
    }

    let digits = bytes[1..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let hour: u32 = value[1..=digits].parse().ok()?;
    (hour <= 23).then_some(1 + digits)
}

/// The UTC offset implied by a zone abbreviation that is not otherwise known.
///
/// Only `GMT+h` and `GMT-h` carry an offset; every other name maps to zero.
pub(crate) fn implied_offset(name: &str) -> Offset {
    name.strip_prefix("GMT")
        .filter(|rest| !rest.is_empty())
        .and_then(|rest| rest.strip_prefix('+').unwrap_or(rest).parse::<i32>().ok())
        .and_then(|hours| Offset::from_seconds(hours * 3600).ok())
        .unwrap_or(Offset::UTC)
}

/// A fixed-offset time zone that renders `name` as its abbreviation.
pub(crate) fn named_zone(name: &str, offset: Offset) -> TimeZone {
    let seconds = offset.seconds();

    // POSIX TZ offsets count hours west of Greenwich.
    let (sign, abs) = if seconds > 0 { ('-', seconds) } else { ('+', -seconds) };
    let posix = format!("<{name}>{sign}{}:{:02}:{:02}", abs / 3600, abs / 60 % 60, abs % 60);

    TimeZone::posix(&posix).unwrap_or_else(|_| TimeZone::fixed(offset))
}

/// Writes the zone abbreviation of `zoned`.
///
/// Plain fixed offsets have no name of their own and are written as `-0700`,
/// except for UTC. Named zones keep their abbreviation even when it is
/// numeric, such as `+07`.
pub(crate) fn write_zone_name(out: &mut String, zoned: &Zoned) {
    let info = zoned.time_zone().to_offset_info(zoned.timestamp());
    let abbreviation = info.abbreviation();

    let unnamed =
        zoned.time_zone().to_fixed_offset().is_ok() && !abbreviation.starts_with(|c: char| c.is_ascii_alphabetic());
    if !abbreviation.is_empty() && !unnamed {
        out.push_str(abbreviation);
        return;
    }

    let minutes = zoned.offset().seconds() / 60;
    out.push(if minutes < 0 { '-' } else { '+' });
    let minutes = i64::from(minutes.abs());
    push_int(out, minutes / 60, 2);
    push_int(out, minutes % 60, 2);
}
