// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::iter;

use jiff::Zoned;

use super::chunk::{Chunk, Fraction, OffsetPrecision, OffsetStyle, next_chunk};
use super::names::{LONG_DAYS, LONG_MONTHS, SHORT_DAYS, SHORT_MONTHS, day_index, month_index};
use super::zone::write_zone_name;

/// Appends `zoned` rendered with `layout` to `out`.
pub(crate) fn render_into(out: &mut String, zoned: &Zoned, mut layout: &str) {
    loop {
        let split = next_chunk(layout);
        out.push_str(split.prefix);
        let Some(chunk) = split.chunk else {
            return;
        };
        layout = split.suffix;

        let hour = i64::from(zoned.hour());
        match chunk {
            Chunk::LongMonth => out.push_str(LONG_MONTHS[month_index(zoned.month())]),
            Chunk::Month => out.push_str(SHORT_MONTHS[month_index(zoned.month())]),
            Chunk::NumMonth => push_int(out, zoned.month().into(), 0),
            Chunk::ZeroMonth => push_int(out, zoned.month().into(), 2),
            Chunk::LongWeekday => out.push_str(LONG_DAYS[day_index(zoned.weekday())]),
            Chunk::Weekday => out.push_str(SHORT_DAYS[day_index(zoned.weekday())]),
            Chunk::Day => push_int(out, zoned.day().into(), 0),
            Chunk::UnderDay => {
                if zoned.day() < 10 {
                    out.push(' ');
                }
                push_int(out, zoned.day().into(), 0);
            }
            Chunk::ZeroDay => push_int(out, zoned.day().into(), 2),
            Chunk::UnderYearDay => {
                let day = zoned.day_of_year();
                if day < 100 {
                    out.push(' ');
                    if day < 10 {
                        out.push(' ');
                    }
                }
                push_int(out, day.into(), 0);
            }
            Chunk::ZeroYearDay => push_int(out, zoned.day_of_year().into(), 3),
            Chunk::Hour => push_int(out, hour, 2),
            Chunk::Hour12 => push_int(out, twelve_hour(hour), 0),
            Chunk::ZeroHour12 => push_int(out, twelve_hour(hour), 2),
            Chunk::Minute => push_int(out, zoned.minute().into(), 0),
            Chunk::ZeroMinute => push_int(out, zoned.minute().into(), 2),
            Chunk::Second => push_int(out, zoned.second().into(), 0),
            Chunk::ZeroSecond => push_int(out, zoned.second().into(), 2),
            Chunk::LongYear => push_int(out, zoned.year().into(), 4),
            Chunk::Year => push_int(out, i64::from(zoned.year()).abs() % 100, 2),
            Chunk::Pm => out.push_str(if hour >= 12 { "PM" } else { "AM" }),
            Chunk::LowerPm => out.push_str(if hour >= 12 { "pm" } else { "am" }),
            Chunk::ZoneName => write_zone_name(out, zoned),
            Chunk::Offset(style) => push_offset(out, zoned.offset().seconds(), style),
            Chunk::Fraction(fraction) => push_fraction(out, zoned.subsec_nanosecond(), fraction),
        }
    }
}

/// Appends `value` in decimal, zero padded to at least `width` digits.
pub(crate) fn push_int(out: &mut String, value: i64, width: usize) {
    if value < 0 {
        out.push('-');
    }

    let digits = value.unsigned_abs().to_string();
    out.extend(iter::repeat_n('0', width.saturating_sub(digits.len())));
    out.push_str(&digits);
}

fn twelve_hour(hour: i64) -> i64 {
    match hour % 12 {
        0 => 12,
        hour => hour,
    }
}

fn push_offset(out: &mut String, seconds: i32, style: OffsetStyle) {
    if seconds == 0 && style.utc_as_z {
        out.push('Z');
        return;
    }

    out.push(if seconds < 0 { '-' } else { '+' });
    let abs = i64::from(seconds.unsigned_abs());
    push_int(out, abs / 3600, 2);

    if style.precision == OffsetPrecision::Hours {
        return;
    }

    if style.colon {
        out.push(':');
    }
    push_int(out, abs / 60 % 60, 2);

    if style.precision == OffsetPrecision::Seconds {
        if style.colon {
            out.push(':');
        }
        push_int(out, abs % 60, 2);
    }
}

fn push_fraction(out: &mut String, nanos: i32, fraction: Fraction) {
    if fraction.trim && nanos == 0 {
        return;
    }

    let separator = char::from(fraction.separator);
    let start = out.len();
    out.push(separator);
    push_int(out, nanos.into(), 9);
    if fraction.digits < 9 {
        out.truncate(start + 1 + fraction.digits);
    }

    if fraction.trim {
        let trimmed = out[start..].trim_end_matches('0').trim_end_matches(separator).len();
        out.truncate(start + trimmed);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::{Offset, TimeZone};

    use super::*;

    fn render(zoned: &Zoned, layout: &str) -> String {
        let mut out = String::new();
        render_into(&mut out, zoned, layout);
        out
    }

    fn sample() -> Zoned {
        date(2024, 1, 1).at(1, 0, 0, 1).to_zoned(TimeZone::UTC).unwrap()
    }

    fn afternoon(offset_seconds: i32) -> Zoned {
        let offset = Offset::from_seconds(offset_seconds).unwrap();
        date(2009, 11, 10)
            .at(23, 4, 5, 120_000_000)
            .to_zoned(TimeZone::fixed(offset))
            .unwrap()
    }

    #[test]
    fn push_int_pads() {
        let mut out = String::new();
        push_int(&mut out, 7, 2);
        push_int(&mut out, 123, 2);
        push_int(&mut out, -5, 4);
        push_int(&mut out, 0, 0);
        assert_eq!(out, "07123-00050");
    }

    #[test]
    fn blank_padded_day() {
        assert_eq!(render(&sample(), "Jan _2"), "Jan  1");
        assert_eq!(render(&afternoon(0), "Jan _2"), "Nov 10");
    }

    #[test]
    fn names() {
        assert_eq!(render(&afternoon(0), "Monday January Mon Jan"), "Tuesday November Tue Nov");
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(render(&sample(), "3:04PM"), "1:00AM");
        assert_eq!(render(&afternoon(0), "03:04pm"), "11:04pm");

        let midnight = date(2024, 1, 1).at(0, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
        assert_eq!(render(&midnight, "3PM"), "12AM");
    }

    #[test]
    fn years() {
        assert_eq!(render(&sample(), "2006 06"), "2024 24");

        let early = date(5, 3, 4).at(0, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
        assert_eq!(render(&early, "2006 06"), "0005 05");
    }

    #[test]
    fn day_of_year() {
        let zoned = date(2024, 2, 10).at(0, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
        assert_eq!(render(&zoned, "002|__2"), "041| 41");
    }

    #[test]
    fn offsets() {
        let zoned = afternoon(-(7 * 3600 + 30 * 60));
        assert_eq!(render(&zoned, "Z07:00 -0700 -07 -07:00:00"), "-07:30 -0730 -07 -07:30:00");

        let utc = afternoon(0);
        assert_eq!(render(&utc, "Z07:00|Z0700|-07:00"), "Z|Z|+00:00");
    }

    #[test]
    fn fractions() {
        let zoned = afternoon(0);
        assert_eq!(render(&zoned, "05.000"), "05.120");
        assert_eq!(render(&zoned, "05.999999999"), "05.12");
        assert_eq!(render(&zoned, "05,000000"), "05,120000");
        assert_eq!(render(&zoned, "05.9"), "05.1");

        let whole = sample().with().subsec_nanosecond(0).build().unwrap();
        assert_eq!(render(&whole, "05.999"), "00");
        assert_eq!(render(&whole, "05.000"), "00.000");
    }

    #[test]
    fn trimmed_fraction_without_significant_digits_is_omitted() {
        // 1ns does not survive a millisecond-wide trimmed fraction.
        assert_eq!(render(&sample(), "05.999"), "00");
        assert_eq!(render(&sample(), "05.999999999"), "00.000000001");
    }

    #[test]
    fn zone_names() {
        assert_eq!(render(&sample(), "MST"), "UTC");
        assert_eq!(render(&afternoon(3600), "MST"), "+0100");
    }
}
