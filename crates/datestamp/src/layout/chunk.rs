// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Scanner that splits a layout into literal text and standard chunks.

/// A standard element of a layout, written in terms of the reference time
/// `Mon Jan 2 15:04:05 MST 2006`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Chunk {
    /// `January`
    LongMonth,
    /// `Jan`
    Month,
    /// `1`
    NumMonth,
    /// `01`
    ZeroMonth,
    /// `Monday`
    LongWeekday,
    /// `Mon`
    Weekday,
    /// `2`
    Day,
    /// `_2`
    UnderDay,
    /// `02`
    ZeroDay,
    /// `__2`
    UnderYearDay,
    /// `002`
    ZeroYearDay,
    /// `15`
    Hour,
    /// `3`
    Hour12,
    /// `03`
    ZeroHour12,
    /// `4`
    Minute,
    /// `04`
    ZeroMinute,
    /// `5`
    Second,
    /// `05`
    ZeroSecond,
    /// `2006`
    LongYear,
    /// `06`
    Year,
    /// `PM`
    Pm,
    /// `pm`
    LowerPm,
    /// `MST`
    ZoneName,
    /// `-0700`, `Z07:00` and friends.
    Offset(OffsetStyle),
    /// `.000`, `,999` and friends.
    Fraction(Fraction),
}

/// How a numeric UTC offset is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OffsetStyle {
    /// `Z` is written instead of a zero offset (the `Z07:00` family).
    pub(crate) utc_as_z: bool,
    /// Components are separated by `:`.
    pub(crate) colon: bool,
    pub(crate) precision: OffsetPrecision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OffsetPrecision {
    Hours,
    Minutes,
    Seconds,
}

/// A fractional second chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fraction {
    /// Number of digits in the layout. At most nine are ever written.
    pub(crate) digits: usize,
    /// `9` digits: trailing zeros are trimmed and a zero fraction is omitted.
    pub(crate) trim: bool,
    /// `.` or `,`.
    pub(crate) separator: u8,
}

/// The result of scanning a layout for its next chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Split<'a> {
    /// Literal text before the chunk.
    pub(crate) prefix: &'a str,
    /// The chunk, `None` when the rest of the layout is literal text.
    pub(crate) chunk: Option<Chunk>,
    /// The layout text the chunk was recognized from.
    pub(crate) token: &'a str,
    /// Layout text after the chunk.
    pub(crate) suffix: &'a str,
}

const OFFSET_TOKENS: [(&str, bool, OffsetPrecision); 10] = [
    // Longer tokens come first so that `-070000` is not read as `-0700`.
    ("Z070000", false, OffsetPrecision::Seconds),
    ("Z07:00:00", true, OffsetPrecision::Seconds),
    ("Z0700", false, OffsetPrecision::Minutes),
    ("Z07:00", true, OffsetPrecision::Minutes),
    ("Z07", false, OffsetPrecision::Hours),
    ("-070000", false, OffsetPrecision::Seconds),
    ("-07:00:00", true, OffsetPrecision::Seconds),
    ("-0700", false, OffsetPrecision::Minutes),
    ("-07:00", true, OffsetPrecision::Minutes),
    ("-07", false, OffsetPrecision::Hours),
];

/// Finds the first chunk in `layout`.
#[expect(clippy::too_many_lines, reason = "one branch per layout element")]
pub(crate) fn next_chunk(layout: &str) -> Split<'_> {
    let bytes = layout.as_bytes();

    for i in 0..bytes.len() {
        let tail = &bytes[i..];
        let found = match bytes[i] {
            b'J' if tail.starts_with(b"Jan") => {
                if tail.starts_with(b"January") {
                    Some((Chunk::LongMonth, 7))
                } else if !starts_with_lowercase(&bytes[i + 3..]) {
                    Some((Chunk::Month, 3))
                } else {
                    None
                }
            }
            b'M' => {
                if tail.starts_with(b"Monday") {
                    Some((Chunk::LongWeekday, 6))
                } else if tail.starts_with(b"Mon") && !starts_with_lowercase(&bytes[i + 3..]) {
                    Some((Chunk::Weekday, 3))
                } else if tail.starts_with(b"MST") {
                    Some((Chunk::ZoneName, 3))
                } else {
                    None
                }
            }
            b'0' => match bytes.get(i + 1) {
                Some(b'1') => Some((Chunk::ZeroMonth, 2)),
                Some(b'2') => Some((Chunk::ZeroDay, 2)),
                Some(b'3') => Some((Chunk::ZeroHour12, 2)),
                Some(b'4') => Some((Chunk::ZeroMinute, 2)),
                Some(b'5') => Some((Chunk::ZeroSecond, 2)),
                Some(b'6') => Some((Chunk::Year, 2)),
                Some(b'0') if bytes.get(i + 2) == Some(&b'2') => Some((Chunk::ZeroYearDay, 3)),
                _ => None,
            },
            b'1' => {
                if bytes.get(i + 1) == Some(&b'5') {
                    Some((Chunk::Hour, 2))
                } else {
                    Some((Chunk::NumMonth, 1))
                }
            }
            b'2' => {
                if tail.starts_with(b"2006") {
                    Some((Chunk::LongYear, 4))
                } else {
                    Some((Chunk::Day, 1))
                }
            }
            b'_' => {
                if tail.starts_with(b"_2006") {
                    // A literal `_` followed by the year.
                    return Split {
                        prefix: &layout[..=i],
                        chunk: Some(Chunk::LongYear),
                        token: &layout[i + 1..i + 5],
                        suffix: &layout[i + 5..],
                    };
                } else if tail.starts_with(b"_2") {
                    Some((Chunk::UnderDay, 2))
                } else if tail.starts_with(b"__2") {
                    Some((Chunk::UnderYearDay, 3))
                } else {
                    None
                }
            }
            b'3' => Some((Chunk::Hour12, 1)),
            b'4' => Some((Chunk::Minute, 1)),
            b'5' => Some((Chunk::Second, 1)),
            b'P' if bytes.get(i + 1) == Some(&b'M') => Some((Chunk::Pm, 2)),
            b'p' if bytes.get(i + 1) == Some(&b'm') => Some((Chunk::LowerPm, 2)),
            b'-' | b'Z' => OFFSET_TOKENS
                .iter()
                .find(|(token, ..)| tail.starts_with(token.as_bytes()))
                .map(|&(token, colon, precision)| {
                    let style = OffsetStyle {
                        utc_as_z: token.starts_with('Z'),
                        colon,
                        precision,
                    };
                    (Chunk::Offset(style), token.len())
                }),
            separator @ (b'.' | b',') => fraction_at(bytes, i).map(|(digits, trim)| {
                let fraction = Fraction {
                    digits,
                    trim,
                    separator,
                };
                (Chunk::Fraction(fraction), digits + 1)
            }),
            _ => None,
        };

        if let Some((chunk, len)) = found {
            return Split {
                prefix: &layout[..i],
                chunk: Some(chunk),
                token: &layout[i..i + len],
                suffix: &layout[i + len..],
            };
        }
    }

    Split {
        prefix: layout,
        chunk: None,
        token: "",
        suffix: "",
    }
}

/// Recognizes a run of `0` or `9` digits after a separator at `at`. The run
/// must not be followed by another digit.
fn fraction_at(bytes: &[u8], at: usize) -> Option<(usize, bool)> {
    let digit = *bytes.get(at + 1)?;
    if digit != b'0' && digit != b'9' {
        return None;
    }

    let run = bytes[at + 1..].iter().take_while(|&&b| b == digit).count();
    if bytes.get(at + 1 + run).is_some_and(u8::is_ascii_digit) {
        return None;
    }

    Some((run, digit == b'9'))
}

fn starts_with_lowercase(bytes: &[u8]) -> bool {
    bytes.first().is_some_and(u8::is_ascii_lowercase)
}
