// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use jiff::Zoned;
use jiff::civil::DateTime;
use jiff::tz::{Offset, TimeZone};

use super::chunk::{Chunk, OffsetPrecision, OffsetStyle, next_chunk};
use super::names::{LONG_DAYS, LONG_MONTHS, SHORT_DAYS, SHORT_MONTHS, lookup};
use super::zone::{implied_offset, named_zone, zone_name_len};

/// Cumulative day counts at the start of each month in a non-leap year.
const DAYS_BEFORE: [i64; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// Text that does not conform to a layout.
///
/// The error carries the layout, the complete input and, for element level
/// mismatches, the layout element that failed and the input at that point.
///
/// # Examples
///
/// ```
/// use datestamp::layout;
///
/// let err = layout::parse("2006-01-02", "2024-13-01").unwrap_err();
/// assert_eq!(err.layout(), "2006-01-02");
/// assert_eq!(err.value(), "2024-13-01");
/// assert_eq!(err.to_string(), r#"parsing time "2024-13-01": month out of range"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    layout: String,
    value: String,
    layout_element: String,
    value_element: String,
    reason: Reason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Reason {
    Mismatch,
    ExtraText,
    OutOfRange(&'static str),
    YearDayMismatch(&'static str),
    Unrepresentable(String),
    InvalidUtf8,
}

impl ParseError {
    fn new(layout: &str, value: &str, layout_element: &str, value_element: &str, reason: Reason) -> Self {
        Self {
            layout: layout.to_owned(),
            value: value.to_owned(),
            layout_element: layout_element.to_owned(),
            value_element: value_element.to_owned(),
            reason,
        }
    }

    /// Text that is not UTF-8 never matches a layout.
    pub(crate) fn invalid_utf8(layout: &str, raw: &[u8]) -> Self {
        let value = String::from_utf8_lossy(raw);
        Self::new(layout, &value, "", &value, Reason::InvalidUtf8)
    }

    /// The layout the text was parsed against.
    #[must_use]
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// The complete text that failed to parse.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The layout element that could not be matched, empty when the failure
    /// is not tied to a single element.
    #[must_use]
    pub fn layout_element(&self) -> &str {
        &self.layout_element
    }

    /// The remaining text at the point of failure.
    #[must_use]
    pub fn value_element(&self) -> &str {
        &self.value_element
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "parsing time {:?}", self.value)?;
        match &self.reason {
            Reason::Mismatch => write!(
                f,
                " as {:?}: cannot parse {:?} as {:?}",
                self.layout, self.value_element, self.layout_element
            ),
            Reason::ExtraText => write!(f, ": extra text: {:?}", self.value_element),
            Reason::OutOfRange(what) => write!(f, ": {what} out of range"),
            Reason::YearDayMismatch(what) => write!(f, ": day-of-year does not match {what}"),
            Reason::Unrepresentable(message) => write!(f, ": {message}"),
            Reason::InvalidUtf8 => f.write_str(": invalid UTF-8"),
        }
    }
}

impl StdError for ParseError {}

/// Why a single chunk failed to match.
enum Failure {
    Bad,
    Range(&'static str),
}

/// Values collected while walking the layout.
#[derive(Default)]
struct Fields<'a> {
    year: i64,
    month: Option<i64>,
    day: Option<i64>,
    year_day: Option<i64>,
    hour: i64,
    minute: i64,
    second: i64,
    nanos: i64,
    am: bool,
    pm: bool,
    utc: bool,
    offset: Option<i32>,
    zone_name: Option<&'a str>,
}

/// Parses `value` strictly against `layout`.
pub(crate) fn parse(layout: &str, value: &str) -> Result<Zoned, ParseError> {
    let mut fields = Fields::default();
    let mut remaining_layout = layout;
    let mut rest = value;

    loop {
        let split = next_chunk(remaining_layout);
        rest = skip(rest, split.prefix)
            .map_err(|at| ParseError::new(layout, value, split.prefix, at, Reason::Mismatch))?;

        let Some(chunk) = split.chunk else {
            if !rest.is_empty() {
                return Err(ParseError::new(layout, value, "", rest, Reason::ExtraText));
            }
            break;
        };
        remaining_layout = split.suffix;

        let hold = rest;
        rest = match fields.take(chunk, rest, remaining_layout) {
            Ok(rest) => rest,
            Err(Failure::Range(what)) => {
                return Err(ParseError::new(layout, value, split.token, hold, Reason::OutOfRange(what)));
            }
            Err(Failure::Bad) => {
                return Err(ParseError::new(layout, value, split.token, hold, Reason::Mismatch));
            }
        };
    }

    fields
        .into_zoned()
        .map_err(|reason| ParseError::new(layout, value, "", rest, reason))
}

impl<'a> Fields<'a> {
    /// Consumes the text for `chunk` from the start of `value`.
    #[expect(clippy::too_many_lines, reason = "one arm per layout element")]
    fn take(&mut self, chunk: Chunk, value: &'a str, layout_after: &str) -> Result<&'a str, Failure> {
        let bytes = value.as_bytes();
        match chunk {
            Chunk::Year => {
                let (year, rest) = fixed_digits(value, 2)?;
                // Two digit years pivot at 1969.
                self.year = if year >= 69 { year + 1900 } else { year + 2000 };
                Ok(rest)
            }
            Chunk::LongYear => {
                let (year, rest) = fixed_digits(value, 4)?;
                self.year = year;
                Ok(rest)
            }
            Chunk::Month | Chunk::LongMonth => {
                let table = if chunk == Chunk::Month { &SHORT_MONTHS } else { &LONG_MONTHS };
                let (index, rest) = lookup(table, value).ok_or(Failure::Bad)?;
                self.month = Some(index + 1);
                Ok(rest)
            }
            Chunk::NumMonth | Chunk::ZeroMonth => {
                let (month, rest) = number(value, chunk == Chunk::ZeroMonth)?;
                if !(1..=12).contains(&month) {
                    return Err(Failure::Range("month"));
                }
                self.month = Some(month);
                Ok(rest)
            }
            Chunk::Weekday | Chunk::LongWeekday => {
                // Weekdays are checked for spelling only, never against the date.
                let table = if chunk == Chunk::Weekday { &SHORT_DAYS } else { &LONG_DAYS };
                let (_, rest) = lookup(table, value).ok_or(Failure::Bad)?;
                Ok(rest)
            }
            Chunk::Day | Chunk::UnderDay | Chunk::ZeroDay => {
                let value = if chunk == Chunk::UnderDay {
                    value.strip_prefix(' ').unwrap_or(value)
                } else {
                    value
                };
                // Any one or two digit day is accepted here and validated
                // against the month once parsing completes.
                let (day, rest) = number(value, chunk == Chunk::ZeroDay)?;
                self.day = Some(day);
                Ok(rest)
            }
            Chunk::UnderYearDay | Chunk::ZeroYearDay => {
                let mut value = value;
                if chunk == Chunk::UnderYearDay {
                    for _ in 0..2 {
                        value = value.strip_prefix(' ').unwrap_or(value);
                    }
                }
                let (day, rest) = number3(value, chunk == Chunk::ZeroYearDay)?;
                self.year_day = Some(day);
                Ok(rest)
            }
            Chunk::Hour => {
                let (hour, rest) = number(value, false)?;
                if hour >= 24 {
                    return Err(Failure::Range("hour"));
                }
                self.hour = hour;
                Ok(rest)
            }
            Chunk::Hour12 | Chunk::ZeroHour12 => {
                let (hour, rest) = number(value, chunk == Chunk::ZeroHour12)?;
                if hour > 12 {
                    return Err(Failure::Range("hour"));
                }
                self.hour = hour;
                Ok(rest)
            }
            Chunk::Minute | Chunk::ZeroMinute => {
                let (minute, rest) = number(value, chunk == Chunk::ZeroMinute)?;
                if minute >= 60 {
                    return Err(Failure::Range("minute"));
                }
                self.minute = minute;
                Ok(rest)
            }
            Chunk::Second | Chunk::ZeroSecond => {
                let (second, rest) = number(value, chunk == Chunk::ZeroSecond)?;
                if second >= 60 {
                    return Err(Failure::Range("second"));
                }
                self.second = second;
                self.trailing_fraction(rest, layout_after)
            }
            Chunk::Pm | Chunk::LowerPm => {
                let marker = value.get(..2).ok_or(Failure::Bad)?;
                let (am, pm) = if chunk == Chunk::Pm { ("AM", "PM") } else { ("am", "pm") };
                if marker == pm {
                    self.pm = true;
                } else if marker == am {
                    self.am = true;
                } else {
                    return Err(Failure::Bad);
                }
                Ok(&value[2..])
            }
            Chunk::Offset(style) => {
                if style.utc_as_z
                    && let Some(rest) = value.strip_prefix('Z')
                {
                    self.utc = true;
                    return Ok(rest);
                }
                let (offset, consumed) = numeric_offset(bytes, style)?;
                self.offset = Some(offset);
                Ok(&value[consumed..])
            }
            Chunk::ZoneName => {
                if let Some(rest) = value.strip_prefix("UTC") {
                    self.utc = true;
                    return Ok(rest);
                }
                let len = zone_name_len(value).ok_or(Failure::Bad)?;
                self.zone_name = Some(&value[..len]);
                Ok(&value[len..])
            }
            Chunk::Fraction(fraction) if !fraction.trim => {
                // Fixed width fractions need exactly that many digits.
                let len = 1 + fraction.digits;
                if bytes.len() < len {
                    return Err(Failure::Bad);
                }
                self.nanos = nanoseconds(bytes, len)?;
                Ok(&value[len..])
            }
            Chunk::Fraction(_) => {
                if !starts_with_fraction(bytes) {
                    // The fraction is optional.
                    return Ok(value);
                }
                let len = 1 + digit_run(&bytes[1..]);
                self.nanos = nanoseconds(bytes, len)?;
                Ok(&value[len..])
            }
        }
    }

    /// Accepts a fractional second after the seconds even when the layout
    /// has no fraction chunk of its own.
    fn trailing_fraction(&mut self, value: &'a str, layout_after: &str) -> Result<&'a str, Failure> {
        let bytes = value.as_bytes();
        if !starts_with_fraction(bytes) || matches!(next_chunk(layout_after).chunk, Some(Chunk::Fraction(_))) {
            return Ok(value);
        }

        let len = 1 + digit_run(&bytes[1..]);
        self.nanos = nanoseconds(bytes, len)?;
        Ok(&value[len..])
    }

    fn into_zoned(mut self) -> Result<Zoned, Reason> {
        if self.pm && self.hour < 12 {
            self.hour += 12;
        } else if self.am && self.hour == 12 {
            self.hour = 0;
        }

        let (month, day) = match self.year_day {
            Some(year_day) => self.resolve_year_day(year_day)?,
            None => (self.month.unwrap_or(1), self.day.unwrap_or(1)),
        };

        if day < 1 || day > days_in_month(month, self.year) {
            return Err(Reason::OutOfRange("day"));
        }

        let datetime = DateTime::new(
            narrow(self.year)?,
            narrow(month)?,
            narrow(day)?,
            narrow(self.hour)?,
            narrow(self.minute)?,
            narrow(self.second)?,
            narrow(self.nanos)?,
        )
        .map_err(|error| unrepresentable(&error))?;

        if self.utc {
            return datetime.to_zoned(TimeZone::UTC).map_err(|error| unrepresentable(&error));
        }

        let (offset, zone) = match (self.offset, self.zone_name) {
            (Some(seconds), name) => {
                let offset = Offset::from_seconds(seconds).map_err(|error| unrepresentable(&error))?;
                let zone = name.map_or_else(|| TimeZone::fixed(offset), |name| named_zone(name, offset));
                (offset, zone)
            }
            (None, Some(name)) => {
                let offset = implied_offset(name);
                (offset, named_zone(name, offset))
            }
            (None, None) => return datetime.to_zoned(TimeZone::UTC).map_err(|error| unrepresentable(&error)),
        };

        let timestamp = offset.to_timestamp(datetime).map_err(|error| unrepresentable(&error))?;
        Ok(Zoned::new(timestamp, zone))
    }

    fn resolve_year_day(&self, mut year_day: i64) -> Result<(i64, i64), Reason> {
        let mut resolved = None;
        if is_leap(self.year) {
            if year_day == 31 + 29 {
                resolved = Some((2, 29));
            } else if year_day > 31 + 29 {
                year_day -= 1;
            }
        }

        if !(1..=365).contains(&year_day) {
            return Err(Reason::OutOfRange("day-of-year"));
        }

        let (month, day) = resolved
            .or_else(|| {
                (1..)
                    .zip(DAYS_BEFORE.windows(2))
                    .find(|(_, bounds)| year_day <= bounds[1])
                    .map(|(month, bounds)| (month, year_day - bounds[0]))
            })
            .ok_or(Reason::OutOfRange("day-of-year"))?;

        if self.month.is_some_and(|m| m != month) {
            return Err(Reason::YearDayMismatch("month"));
        }
        if self.day.is_some_and(|d| d != day) {
            return Err(Reason::YearDayMismatch("day"));
        }

        Ok((month, day))
    }
}

/// Skips the literal `prefix` at the start of `value`.
///
/// A space in `prefix` matches a run of spaces in `value`. On failure the
/// remaining text at the point of mismatch is returned.
fn skip<'a>(mut value: &'a str, mut prefix: &str) -> Result<&'a str, &'a str> {
    while let Some(expected) = prefix.chars().next() {
        if expected == ' ' {
            if !value.is_empty() && !value.starts_with(' ') {
                return Err(value);
            }
            prefix = prefix.trim_start_matches(' ');
            value = value.trim_start_matches(' ');
            continue;
        }

        match value.strip_prefix(expected) {
            Some(rest) => value = rest,
            None => return Err(value),
        }
        prefix = &prefix[expected.len_utf8()..];
    }

    Ok(value)
}

/// Reads one or two digits, exactly two when `fixed`.
fn number(value: &str, fixed: bool) -> Result<(i64, &str), Failure> {
    leading_number(value, 2, fixed)
}

/// Reads one to three digits, exactly three when `fixed`.
fn number3(value: &str, fixed: bool) -> Result<(i64, &str), Failure> {
    leading_number(value, 3, fixed)
}

fn leading_number(value: &str, max: usize, fixed: bool) -> Result<(i64, &str), Failure> {
    let len = digit_run(value.as_bytes()).min(max);
    if len == 0 || (fixed && len != max) {
        return Err(Failure::Bad);
    }
    Ok((digits_value(&value.as_bytes()[..len]), &value[len..]))
}

/// Reads exactly `len` digits.
fn fixed_digits(value: &str, len: usize) -> Result<(i64, &str), Failure> {
    let digits = value.as_bytes().get(..len).ok_or(Failure::Bad)?;
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(Failure::Bad);
    }
    Ok((digits_value(digits), &value[len..]))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn digits_value(digits: &[u8]) -> i64 {
    digits
        .iter()
        .fold(0, |acc, digit| acc * 10 + i64::from(digit - b'0'))
}

const fn is_separator(byte: u8) -> bool {
    byte == b'.' || byte == b','
}

fn starts_with_fraction(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && is_separator(bytes[0]) && bytes[1].is_ascii_digit()
}

/// Reads a separator and `len - 1` digits as nanoseconds. Digits past the
/// ninth are validated but ignored.
fn nanoseconds(bytes: &[u8], len: usize) -> Result<i64, Failure> {
    if !is_separator(bytes[0]) {
        return Err(Failure::Bad);
    }

    let digits = &bytes[1..len];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(Failure::Bad);
    }

    let significant = &digits[..digits.len().min(9)];
    Ok((significant.len()..9).fold(digits_value(significant), |nanos, _| nanos * 10))
}

/// Parses a numeric UTC offset, returning its seconds and the bytes consumed.
fn numeric_offset(bytes: &[u8], style: OffsetStyle) -> Result<(i32, usize), Failure> {
    // Byte positions of the hour, minute and second digit pairs.
    let (len, minute_at, second_at) = match (style.precision, style.colon) {
        (OffsetPrecision::Hours, _) => (3, None, None),
        (OffsetPrecision::Minutes, false) => (5, Some(3), None),
        (OffsetPrecision::Minutes, true) => (6, Some(4), None),
        (OffsetPrecision::Seconds, false) => (7, Some(3), Some(5)),
        (OffsetPrecision::Seconds, true) => (9, Some(4), Some(7)),
    };

    let text = bytes.get(..len).ok_or(Failure::Bad)?;
    if style.colon && (text[3] != b':' || (second_at.is_some() && text[6] != b':')) {
        return Err(Failure::Bad);
    }

    let pair = |at: Option<usize>| -> Result<i32, Failure> {
        let Some(at) = at else {
            return Ok(0);
        };
        let digits = &text[at..at + 2];
        if digits.iter().all(u8::is_ascii_digit) {
            Ok(i32::from(digits[0] - b'0') * 10 + i32::from(digits[1] - b'0'))
        } else {
            Err(Failure::Bad)
        }
    };

    let hours = pair(Some(1))?;
    let minutes = pair(minute_at)?;
    let seconds = pair(second_at)?;

    // Offsets of 24 hours or 60 minutes do occur in the wild.
    if hours > 24 {
        return Err(Failure::Range("time zone offset hour"));
    }
    if minutes > 60 {
        return Err(Failure::Range("time zone offset minute"));
    }
    if seconds > 60 {
        return Err(Failure::Range("time zone offset second"));
    }

    let sign = match text[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(Failure::Bad),
    };

    Ok((sign * ((hours * 60 + minutes) * 60 + seconds), len))
}

const fn is_leap(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(month: i64, year: i64) -> i64 {
    if month == 2 && is_leap(year) {
        return 29;
    }
    usize::try_from(month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .map_or(0, |m| DAYS_BEFORE[m] - DAYS_BEFORE[m - 1])
}

fn narrow<T: TryFrom<i64>>(value: i64) -> Result<T, Reason> {
    T::try_from(value).ok().ok_or(Reason::OutOfRange("time"))
}

fn unrepresentable(error: &jiff::Error) -> Reason {
    Reason::Unrepresentable(error.to_string())
}
