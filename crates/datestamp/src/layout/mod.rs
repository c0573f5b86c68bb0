// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Formatting and parsing of [`Zoned`] values with reference-date layouts.
//!
//! A layout is written as the reference time `Mon Jan 2 15:04:05 MST 2006`
//! (Unix time `1136239445`) would be displayed. Each recognized element of the
//! reference time stands for the same element of the value being formatted or
//! parsed; everything else is literal text.
//!
//! | Element | Meaning |
//! |---|---|
//! | `January`, `Jan` | Month name |
//! | `1`, `01` | Month number |
//! | `Monday`, `Mon` | Weekday name |
//! | `2`, `_2`, `02` | Day of month |
//! | `__2`, `002` | Day of year |
//! | `15`, `3`, `03` | Hour, 24 and 12 hour clock |
//! | `4`, `04` | Minute |
//! | `5`, `05` | Second |
//! | `2006`, `06` | Year |
//! | `PM`, `pm` | Half of day |
//! | `MST` | Zone abbreviation |
//! | `Z07:00`, `-0700`, ... | UTC offset, `Z` variants write `Z` for UTC |
//! | `.000`, `.999`, `,000`, ... | Fractional second, fixed or trimmed |
//!
//! Parsing is strict: literal text must match (a space matches a run of
//! spaces), numbers are range checked, and trailing text is rejected. Fields
//! missing from the layout default to year 0, January 1st, midnight, UTC.
//! The local time zone of the machine is never consulted.
//!
//! # Examples
//!
//! ```
//! use datestamp::layout;
//!
//! let zoned = layout::parse("Jan _2 2006 15:04 MST", "Mar  7 2024 09:30 UTC")?;
//! assert_eq!(zoned.day(), 7);
//! assert_eq!(layout::format(&zoned, "2006-01-02T15:04:05Z07:00"), "2024-03-07T09:30:00Z");
//!
//! # Ok::<(), datestamp::layout::ParseError>(())
//! ```

use jiff::Zoned;

mod chunk;
mod names;
mod parse;
mod render;
mod zone;

pub use parse::ParseError;

/// Formats `zoned` according to `layout`.
///
/// ```
/// use datestamp::layout;
/// use jiff::Timestamp;
///
/// let zoned = Timestamp::UNIX_EPOCH.to_zoned(jiff::tz::TimeZone::UTC);
/// assert_eq!(layout::format(&zoned, "Monday, 02-Jan-06 3:04PM"), "Thursday, 01-Jan-70 12:00AM");
/// ```
#[must_use]
pub fn format(zoned: &Zoned, layout: &str) -> String {
    let mut out = String::with_capacity(layout.len() + 10);
    render::render_into(&mut out, zoned, layout);
    out
}

/// Appends `zoned` formatted according to `layout` to `out`.
pub fn format_into(out: &mut String, zoned: &Zoned, layout: &str) {
    render::render_into(out, zoned, layout);
}

/// Parses `value` according to `layout`.
///
/// # Errors
///
/// Returns a [`ParseError`] when `value` does not conform to `layout`, when a
/// field is out of range, or when the resulting instant is not representable.
pub fn parse(layout: &str, value: &str) -> Result<Zoned, ParseError> {
    parse::parse(layout, value)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::TimeZone;

    use super::*;

    static_assertions::assert_impl_all!(ParseError: std::error::Error, Clone, Eq, Send, Sync);

    #[test]
    fn format_into_appends() {
        let zoned = date(2024, 1, 1).at(1, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();
        let mut out = String::from("at ");
        format_into(&mut out, &zoned, "15:04");
        assert_eq!(out, "at 01:00");
    }

    #[test]
    fn format_then_parse() {
        let layout = "Monday, 02-Jan-2006 15:04:05.000 -07:00";
        let zoned = date(2023, 7, 14)
            .at(18, 45, 9, 321_000_000)
            .to_zoned(TimeZone::fixed(jiff::tz::offset(-4)))
            .unwrap();

        let text = format(&zoned, layout);
        assert_eq!(text, "Friday, 14-Jul-2023 18:45:09.321 -04:00");

        let parsed = parse(layout, &text).unwrap();
        assert_eq!(parsed.timestamp(), zoned.timestamp());
        assert_eq!(parsed.offset(), zoned.offset());
    }

    #[test]
    fn empty_layout() {
        assert_eq!(format(&Zoned::now(), ""), "");
        assert_eq!(parse("", "").unwrap().year(), 0);
    }
}
