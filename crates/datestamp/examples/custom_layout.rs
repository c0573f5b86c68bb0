// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This sample uses the layout engine directly with layouts that have no format tag.
//! In particular:
//!
//! - Formatting with day-of-year, 12-hour clock and trimmed fractional seconds
//! - Parsing text back with the same layout
//! - Switching a parsed value to one of the predefined formats

use datestamp::format::{Format, Rfc3339Nano};
use datestamp::layout;
use jiff::civil::date;
use jiff::tz::TimeZone;

const LOG_LINE: &str = "2006 day 002 at 3:04:05.999999999 PM (Z07:00)";
const COMPACT: &str = "20060102T150405Z0700";

fn main() -> anyhow::Result<()> {
    let zoned = date(2024, 3, 10)
        .at(21, 7, 30, 250_000_000)
        .to_zoned(TimeZone::fixed(jiff::tz::offset(2)))?;

    let text = layout::format(&zoned, LOG_LINE);
    println!("{text}");

    let parsed = layout::parse(LOG_LINE, &text)?;
    println!("Parsed back: {parsed}");

    println!("Compact: {}", layout::format(&zoned, COMPACT));

    // Any parsed value can be bound to a format tag.
    println!("As {}: {}", Rfc3339Nano::NAME, Rfc3339Nano::stamp(parsed));

    // Parse errors point at the element that failed.
    if let Err(error) = layout::parse(COMPACT, "20241310T000000Z") {
        println!("Rejected: {error}");
    }

    Ok(())
}
